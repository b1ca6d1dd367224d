//! Database query functions organized by domain.

pub mod menu;
pub mod profile;
