//! # lemon-types
//!
//! Shared domain types used across the Little Lemon workspace: menu rows,
//! the remote catalog document, the section vocabulary and the user profile.

pub mod menu;
pub mod profile;

pub use menu::{CatalogEntry, CatalogPayload, MenuItem, NewMenuItem};
pub use profile::{ProfileFieldError, UserProfile};

/// Menu sections in display order.
pub const DEFAULT_SECTIONS: [&str; 3] = ["starters", "mains", "desserts"];

/// Remote catalog document.
pub const DEFAULT_CATALOG_URL: &str =
    "https://raw.githubusercontent.com/Meta-Mobile-Developer-PC/Working-With-Data-API/main/capstone.json";

/// Directory holding the catalog's dish images.
pub const DEFAULT_IMAGE_BASE_URL: &str =
    "https://github.com/Meta-Mobile-Developer-PC/Working-With-Data-API/blob/main/images";

/// Display label for a section ("mains" -> "Mains").
pub fn section_label(section: &str) -> String {
    let mut chars = section.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Resolve an image filename to the URL it is served from.
pub fn image_url(base: &str, image: &str) -> String {
    format!("{}/{image}?raw=true", base.trim_end_matches('/'))
}
