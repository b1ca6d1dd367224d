//! Parameterized menu filter.
//!
//! Builds `category IN (...) AND instr(name, ?) > 0` with every value bound
//! as a positional parameter. `instr` is used instead of `LIKE` because it is
//! case-sensitive and has no wildcard characters.

use crate::schema::MENU_COLUMNS;

/// Filter over the menu table: category membership plus optional name substring.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MenuFilter {
    categories: Vec<String>,
    name_contains: Option<String>,
}

impl MenuFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to these categories. Duplicates are dropped.
    ///
    /// A filter with no categories matches nothing.
    pub fn categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for category in categories {
            let category = category.as_ref();
            if !self.categories.iter().any(|c| c == category) {
                self.categories.push(category.to_string());
            }
        }
        self
    }

    /// Require `name` to contain `text`. Empty text adds no condition.
    pub fn name_contains(mut self, text: &str) -> Self {
        self.name_contains = (!text.is_empty()).then(|| text.to_string());
        self
    }

    /// True when no row can match.
    pub fn is_empty_selection(&self) -> bool {
        self.categories.is_empty()
    }

    /// Render the statement and the values to bind, in placeholder order.
    pub fn to_sql(&self) -> (String, Vec<&str>) {
        let mut sql = format!("SELECT {MENU_COLUMNS} FROM menu WHERE ");

        if self.categories.is_empty() {
            sql.push('0');
            return (sql, Vec::new());
        }

        let placeholders = (1..=self.categories.len())
            .map(|i| format!("?{i}"))
            .collect::<Vec<_>>()
            .join(", ");
        sql.push_str(&format!("category IN ({placeholders})"));

        let mut params: Vec<&str> = self.categories.iter().map(String::as_str).collect();

        if let Some(text) = &self.name_contains {
            sql.push_str(&format!(" AND instr(name, ?{}) > 0", params.len() + 1));
            params.push(text);
        }

        (sql, params)
    }
}
