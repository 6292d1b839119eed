//! List control state: search text, category, and sort key.

#[cfg(test)]
#[path = "filters_test.rs"]
mod filters_test;

/// Current values of the search box and the two filter selects.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    pub search: String,
    /// Selected category; empty means all categories.
    pub category: String,
    pub sort: SortKey,
}

impl FilterState {
    /// Fall back to all categories when the selected one is no longer offered.
    ///
    /// Returns whether the selection was reset.
    pub fn retain_category(&mut self, categories: &[String]) -> bool {
        if self.category.is_empty() || categories.iter().any(|c| *c == self.category) {
            return false;
        }
        self.category.clear();
        true
    }
}

/// Ordering applied to the filtered activities.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
    /// By activity name.
    #[default]
    Name,
    /// By schedule text, falling back to the `time` field.
    Time,
    /// Server order.
    Unsorted,
}

impl SortKey {
    /// Parse a sort select value. Unknown values keep server order.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "name" => Self::Name,
            "time" => Self::Time,
            _ => Self::Unsorted,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Time => "time",
            Self::Unsorted => "",
        }
    }
}
