use serde::{Deserialize, Serialize};

/// Notification category.
///
/// Closed per deployment: adding a category means a new variant here plus
/// an entry in `as_str()`/`parse()`. The `as_str()` value is used as the
/// seed-file key; once published, do not rename. The view layer resolves
/// each category to an icon; no rendering concern lives here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Message,
    Group,
    Like,
    Achievement,
}

impl Category {
    /// Stable key for seed files and CLI filters.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Message => "message",
            Self::Group => "group",
            Self::Like => "like",
            Self::Achievement => "achievement",
        }
    }

    /// All variants for iteration.
    pub fn all() -> &'static [Category] {
        &[Self::Message, Self::Group, Self::Like, Self::Achievement]
    }

    /// Parse from a seed key or CLI word. Unknown keys return `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "message" => Some(Self::Message),
            "group" => Some(Self::Group),
            "like" => Some(Self::Like),
            "achievement" => Some(Self::Achievement),
            _ => None,
        }
    }
}

/// View filter over the notification set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Category(Category),
}

impl Filter {
    /// Parse `"all"` or a category key. Unknown words return `None`.
    pub fn parse(s: &str) -> Option<Self> {
        if s == "all" {
            return Some(Self::All);
        }
        Category::parse(s).map(Self::Category)
    }

    pub fn matches(&self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Category(c) => *c == category,
        }
    }
}

/// A single notification.
///
/// `id` is unique within the active set and stable for the notification's
/// lifetime. The display payload (`title`, `description`, `created_at`) is
/// immutable; only `read` changes, and only through the store's mark-read
/// operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub category: Category,
    pub title: String,
    pub description: String,
    /// Display timestamp, e.g. "5 min ago". Opaque to the store.
    pub created_at: String,
    pub read: bool,
}

#[cfg(test)]
mod tests {
    use super::{Category, Filter};

    #[test]
    fn category_keys_round_trip() {
        for category in Category::all() {
            assert_eq!(Category::parse(category.as_str()), Some(*category));
        }
    }

    #[test]
    fn filter_all_matches_everything() {
        for category in Category::all() {
            assert!(Filter::All.matches(*category));
        }
    }

    #[test]
    fn filter_category_matches_only_itself() {
        let filter = Filter::Category(Category::Like);
        assert!(filter.matches(Category::Like));
        assert!(!filter.matches(Category::Message));
    }

    #[test]
    fn filter_parse_rejects_unknown_words() {
        assert_eq!(Filter::parse("unknown"), None);
        assert_eq!(Filter::parse("all"), Some(Filter::All));
    }
}
