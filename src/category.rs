//! Icons for the well-known expense categories.

/// The icon shown for categories that are not in [CATEGORY_ICONS].
pub const DEFAULT_CATEGORY_ICON: &str = "📦";

/// Categories with a dedicated icon. Matching is case-sensitive.
pub const CATEGORY_ICONS: [(&str, &str); 10] = [
    ("Food", "🍔"),
    ("Transportation", "🚗"),
    ("Housing", "🏠"),
    ("Entertainment", "🎬"),
    ("Utilities", "💡"),
    ("Healthcare", "🏥"),
    ("Shopping", "🛍️"),
    ("Travel", "✈️"),
    ("Education", "📚"),
    ("Other", "📦"),
];

/// The icon to display next to `category`.
pub fn category_icon(category: &str) -> &'static str {
    CATEGORY_ICONS
        .iter()
        .find(|(name, _)| *name == category)
        .map_or(DEFAULT_CATEGORY_ICON, |(_, icon)| *icon)
}
