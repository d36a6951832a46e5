/// A customer of the shop, keyed by phone number.
///
/// Customers are created on first booking (or an explicit add) and are never
/// updated or deleted for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    /// 11 ASCII digits starting with "09". Unique across the store.
    pub phone: String,
    /// Normalized display name ("juan dela cruz" -> "Juan Dela Cruz").
    pub name: String,
}

impl Customer {
    /// Case-insensitive substring match against the stored name.
    pub fn name_matches(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase())
    }
}
