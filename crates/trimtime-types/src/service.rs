use serde::{Deserialize, Serialize};

/// A haircut service offered by the shop.
///
/// Catalog entries are reference data: loaded once at startup and never
/// created or destroyed while the shop is running.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    /// Catalog key the customer types to pick this service ("1", "2", ...).
    pub id: String,
    pub name: String,
    /// Price in minor currency units (centavos).
    pub price_cents: u64,
}

impl Service {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price_cents: u64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price_cents,
        }
    }
}
