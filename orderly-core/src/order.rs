use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::OrderId;
use crate::quantity::Quantity;

/// A persisted purchase request.
///
/// The id is assigned by the store and immutable afterwards; "updates"
/// replace the full record under the same id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Order {
    /// Opaque server-generated identifier, unique across the table.
    pub id: OrderId,
    /// Name of the ordered good.
    pub item: String,
    /// Ordered amount.
    pub quantity: Quantity,
}

impl Order {
    /// Assembles an order from an identifier and a validated draft.
    #[must_use]
    pub fn new(id: OrderId, draft: OrderDraft) -> Self {
        Self {
            id,
            item: draft.item,
            quantity: draft.quantity,
        }
    }
}

/// A validated candidate [`Order`] that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct OrderDraft {
    /// Name of the ordered good.
    pub item: String,
    /// Ordered amount.
    pub quantity: Quantity,
}

impl OrderDraft {
    /// Creates a draft from already-validated parts.
    pub fn new(item: impl Into<String>, quantity: Quantity) -> Self {
        Self {
            item: item.into(),
            quantity,
        }
    }

    /// Validates raw request fields into a draft.
    ///
    /// Both fields are optional at the wire level so that absent and
    /// JSON-null values land here rather than failing at deserialization;
    /// every write path funnels through this one check.
    ///
    /// # Errors
    /// Returns [`ValidationError::MissingItem`] if `item` is absent,
    /// [`ValidationError::MissingQuantity`] if `quantity` is absent, or
    /// [`ValidationError::InvalidQuantity`] if it is NaN or negative.
    pub fn from_parts(
        item: Option<String>,
        quantity: Option<f64>,
    ) -> Result<Self, ValidationError> {
        let item = item.ok_or(ValidationError::MissingItem)?;
        let quantity = Quantity::new(quantity.ok_or(ValidationError::MissingQuantity)?)?;
        Ok(Self { item, quantity })
    }
}
