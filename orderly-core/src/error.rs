/// Errors produced when validating order payloads.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ValidationError {
    /// The `item` field was absent or null.
    #[error("item is required")]
    MissingItem,

    /// The `quantity` field was absent or null.
    #[error("quantity is required")]
    MissingQuantity,

    /// The `quantity` field was NaN or negative.
    #[error("invalid quantity {value}: must be a non-negative number")]
    InvalidQuantity { value: f64 },

    /// A caller-supplied `id` was empty or whitespace-only.
    #[error("id must not be blank")]
    BlankId,
}
