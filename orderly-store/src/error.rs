//! Error types for the store crate.

/// Errors that can occur during order persistence operations.
///
/// The in-process table cannot fail, but this is the channel through which a
/// networked table implementation surfaces unavailability; handlers translate
/// any variant into an opaque server error.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum StoreError {
    /// The backing table rejected or failed an operation.
    #[error("table '{table}' unavailable: {reason}")]
    Unavailable { table: String, reason: String },
}
