//! Domain types for the orderly order service.
//!
//! Defines the order record, its validated components, and the validation
//! error taxonomy shared by every write path.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod error;
pub mod id;
pub mod order;
pub mod quantity;

pub use error::ValidationError;
pub use id::OrderId;
pub use order::{Order, OrderDraft};
pub use quantity::Quantity;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantity_valid_values_accept() {
        assert!(Quantity::new(0.0).is_ok());
        assert!(Quantity::new(3.0).is_ok());
        assert!(Quantity::new(0.5).is_ok());
        assert!(Quantity::new(1_000_000.0).is_ok());
    }

    #[test]
    fn quantity_negative_rejects() {
        assert!(Quantity::new(-1.0).is_err());
        assert!(Quantity::new(-0.001).is_err());
    }

    #[test]
    fn quantity_nan_rejects() {
        let result = Quantity::new(f64::NAN);
        assert!(
            matches!(result, Err(ValidationError::InvalidQuantity { .. })),
            "NaN must be rejected as InvalidQuantity"
        );
    }

    #[test]
    fn quantity_value_returns_inner_f64() {
        let quantity = match Quantity::new(2.5) {
            Ok(q) => q,
            Err(e) => panic!("unexpected error: {e}"),
        };
        assert!(
            (quantity.value() - 2.5).abs() < f64::EPSILON,
            "value() must return the inner f64"
        );
    }

    #[test]
    fn quantity_try_from_valid_value_succeeds() {
        let result = Quantity::try_from(7.0_f64);
        assert!(result.is_ok(), "TryFrom valid value must succeed");
    }

    #[test]
    fn quantity_display_formats_the_bare_number() {
        let quantity = match Quantity::new(2.5) {
            Ok(q) => q,
            Err(e) => panic!("unexpected error: {e}"),
        };
        assert_eq!(quantity.to_string(), "2.5", "Display must show the bare value");

        let whole = match Quantity::new(3.0) {
            Ok(q) => q,
            Err(e) => panic!("unexpected error: {e}"),
        };
        assert_eq!(whole.to_string(), "3", "whole values must not carry a decimal point");
    }

    #[test]
    fn order_id_random_is_non_empty_and_unique() {
        let a = OrderId::random();
        let b = OrderId::random();
        assert!(!a.as_str().is_empty(), "random id must be non-empty");
        assert_ne!(a, b, "two random ids must differ");
    }

    #[test]
    fn order_id_display_matches_inner_string() {
        let id = OrderId::new("abc-123");
        assert_eq!(id.to_string(), "abc-123");
    }

    #[test]
    fn draft_from_parts_missing_item_rejects() {
        let result = OrderDraft::from_parts(None, Some(3.0));
        assert!(
            matches!(result, Err(ValidationError::MissingItem)),
            "absent item must be rejected as MissingItem"
        );
    }

    #[test]
    fn draft_from_parts_missing_quantity_rejects() {
        let result = OrderDraft::from_parts(Some("widget".to_owned()), None);
        assert!(
            matches!(result, Err(ValidationError::MissingQuantity)),
            "absent quantity must be rejected as MissingQuantity"
        );
    }

    #[test]
    fn draft_from_parts_negative_quantity_rejects() {
        let result = OrderDraft::from_parts(Some("widget".to_owned()), Some(-1.0));
        assert!(
            matches!(result, Err(ValidationError::InvalidQuantity { .. })),
            "negative quantity must be rejected as InvalidQuantity"
        );
    }

    #[test]
    fn draft_from_parts_valid_builds_draft() {
        let draft = match OrderDraft::from_parts(Some("widget".to_owned()), Some(3.0)) {
            Ok(d) => d,
            Err(e) => panic!("unexpected error: {e}"),
        };
        assert_eq!(draft.item, "widget");
        assert!((draft.quantity.value() - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn order_new_assembles_id_and_draft() {
        let id = OrderId::random();
        let draft = match OrderDraft::from_parts(Some("bolt".to_owned()), Some(12.0)) {
            Ok(d) => d,
            Err(e) => panic!("unexpected error: {e}"),
        };
        let order = Order::new(id.clone(), draft);
        assert_eq!(order.id, id);
        assert_eq!(order.item, "bolt");
        assert!((order.quantity.value() - 12.0).abs() < f64::EPSILON);
    }

    #[test]
    fn order_wire_shape_uses_transparent_newtypes() {
        let draft = match OrderDraft::from_parts(Some("widget".to_owned()), Some(3.0)) {
            Ok(d) => d,
            Err(e) => panic!("unexpected error: {e}"),
        };
        let order = Order::new(OrderId::new("id-1"), draft);
        let json = match serde_json::to_value(&order) {
            Ok(v) => v,
            Err(e) => panic!("serialization failed: {e}"),
        };
        assert_eq!(json["id"], "id-1", "id must serialize as a bare string");
        assert_eq!(json["item"], "widget");
        assert_eq!(json["quantity"], 3.0, "quantity must serialize as a bare number");
    }

    #[test]
    fn order_round_trips_through_json() {
        let quantity = match Quantity::new(4.0) {
            Ok(q) => q,
            Err(e) => panic!("unexpected error: {e}"),
        };
        let order = Order::new(OrderId::random(), OrderDraft::new("gasket", quantity));
        let encoded = match serde_json::to_string(&order) {
            Ok(s) => s,
            Err(e) => panic!("serialization failed: {e}"),
        };
        let decoded: Order = match serde_json::from_str(&encoded) {
            Ok(o) => o,
            Err(e) => panic!("deserialization failed: {e}"),
        };
        assert_eq!(decoded, order, "order must survive the wire unchanged");
    }

    #[test]
    fn validation_error_display_names_the_field() {
        assert_eq!(ValidationError::MissingItem.to_string(), "item is required");
        assert_eq!(
            ValidationError::MissingQuantity.to_string(),
            "quantity is required"
        );
        assert_eq!(ValidationError::BlankId.to_string(), "id must not be blank");
        let err = ValidationError::InvalidQuantity { value: -2.0 };
        assert!(
            err.to_string().contains("-2"),
            "InvalidQuantity display must include the offending value"
        );
    }

    proptest::proptest! {
        #[test]
        fn proptest_quantity_new_accepts_exactly_the_valid_range(
            value in proptest::prelude::any::<f64>(),
        ) {
            let result = Quantity::new(value);
            let valid = !value.is_nan() && value >= 0.0;
            proptest::prop_assert_eq!(
                result.is_ok(),
                valid,
                "Quantity::new must accept iff non-NaN and non-negative"
            );
        }

        #[test]
        fn proptest_draft_from_parts_never_panics(
            item in proptest::option::of(".*"),
            quantity in proptest::option::of(proptest::prelude::any::<f64>()),
        ) {
            let _ = OrderDraft::from_parts(item, quantity);
        }
    }
}
