//! Fuzz target: order draft validation.
//!
//! Verifies that `OrderDraft::from_parts` never panics and that every draft
//! it accepts carries a usable quantity.

#![no_main]

use libfuzzer_sys::fuzz_target;
use orderly_core::OrderDraft;

fuzz_target!(|input: (Option<String>, Option<f64>)| {
    let (item, quantity) = input;
    if let Ok(draft) = OrderDraft::from_parts(item, quantity) {
        let value = draft.quantity.value();
        assert!(!value.is_nan(), "accepted drafts must carry a real quantity");
        assert!(value >= 0.0, "accepted quantities must be non-negative");
    }
});
