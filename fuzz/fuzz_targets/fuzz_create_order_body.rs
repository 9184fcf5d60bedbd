//! Fuzz target: JSON deserialization of the order request bodies.
//!
//! Verifies that arbitrary byte sequences fed to the JSON parser
//! never cause panics, UB, or unbounded resource consumption.

#![no_main]

use libfuzzer_sys::fuzz_target;
use orderly_gateway::routes::{CreateOrderBody, PutOrderBody};

fuzz_target!(|data: &[u8]| {
    // Errors are expected and fine; panics are not.
    let _ = serde_json::from_slice::<CreateOrderBody>(data);
    let _ = serde_json::from_slice::<PutOrderBody>(data);
});
