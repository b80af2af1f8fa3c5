//! WASM bindings for shameless-bignum
//!
//! JavaScript-friendly wrappers over [`crate::commands`]. Values cross the
//! boundary as decimal strings since JS numbers cannot hold them exactly.

use std::cmp::Ordering;

use wasm_bindgen::prelude::*;

use crate::commands::{self, Operation};

/// Initialize panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Use wee_alloc as the global allocator for smaller WASM binary size
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Apply a binary operation to two decimal integers
///
/// # Arguments
/// * `op` - One of `+ - * / %` (or `add sub mul div rem`)
/// * `lhs` - Left operand as decimal text
/// * `rhs` - Right operand as decimal text
///
/// # Returns
/// The canonical decimal result, or an error message
///
/// # Example (JavaScript)
/// ```javascript
/// const product = wasm_evaluate("*", "123456789", "987654321");
/// console.log(product); // "121932631112635269"
/// ```
#[wasm_bindgen]
pub fn wasm_evaluate(op: &str, lhs: &str, rhs: &str) -> Result<String, JsValue> {
    let op: Operation = op
        .parse()
        .map_err(|e| JsValue::from_str(&format!("Invalid operation: {}", e)))?;

    commands::evaluate(op, lhs, rhs)
        .map_err(|e| JsValue::from_str(&format!("Evaluation failed: {:#}", e)))
}

/// Compare two decimal integers
///
/// # Returns
/// `-1`, `0` or `1` as `lhs` is less than, equal to or greater than `rhs`
#[wasm_bindgen]
pub fn wasm_compare(lhs: &str, rhs: &str) -> Result<i32, JsValue> {
    let ordering = commands::compare(lhs, rhs)
        .map_err(|e| JsValue::from_str(&format!("Compare failed: {:#}", e)))?;

    Ok(match ordering {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    })
}

/// Sum an array of decimal integers
#[wasm_bindgen]
pub fn wasm_sum(values: Vec<String>) -> Result<String, JsValue> {
    commands::sum(&values).map_err(|e| JsValue::from_str(&format!("Sum failed: {:#}", e)))
}

/// Multiply an array of decimal integers
#[wasm_bindgen]
pub fn wasm_product(values: Vec<String>) -> Result<String, JsValue> {
    commands::product(&values)
        .map_err(|e| JsValue::from_str(&format!("Product failed: {:#}", e)))
}

/// Describe a decimal integer as a JSON string
///
/// # Example (JavaScript)
/// ```javascript
/// const info = JSON.parse(wasm_describe("-0001000000000"));
/// console.log(`${info.canonical} has ${info.digit_count} digits`);
/// ```
#[wasm_bindgen]
pub fn wasm_describe(value: &str) -> Result<String, JsValue> {
    let summary = commands::describe(value)
        .map_err(|e| JsValue::from_str(&format!("Describe failed: {:#}", e)))?;

    serde_json::to_string(&summary)
        .map_err(|e| JsValue::from_str(&format!("Serialization failed: {}", e)))
}

/// Describe a decimal integer as a plain JS object
#[wasm_bindgen]
pub fn wasm_describe_value(value: &str) -> Result<JsValue, JsValue> {
    let summary = commands::describe(value)
        .map_err(|e| JsValue::from_str(&format!("Describe failed: {:#}", e)))?;

    serde_wasm_bindgen::to_value(&summary)
        .map_err(|e| JsValue::from_str(&format!("Serialization failed: {}", e)))
}
