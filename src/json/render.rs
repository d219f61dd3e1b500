//! Purpose: Provide the internal compact JSON encode entrypoint.
//! Exports: `to_compact`.
//! Role: Serializer boundary that centralizes serde_json encode details.
//! Invariants: Output carries no whitespace outside string literals.
//! Invariants: Member order and number literals are emitted exactly as parsed.

use serde_json::Value;

pub(crate) fn to_compact(value: &Value) -> Result<String, serde_json::Error> {
    serde_json::to_string(value)
}
