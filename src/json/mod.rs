//! Purpose: Internal JSON decode/encode boundary shared by runtime callsites.
//! Exports: `parse` and `render` modules used by core and the CLI.
//! Role: Single seam for serde_json usage so callsites avoid ad hoc codec logic.
//! Invariants: Runtime JSON decoding and compact encoding go through this module.
//! Invariants: Helper APIs stay small and deterministic (no hidden global state).

pub(crate) mod parse;
pub(crate) mod render;
