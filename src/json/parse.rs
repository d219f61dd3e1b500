//! Purpose: Provide the internal runtime JSON decode entrypoint.
//! Exports: `from_str`, `number_token_collision`, `NUMBER_TOKEN`.
//! Role: Parser boundary that centralizes serde_json decode details.
//! Invariants: Decoding accepts exactly one document; trailing data is an error.
//! Invariants: Numbers keep their source literal (arbitrary precision) and objects keep member order.
//! Invariants: Objects that open with the decoder's reserved number token are detected up front.
//! Notes: Error mapping is done by callsites so domain context stays explicit.

use serde::de::DeserializeOwned;

/// Internal key serde_json uses to carry number literals while the
/// `arbitrary_precision` feature is on. An input object whose first member
/// key is this token decodes as a plain number, so such documents cannot be
/// round-tripped.
pub(crate) const NUMBER_TOKEN: &str = "$serde_json::private::Number";

pub(crate) fn from_str<T: DeserializeOwned>(input: &str) -> Result<T, serde_json::Error> {
    serde_json::from_str(input)
}

/// Byte offset of an object key spelled exactly as `NUMBER_TOKEN`, found by
/// scanning for `{`, optional whitespace, the quoted token, optional
/// whitespace, then `:`. In well-formed JSON that shape can only be a first
/// member key, the one position the decoder rewrites; the token as a string
/// value or a later member key never matches. Escaped spellings of the
/// token are not detected.
pub(crate) fn number_token_collision(input: &str) -> Option<usize> {
    fn skip_ws(bytes: &[u8], mut at: usize) -> usize {
        while matches!(bytes.get(at), Some(&(b' ' | b'\t' | b'\n' | b'\r'))) {
            at += 1;
        }
        at
    }

    let bytes = input.as_bytes();
    let mut search = 0;
    while let Some(found) = input[search..].find('{') {
        let key = skip_ws(bytes, search + found + 1);
        if bytes.get(key) == Some(&b'"') && input[key + 1..].starts_with(NUMBER_TOKEN) {
            let close = key + 1 + NUMBER_TOKEN.len();
            if bytes.get(close) == Some(&b'"')
                && bytes.get(skip_ws(bytes, close + 1)) == Some(&b':')
            {
                return Some(key);
            }
        }
        search += found + 1;
    }
    None
}
