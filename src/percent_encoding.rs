//! Percent-encoding helpers.
//!
//! Component serialization never double-encodes: every string is decoded
//! first and encoded again, so already-encoded input comes out unchanged.
//! Recoding works on bytes, so escapes that are not UTF-8 (`%E9` from a
//! Latin-1 form, say) survive as they are.

use std::borrow::Cow;

use percent_encoding::{percent_decode_str, percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left alone by RFC 3986 "raw" encoding: `ALPHA DIGIT - . _ ~`.
const RAW: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Characters left alone by form encoding (`application/x-www-form-urlencoded`).
///
/// A space is excluded here because it is written as `+` separately.
const FORM: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b' ');

/// Characters allowed in a scheme besides alphanumerics.
const SCHEME: &AsciiSet = &NON_ALPHANUMERIC.remove(b'+').remove(b'-').remove(b'.');

/// Percent-decodes the string into bytes.
#[inline]
#[must_use]
fn decode_bytes(s: &str) -> Cow<'_, [u8]> {
    percent_decode_str(s).into()
}

/// Percent-decodes the string into bytes, treating `+` as a space.
#[must_use]
fn form_decode_bytes(s: &str) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(s.len());
    for (i, part) in s.split('+').enumerate() {
        if i > 0 {
            bytes.push(b' ');
        }
        bytes.extend(percent_decode_str(part));
    }
    bytes
}

/// Form-encodes bytes: spaces become `+`, and `~` is encoded.
#[must_use]
fn form_encode_bytes(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for chunk in percent_encode(bytes, FORM) {
        out.extend(chunk.chars().map(|c| if c == ' ' { '+' } else { c }));
    }
    out
}

/// Percent-decodes the string, or returns `None` if the result is not UTF-8.
#[must_use]
pub(crate) fn decode(s: &str) -> Option<Cow<'_, str>> {
    percent_decode_str(s).decode_utf8().ok()
}

/// Percent-decodes the string, treating `+` as a space.
///
/// Invalid UTF-8 sequences are replaced with U+FFFD.
#[must_use]
pub(crate) fn form_decode(s: &str) -> String {
    match String::from_utf8(form_decode_bytes(s)) {
        Ok(decoded) => decoded,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    }
}

/// Returns `true` if form-decoding the string gives valid UTF-8.
#[must_use]
pub(crate) fn form_decodes_to_utf8(s: &str) -> bool {
    std::str::from_utf8(&form_decode_bytes(s)).is_ok()
}

/// Form-encodes the string: spaces become `+`, and `~` is encoded.
#[inline]
#[must_use]
pub(crate) fn form_encode(s: &str) -> String {
    form_encode_bytes(s.as_bytes())
}

/// Decodes then encodes everything except unreserved characters.
#[must_use]
pub(crate) fn recode(s: &str) -> String {
    percent_encode(&decode_bytes(s), RAW).to_string()
}

/// Decodes then form-encodes the string.
#[inline]
#[must_use]
pub(crate) fn form_recode(s: &str) -> String {
    form_encode_bytes(&form_decode_bytes(s))
}

/// Encodes a scheme name, keeping the characters the scheme grammar allows.
#[must_use]
pub(crate) fn encode_scheme(s: &str) -> String {
    percent_encode(&decode_bytes(s), SCHEME).to_string()
}

/// Recodes every maximal run of characters that are not delimiters.
///
/// Delimiters are copied verbatim.
#[must_use]
pub(crate) fn recode_runs(s: &str, delimiters: &[char]) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while !rest.is_empty() {
        match rest.find(delimiters) {
            Some(0) => {
                let delim_len = rest.chars().next().map_or(1, char::len_utf8);
                out.push_str(&rest[..delim_len]);
                rest = &rest[delim_len..];
            }
            Some(pos) => {
                out.push_str(&recode(&rest[..pos]));
                rest = &rest[pos..];
            }
            None => {
                out.push_str(&recode(rest));
                rest = "";
            }
        }
    }
    out
}
