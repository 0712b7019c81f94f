/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use percent_encoding::percent_decode_str;

use super::UrlDecodeError;

/// Decode a url given on the command line.
///
/// `%XX` escapes are decoded and `+` is taken as a space. Every `%` must be
/// followed by two hex digits.
pub fn decode_url(s: &str) -> Result<String, UrlDecodeError> {
    let b = s.as_bytes();
    for p in memchr::memchr_iter(b'%', b) {
        if b.len() < p + 3 {
            return Err(UrlDecodeError::IncompleteEscape(p));
        }
        if !(b[p + 1].is_ascii_hexdigit() && b[p + 2].is_ascii_hexdigit()) {
            return Err(UrlDecodeError::InvalidEscape(p));
        }
    }

    let s = s.replace('+', " ");
    let decoded = percent_decode_str(&s).decode_utf8()?;
    Ok(decoded.into_owned())
}
