/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use atoi::FromRadix10Checked;

use super::HttpLineParseError;

const CONTENT_LENGTH_PREFIX: &[u8] = b"Content-Length: ";
const CHUNKED_PREFIX: &[u8] = b"Transfer-Encoding: chunked";

/// The meaning of one response header line for body framing.
///
/// Header names are matched case-sensitively by prefix.
#[derive(Debug, Eq, PartialEq)]
pub enum HttpFramingHeader {
    ContentLength(u64),
    Chunked,
    Other,
}

impl HttpFramingHeader {
    pub fn parse(line: &[u8]) -> Result<Self, HttpLineParseError> {
        if let Some(value) = line.strip_prefix(CONTENT_LENGTH_PREFIX) {
            // no digits means a size of 0
            let (size, _) = u64::from_radix_10_checked(value.trim_ascii_start());
            let size = size.ok_or(HttpLineParseError::InvalidContentLength)?;
            Ok(HttpFramingHeader::ContentLength(size))
        } else if line.starts_with(CHUNKED_PREFIX) {
            Ok(HttpFramingHeader::Chunked)
        } else {
            Ok(HttpFramingHeader::Other)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_length() {
        assert_eq!(
            HttpFramingHeader::parse(b"Content-Length: 1024").unwrap(),
            HttpFramingHeader::ContentLength(1024)
        );
        assert_eq!(
            HttpFramingHeader::parse(b"Content-Length: 0").unwrap(),
            HttpFramingHeader::ContentLength(0)
        );
        assert_eq!(
            HttpFramingHeader::parse(b"Content-Length: 12abc").unwrap(),
            HttpFramingHeader::ContentLength(12)
        );
        assert_eq!(
            HttpFramingHeader::parse(b"Content-Length:  7").unwrap(),
            HttpFramingHeader::ContentLength(7)
        );
    }

    #[test]
    fn content_length_no_digits() {
        assert_eq!(
            HttpFramingHeader::parse(b"Content-Length: ").unwrap(),
            HttpFramingHeader::ContentLength(0)
        );
        assert_eq!(
            HttpFramingHeader::parse(b"Content-Length: abc").unwrap(),
            HttpFramingHeader::ContentLength(0)
        );
    }

    #[test]
    fn content_length_overflow() {
        assert!(matches!(
            HttpFramingHeader::parse(b"Content-Length: 99999999999999999999999"),
            Err(HttpLineParseError::InvalidContentLength)
        ));
    }

    #[test]
    fn chunked() {
        assert_eq!(
            HttpFramingHeader::parse(b"Transfer-Encoding: chunked").unwrap(),
            HttpFramingHeader::Chunked
        );
    }

    #[test]
    fn case_sensitive() {
        assert_eq!(
            HttpFramingHeader::parse(b"content-length: 5").unwrap(),
            HttpFramingHeader::Other
        );
        assert_eq!(
            HttpFramingHeader::parse(b"Transfer-Encoding: gzip").unwrap(),
            HttpFramingHeader::Other
        );
        assert_eq!(
            HttpFramingHeader::parse(b"Server: test").unwrap(),
            HttpFramingHeader::Other
        );
    }
}
