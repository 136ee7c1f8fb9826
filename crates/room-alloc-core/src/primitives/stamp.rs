// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use serde::{Deserialize, Serialize};

/// An endpoint on the booking time axis, kept in its raw encoded form.
///
/// Ordering is lexicographic over the encoding. The engine requires an
/// encoding whose string order coincides with chronological order
/// (ISO-8601 dates and date-times qualify). Endpoints are compared and
/// re-emitted byte-for-byte, never reformatted.
#[repr(transparent)]
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(String);

impl Timestamp {
    #[inline]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<&str> for Timestamp {
    #[inline]
    fn from(raw: &str) -> Self {
        Self(raw.to_owned())
    }
}

impl From<String> for Timestamp {
    #[inline]
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_is_lexicographic() {
        let a = Timestamp::new("2024-01-09");
        let b = Timestamp::new("2024-01-10");
        let c = Timestamp::new("2024-02-01");
        assert!(a < b);
        assert!(b < c);
        assert!(a < c);
    }

    #[test]
    fn test_equal_encodings_are_equal() {
        assert_eq!(Timestamp::new("2024-03-01"), Timestamp::from("2024-03-01"));
    }

    #[test]
    fn test_display_and_as_str_expose_raw_encoding() {
        let t = Timestamp::new("2024-12-31T23:00:00Z");
        assert_eq!(t.as_str(), "2024-12-31T23:00:00Z");
        assert_eq!(t.to_string(), "2024-12-31T23:00:00Z");
    }

    #[test]
    fn test_serde_is_transparent() {
        let t = Timestamp::new("2024-06-15");
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, "\"2024-06-15\"");
        let back: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }
}
