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

use crate::problem::{err::PayloadLoadError, prob::Problem};
use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

/// Reads the `{queries, rooms, range}` JSON payload from the outside
/// world. This is the fatal boundary of the engine: any failure here ends
/// the run, while the allocation core itself never fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PayloadLoader;

impl PayloadLoader {
    #[inline]
    pub fn new() -> Self {
        Self
    }

    #[inline]
    pub fn from_reader<R: Read>(&self, r: R) -> Result<Problem, PayloadLoadError> {
        Ok(serde_json::from_reader(BufReader::new(r))?)
    }

    #[inline]
    pub fn from_str(&self, s: &str) -> Result<Problem, PayloadLoadError> {
        Ok(serde_json::from_str(s)?)
    }

    #[inline]
    pub fn from_path(&self, path: impl AsRef<Path>) -> Result<Problem, PayloadLoadError> {
        let file = File::open(path).map_err(PayloadLoadError::Io)?;
        self.from_reader(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL_OK: &str = r#"{
        "queries": [
            {"checkIn": "2024-01-02", "checkOut": "2024-01-05"},
            {"checkIn": "2024-01-06", "checkOut": "2024-01-08",
             "assigned": true, "roomId": "101"}
        ],
        "rooms": ["101", "102"],
        "range": null
    }"#;

    #[test]
    fn test_loads_minimal_payload() {
        let loader = PayloadLoader::new();
        let p = loader.from_str(SMALL_OK).unwrap();
        assert_eq!(p.queries().len(), 2);
        assert_eq!(p.rooms().len(), 2);
        assert!(p.range().is_none());
    }

    #[test]
    fn test_from_reader_matches_from_str() {
        let loader = PayloadLoader::new();
        let a = loader.from_str(SMALL_OK).unwrap();
        let b = loader.from_reader(SMALL_OK.as_bytes()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_malformed_payload_is_a_json_error() {
        let loader = PayloadLoader::new();
        let err = loader.from_str("{not json").unwrap_err();
        assert!(matches!(err, PayloadLoadError::Json(_)));
        assert!(err.to_string().starts_with("malformed payload:"));
    }

    #[test]
    fn test_wrong_shape_is_a_json_error() {
        let loader = PayloadLoader::new();
        let err = loader.from_str(r#"{"rooms": ["A"]}"#).unwrap_err();
        assert!(matches!(err, PayloadLoadError::Json(_)));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let loader = PayloadLoader::new();
        let err = loader.from_path("/nonexistent/payload.json").unwrap_err();
        assert!(matches!(err, PayloadLoadError::Io(_)));
        assert!(err.to_string().starts_with("I/O error:"));
    }
}
