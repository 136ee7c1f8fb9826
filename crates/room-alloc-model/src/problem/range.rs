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

use room_alloc_core::prelude::Timestamp;
use serde::{Deserialize, Serialize};

/// Inclusive eligibility window `{from, to}`.
///
/// Applied to pending queries only; fixed assignments are exempt.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StayRange {
    from: Timestamp,
    to: Timestamp,
}

impl StayRange {
    #[inline]
    pub fn new(from: Timestamp, to: Timestamp) -> Self {
        Self { from, to }
    }

    #[inline]
    pub fn from(&self) -> &Timestamp {
        &self.from
    }

    #[inline]
    pub fn to(&self) -> &Timestamp {
        &self.to
    }

    /// A stay is admitted when `from <= check_in` and `check_out <= to`.
    #[inline]
    pub fn admits(&self, check_in: &Timestamp, check_out: &Timestamp) -> bool {
        check_in >= &self.from && check_out <= &self.to
    }
}

impl std::fmt::Display for StayRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{} ..= {}]", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[inline]
    fn ts(raw: &str) -> Timestamp {
        Timestamp::new(raw)
    }

    fn january() -> StayRange {
        StayRange::new(ts("2024-01-01"), ts("2024-01-31"))
    }

    #[test]
    fn test_admits_interior_stay() {
        assert!(january().admits(&ts("2024-01-10"), &ts("2024-01-15")));
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(january().admits(&ts("2024-01-01"), &ts("2024-01-31")));
    }

    #[test]
    fn test_rejects_stay_starting_before_window() {
        assert!(!january().admits(&ts("2023-12-31"), &ts("2024-01-05")));
    }

    #[test]
    fn test_rejects_stay_ending_after_window() {
        assert!(!january().admits(&ts("2024-01-20"), &ts("2024-02-01")));
    }

    #[test]
    fn test_serde_round_trip() {
        let range = january();
        let json = serde_json::to_string(&range).unwrap();
        assert_eq!(json, r#"{"from":"2024-01-01","to":"2024-01-31"}"#);
        let back: StayRange = serde_json::from_str(&json).unwrap();
        assert_eq!(back, range);
    }
}
