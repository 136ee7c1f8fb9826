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

use crate::problem::{query::BookingQuery, range::StayRange, room::RoomRoster};
use serde::{Deserialize, Serialize};

/// The annotated output snapshot: processed queries sorted by check-in,
/// with the room roster and range echoed unchanged from the input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    queries: Vec<BookingQuery>,
    rooms: RoomRoster,
    range: Option<StayRange>,
}

impl Allocation {
    #[inline]
    pub fn new(queries: Vec<BookingQuery>, rooms: RoomRoster, range: Option<StayRange>) -> Self {
        Self {
            queries,
            rooms,
            range,
        }
    }

    #[inline]
    pub fn queries(&self) -> &[BookingQuery] {
        &self.queries
    }

    #[inline]
    pub fn rooms(&self) -> &RoomRoster {
        &self.rooms
    }

    #[inline]
    pub fn range(&self) -> Option<&StayRange> {
        self.range.as_ref()
    }

    #[inline]
    pub fn assigned_len(&self) -> usize {
        self.queries.iter().filter(|q| q.assigned()).count()
    }

    #[inline]
    pub fn unassigned_len(&self) -> usize {
        self.queries.len() - self.assigned_len()
    }

    /// Two-space pretty JSON, the payload's external representation.
    #[inline]
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::room::RoomIdentifier;
    use room_alloc_core::prelude::Timestamp;

    #[inline]
    fn ts(raw: &str) -> Timestamp {
        Timestamp::new(raw)
    }

    #[inline]
    fn room(name: &str) -> RoomIdentifier {
        RoomIdentifier::new(name.to_owned())
    }

    #[test]
    fn test_counts_split_assigned_and_unassigned() {
        let queries = vec![
            BookingQuery::new(ts("2024-01-01"), ts("2024-01-02")).with_assignment(room("A")),
            BookingQuery::new(ts("2024-01-03"), ts("2024-01-04")),
        ];
        let alloc = Allocation::new(queries, RoomRoster::new(), None);
        assert_eq!(alloc.assigned_len(), 1);
        assert_eq!(alloc.unassigned_len(), 1);
    }

    #[test]
    fn test_missing_range_serializes_as_null() {
        let alloc = Allocation::new(Vec::new(), RoomRoster::new(), None);
        let out = serde_json::to_value(&alloc).unwrap();
        assert!(out["range"].is_null());
        assert!(out["queries"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_pretty_output_uses_two_space_indent() {
        let alloc = Allocation::new(Vec::new(), RoomRoster::new(), None);
        let json = alloc.to_json_pretty().unwrap();
        assert!(json.contains("\n  \"queries\""));
    }
}
