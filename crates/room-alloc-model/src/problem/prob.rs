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

/// One input snapshot: the queries to place, the ordered room roster, and
/// an optional eligibility range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    queries: Vec<BookingQuery>,
    rooms: RoomRoster,
    #[serde(default)]
    range: Option<StayRange>,
}

impl Problem {
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
    pub fn into_parts(self) -> (Vec<BookingQuery>, RoomRoster, Option<StayRange>) {
        (self.queries, self.rooms, self.range)
    }
}
