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

use crate::problem::room::RoomIdentifier;
use room_alloc_core::prelude::StayInterval;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoubleBookingError {
    room: RoomIdentifier,
    first: StayInterval,
    second: StayInterval,
}

impl DoubleBookingError {
    pub fn new(room: RoomIdentifier, first: StayInterval, second: StayInterval) -> Self {
        Self {
            room,
            first,
            second,
        }
    }

    pub fn room(&self) -> &RoomIdentifier {
        &self.room
    }

    pub fn first(&self) -> &StayInterval {
        &self.first
    }

    pub fn second(&self) -> &StayInterval {
        &self.second
    }
}

impl std::fmt::Display for DoubleBookingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} is double-booked: {} overlaps {}",
            self.room, self.second, self.first
        )
    }
}

impl std::error::Error for DoubleBookingError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedAssignmentAlteredError {
    index: usize,
}

impl FixedAssignmentAlteredError {
    pub fn new(index: usize) -> Self {
        Self { index }
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

impl std::fmt::Display for FixedAssignmentAlteredError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "fixed query at input position {} was not passed through unchanged",
            self.index
        )
    }
}

impl std::error::Error for FixedAssignmentAlteredError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeViolationError {
    stay: StayInterval,
}

impl RangeViolationError {
    pub fn new(stay: StayInterval) -> Self {
        Self { stay }
    }

    pub fn stay(&self) -> &StayInterval {
        &self.stay
    }
}

impl std::fmt::Display for RangeViolationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "newly assigned stay {} falls outside the configured range",
            self.stay
        )
    }
}

impl std::error::Error for RangeViolationError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnsortedOutputError {
    position: usize,
}

impl UnsortedOutputError {
    pub fn new(position: usize) -> Self {
        Self { position }
    }

    pub fn position(&self) -> usize {
        self.position
    }
}

impl std::fmt::Display for UnsortedOutputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "output queries are not sorted by check-in at position {}",
            self.position
        )
    }
}

impl std::error::Error for UnsortedOutputError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryCountMismatchError {
    expected: usize,
    actual: usize,
}

impl QueryCountMismatchError {
    pub fn new(expected: usize, actual: usize) -> Self {
        Self { expected, actual }
    }

    pub fn expected(&self) -> usize {
        self.expected
    }

    pub fn actual(&self) -> usize {
        self.actual
    }
}

impl std::fmt::Display for QueryCountMismatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "output carries {} queries but the input carried {}",
            self.actual, self.expected
        )
    }
}

impl std::error::Error for QueryCountMismatchError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    DoubleBooking(DoubleBookingError),
    FixedAltered(FixedAssignmentAlteredError),
    RangeViolation(RangeViolationError),
    Unsorted(UnsortedOutputError),
    CountMismatch(QueryCountMismatchError),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::DoubleBooking(e) => write!(f, "{}", e),
            ValidationError::FixedAltered(e) => write!(f, "{}", e),
            ValidationError::RangeViolation(e) => write!(f, "{}", e),
            ValidationError::Unsorted(e) => write!(f, "{}", e),
            ValidationError::CountMismatch(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<DoubleBookingError> for ValidationError {
    fn from(err: DoubleBookingError) -> Self {
        ValidationError::DoubleBooking(err)
    }
}

impl From<FixedAssignmentAlteredError> for ValidationError {
    fn from(err: FixedAssignmentAlteredError) -> Self {
        ValidationError::FixedAltered(err)
    }
}

impl From<RangeViolationError> for ValidationError {
    fn from(err: RangeViolationError) -> Self {
        ValidationError::RangeViolation(err)
    }
}

impl From<UnsortedOutputError> for ValidationError {
    fn from(err: UnsortedOutputError) -> Self {
        ValidationError::Unsorted(err)
    }
}

impl From<QueryCountMismatchError> for ValidationError {
    fn from(err: QueryCountMismatchError) -> Self {
        ValidationError::CountMismatch(err)
    }
}
