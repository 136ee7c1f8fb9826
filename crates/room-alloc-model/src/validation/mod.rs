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

pub mod err;

use crate::{
    problem::{prob::Problem, query::BookingQuery, room::RoomIdentifier},
    solution::Allocation,
    validation::err::{
        DoubleBookingError, FixedAssignmentAlteredError, QueryCountMismatchError,
        RangeViolationError, UnsortedOutputError, ValidationError,
    },
};
use room_alloc_core::prelude::StayInterval;
use std::collections::HashMap;

/// Checks an [`Allocation`] against the guarantees the greedy pass is
/// supposed to uphold. Fixed bookings are taken on trust by the engine,
/// so the checks here exempt them wherever the engine does.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AllocationValidator;

impl AllocationValidator {
    #[inline]
    pub fn new() -> Self {
        Self
    }

    /// No two queries newly placed by the engine may overlap in the same
    /// room. Fixed bookings are excluded: the engine records them without
    /// checking, so two clashing fixed bookings are the caller's problem.
    pub fn validate_no_double_booking(
        &self,
        problem: &Problem,
        allocation: &Allocation,
    ) -> Result<(), DoubleBookingError> {
        let fixed = fixed_queries(problem);
        let mut slots: HashMap<&RoomIdentifier, Vec<StayInterval>> = HashMap::new();
        for query in allocation.queries() {
            let Some(room) = query.room_id() else {
                continue;
            };
            if !query.assigned() || fixed.contains(&query) {
                continue;
            }
            let stay = query.stay();
            let taken = slots.entry(room).or_default();
            if let Some(hit) = taken.iter().find(|b| b.intersects(&stay)) {
                return Err(DoubleBookingError::new(room.clone(), hit.clone(), stay));
            }
            taken.push(stay);
        }
        Ok(())
    }

    /// Every fixed input query must reappear in the output unchanged,
    /// extra fields included.
    pub fn validate_fixed_preserved(
        &self,
        problem: &Problem,
        allocation: &Allocation,
    ) -> Result<(), FixedAssignmentAlteredError> {
        for (index, query) in problem.queries().iter().enumerate() {
            if !is_fixed(problem, query) {
                continue;
            }
            if !allocation.queries().contains(query) {
                return Err(FixedAssignmentAlteredError::new(index));
            }
        }
        Ok(())
    }

    /// When a range is configured, every stay the engine newly assigned
    /// must lie inclusively within it. Fixed bookings are exempt.
    pub fn validate_range_containment(
        &self,
        problem: &Problem,
        allocation: &Allocation,
    ) -> Result<(), RangeViolationError> {
        let Some(range) = problem.range() else {
            return Ok(());
        };
        let fixed = fixed_queries(problem);
        for query in allocation.queries() {
            if !query.assigned() || fixed.contains(&query) {
                continue;
            }
            if !range.admits(query.check_in(), query.check_out()) {
                return Err(RangeViolationError::new(query.stay()));
            }
        }
        Ok(())
    }

    /// Output queries must be in ascending check-in order.
    pub fn validate_sorted_by_check_in(
        &self,
        allocation: &Allocation,
    ) -> Result<(), UnsortedOutputError> {
        for (position, pair) in allocation.queries().windows(2).enumerate() {
            if pair[0].check_in() > pair[1].check_in() {
                return Err(UnsortedOutputError::new(position + 1));
            }
        }
        Ok(())
    }

    /// Every input query comes back out, assigned or not.
    pub fn validate_complete(
        &self,
        problem: &Problem,
        allocation: &Allocation,
    ) -> Result<(), QueryCountMismatchError> {
        let expected = problem.queries().len();
        let actual = allocation.queries().len();
        if expected != actual {
            return Err(QueryCountMismatchError::new(expected, actual));
        }
        Ok(())
    }

    /// Runs every check, stopping at the first failure.
    pub fn validate(
        &self,
        problem: &Problem,
        allocation: &Allocation,
    ) -> Result<(), ValidationError> {
        self.validate_complete(problem, allocation)?;
        self.validate_no_double_booking(problem, allocation)?;
        self.validate_fixed_preserved(problem, allocation)?;
        self.validate_range_containment(problem, allocation)?;
        self.validate_sorted_by_check_in(allocation)?;
        Ok(())
    }
}

#[inline]
fn is_fixed(problem: &Problem, query: &BookingQuery) -> bool {
    query.assigned()
        && query
            .room_id()
            .is_some_and(|room| problem.rooms().contains(room))
}

#[inline]
fn fixed_queries<'a>(problem: &'a Problem) -> Vec<&'a BookingQuery> {
    problem
        .queries()
        .iter()
        .filter(|q| is_fixed(problem, q))
        .collect()
}
