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

use crate::registry::Ledger;
use room_alloc_model::prelude::{Allocation, Problem};

/// Single-pass greedy room allocator.
///
/// Bookings that arrive already assigned to a roster room are recorded
/// first, unchecked and unchanged. The remaining queries are walked in
/// ascending check-out order; each takes the first roster room (in roster
/// order) free over its whole stay, or stays unassigned. The heuristic is
/// deliberately first-fit with no backtracking: two runs over the same
/// input produce the same output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GreedyAllocator;

impl GreedyAllocator {
    #[inline]
    pub fn new() -> Self {
        Self
    }

    /// Runs the allocation pass and returns a fresh [`Allocation`];
    /// the input problem is consumed, never mutated in place.
    pub fn allocate(&self, problem: Problem) -> Allocation {
        let (queries, rooms, range) = problem.into_parts();
        let mut ledger = Ledger::new(&rooms);
        let mut finished = Vec::with_capacity(queries.len());
        let mut pending = Vec::new();

        // Bookings already tied to a roster room keep their slot as-is.
        // An assignment naming an unknown room is demoted to pending.
        for mut query in queries {
            let fixed_room = match (query.assigned(), query.room_id()) {
                (true, Some(room)) => Some(room.clone()),
                _ => None,
            };
            if let Some(room) = fixed_room
                && ledger.occupy(&room, query.stay()).is_ok()
            {
                finished.push(query);
                continue;
            }
            query.clear_assignment();
            pending.push(query);
        }

        // Earliest check-out first; ties keep their input order.
        pending.sort_by(|a, b| a.check_out().cmp(b.check_out()));

        for mut query in pending {
            if let Some(range) = range.as_ref()
                && !range.admits(query.check_in(), query.check_out())
            {
                tracing::debug!(stay = %query.stay(), "stay outside range, left unassigned");
                finished.push(query);
                continue;
            }
            let stay = query.stay();
            for room in rooms.iter() {
                if ledger.try_book(room, stay.clone()) {
                    tracing::debug!(room = %room, stay = %stay, "booked");
                    query.grant(room.clone());
                    break;
                }
            }
            finished.push(query);
        }

        finished.sort_by(|a, b| a.check_in().cmp(b.check_in()));
        Allocation::new(finished, rooms, range)
    }
}

impl std::fmt::Display for GreedyAllocator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GreedyAllocator")
    }
}
