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

use crate::registry::err::UnknownRoomError;
use room_alloc_core::prelude::StayInterval;
use room_alloc_model::prelude::{RoomIdentifier, RoomRoster};
use std::collections::HashMap;

/// Per-room booking registry for one allocation pass.
///
/// Stays are stored as raw half-open intervals, not coalesced: clash
/// detection runs the bare `start < end && end > start` predicate over
/// every recorded stay, so degenerate intervals behave exactly as that
/// predicate dictates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    bookings: HashMap<RoomIdentifier, Vec<StayInterval>>,
}

impl Ledger {
    /// Opens an empty slot list per roster room. A duplicated room id
    /// collapses onto a single shared slot list.
    pub fn new(roster: &RoomRoster) -> Self {
        let mut bookings = HashMap::with_capacity(roster.len());
        for room in roster.iter() {
            bookings.entry(room.clone()).or_insert_with(Vec::new);
        }
        Self { bookings }
    }

    #[inline]
    pub fn contains_room(&self, room: &RoomIdentifier) -> bool {
        self.bookings.contains_key(room)
    }

    #[inline]
    pub fn rooms_len(&self) -> usize {
        self.bookings.len()
    }

    #[inline]
    pub fn bookings(&self, room: &RoomIdentifier) -> Option<&[StayInterval]> {
        self.bookings.get(room).map(Vec::as_slice)
    }

    /// Records a stay without any clash check. Used for bookings that
    /// arrive already assigned and are taken on trust.
    pub fn occupy(
        &mut self,
        room: &RoomIdentifier,
        stay: StayInterval,
    ) -> Result<(), UnknownRoomError> {
        match self.bookings.get_mut(room) {
            Some(slots) => {
                slots.push(stay);
                Ok(())
            }
            None => Err(UnknownRoomError::new(room.clone())),
        }
    }

    /// Whether `stay` overlaps any recorded stay in `room`. An unknown
    /// room has no bookings and therefore never clashes.
    #[inline]
    pub fn clashes(&self, room: &RoomIdentifier, stay: &StayInterval) -> bool {
        self.bookings
            .get(room)
            .is_some_and(|slots| slots.iter().any(|b| b.intersects(stay)))
    }

    /// Records `stay` in `room` iff the room is known and free over the
    /// whole stay. Returns whether the booking was taken.
    pub fn try_book(&mut self, room: &RoomIdentifier, stay: StayInterval) -> bool {
        match self.bookings.get_mut(room) {
            Some(slots) if !slots.iter().any(|b| b.intersects(&stay)) => {
                slots.push(stay);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use room_alloc_core::prelude::Timestamp;

    #[inline]
    fn room(name: &str) -> RoomIdentifier {
        RoomIdentifier::new(name.to_owned())
    }

    #[inline]
    fn roster(names: &[&str]) -> RoomRoster {
        names.iter().map(|n| room(n)).collect()
    }

    #[inline]
    fn iv(start: &str, end: &str) -> StayInterval {
        StayInterval::new(Timestamp::new(start), Timestamp::new(end))
    }

    #[test]
    fn test_new_opens_every_roster_room_empty() {
        let ledger = Ledger::new(&roster(&["A", "B"]));
        assert_eq!(ledger.rooms_len(), 2);
        assert!(ledger.contains_room(&room("A")));
        assert_eq!(ledger.bookings(&room("B")), Some(&[][..]));
        assert!(!ledger.contains_room(&room("C")));
    }

    #[test]
    fn test_duplicate_roster_entries_share_one_slot_list() {
        let mut ledger = Ledger::new(&roster(&["A", "A"]));
        assert_eq!(ledger.rooms_len(), 1);
        assert!(ledger.try_book(&room("A"), iv("2024-01-01", "2024-01-03")));
        assert!(!ledger.try_book(&room("A"), iv("2024-01-02", "2024-01-04")));
    }

    #[test]
    fn test_occupy_skips_the_clash_check() {
        let mut ledger = Ledger::new(&roster(&["A"]));
        ledger.occupy(&room("A"), iv("2024-01-01", "2024-01-05")).unwrap();
        ledger.occupy(&room("A"), iv("2024-01-02", "2024-01-06")).unwrap();
        assert_eq!(ledger.bookings(&room("A")).unwrap().len(), 2);
    }

    #[test]
    fn test_occupy_rejects_a_room_outside_the_roster() {
        let mut ledger = Ledger::new(&roster(&["A"]));
        let err = ledger
            .occupy(&room("Z"), iv("2024-01-01", "2024-01-05"))
            .unwrap_err();
        assert_eq!(err.room(), &room("Z"));
        assert_eq!(err.to_string(), "room RoomId(Z) is not part of the roster");
    }

    #[test]
    fn test_try_book_takes_a_free_room_and_refuses_a_clash() {
        let mut ledger = Ledger::new(&roster(&["A"]));
        assert!(ledger.try_book(&room("A"), iv("2024-01-01", "2024-01-05")));
        assert!(!ledger.try_book(&room("A"), iv("2024-01-04", "2024-01-07")));
        assert_eq!(ledger.bookings(&room("A")).unwrap().len(), 1);
    }

    #[test]
    fn test_touching_stays_do_not_clash() {
        let mut ledger = Ledger::new(&roster(&["A"]));
        assert!(ledger.try_book(&room("A"), iv("2024-01-01", "2024-01-05")));
        assert!(!ledger.clashes(&room("A"), &iv("2024-01-05", "2024-01-08")));
        assert!(ledger.try_book(&room("A"), iv("2024-01-05", "2024-01-08")));
    }

    #[test]
    fn test_try_book_refuses_an_unknown_room() {
        let mut ledger = Ledger::new(&roster(&["A"]));
        assert!(!ledger.try_book(&room("Z"), iv("2024-01-01", "2024-01-05")));
    }
}
