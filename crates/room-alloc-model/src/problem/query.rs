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
use room_alloc_core::prelude::{StayInterval, Timestamp};
use serde::{Deserialize, Serialize};

/// A single booking request as it appears in the payload.
///
/// `assigned` and `roomId` are the engine's output channel and are always
/// serialized (`roomId` as `null` while unassigned). Any other field rides
/// in `extra` and is re-emitted verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingQuery {
    #[serde(rename = "checkIn")]
    check_in: Timestamp,
    #[serde(rename = "checkOut")]
    check_out: Timestamp,
    #[serde(default)]
    assigned: bool,
    #[serde(rename = "roomId", default)]
    room_id: Option<RoomIdentifier>,
    #[serde(flatten)]
    extra: serde_json::Map<String, serde_json::Value>,
}

impl BookingQuery {
    #[inline]
    pub fn new(check_in: Timestamp, check_out: Timestamp) -> Self {
        Self {
            check_in,
            check_out,
            assigned: false,
            room_id: None,
            extra: serde_json::Map::new(),
        }
    }

    #[inline]
    pub fn with_assignment(mut self, room: RoomIdentifier) -> Self {
        self.assigned = true;
        self.room_id = Some(room);
        self
    }

    #[inline]
    pub fn with_extra(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    #[inline]
    pub fn check_in(&self) -> &Timestamp {
        &self.check_in
    }

    #[inline]
    pub fn check_out(&self) -> &Timestamp {
        &self.check_out
    }

    #[inline]
    pub fn assigned(&self) -> bool {
        self.assigned
    }

    #[inline]
    pub fn room_id(&self) -> Option<&RoomIdentifier> {
        self.room_id.as_ref()
    }

    #[inline]
    pub fn extra(&self) -> &serde_json::Map<String, serde_json::Value> {
        &self.extra
    }

    /// The requested occupation as a half-open interval.
    #[inline]
    pub fn stay(&self) -> StayInterval {
        StayInterval::new(self.check_in.clone(), self.check_out.clone())
    }

    #[inline]
    pub fn grant(&mut self, room: RoomIdentifier) {
        self.assigned = true;
        self.room_id = Some(room);
    }

    #[inline]
    pub fn clear_assignment(&mut self) {
        self.assigned = false;
        self.room_id = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[inline]
    fn ts(raw: &str) -> Timestamp {
        Timestamp::new(raw)
    }

    #[inline]
    fn room(name: &str) -> RoomIdentifier {
        RoomIdentifier::new(name.to_owned())
    }

    #[test]
    fn test_deserialize_defaults_to_unassigned() {
        let q: BookingQuery =
            serde_json::from_str(r#"{"checkIn":"2024-01-02","checkOut":"2024-01-05"}"#).unwrap();
        assert!(!q.assigned());
        assert!(q.room_id().is_none());
        assert_eq!(q.check_in(), &ts("2024-01-02"));
        assert_eq!(q.check_out(), &ts("2024-01-05"));
    }

    #[test]
    fn test_unknown_fields_round_trip_verbatim() {
        let json = r#"{
            "guest": "m. smith",
            "checkIn": "2024-01-02",
            "checkOut": "2024-01-05",
            "nights": 3,
            "notes": {"late": true}
        }"#;
        let q: BookingQuery = serde_json::from_str(json).unwrap();
        assert_eq!(q.extra().len(), 3);

        let out = serde_json::to_value(&q).unwrap();
        assert_eq!(out["guest"], json!("m. smith"));
        assert_eq!(out["nights"], json!(3));
        assert_eq!(out["notes"], json!({"late": true}));
        assert_eq!(out["assigned"], json!(false));
        assert!(out["roomId"].is_null());
    }

    #[test]
    fn test_serialize_always_emits_assignment_fields() {
        let q = BookingQuery::new(ts("2024-03-01"), ts("2024-03-04"));
        let out = serde_json::to_value(&q).unwrap();
        assert_eq!(out["assigned"], json!(false));
        assert!(out["roomId"].is_null());

        let granted = q.with_assignment(room("101"));
        let out = serde_json::to_value(&granted).unwrap();
        assert_eq!(out["assigned"], json!(true));
        assert_eq!(out["roomId"], json!("101"));
    }

    #[test]
    fn test_grant_and_clear_assignment() {
        let mut q = BookingQuery::new(ts("2024-03-01"), ts("2024-03-04"));
        q.grant(room("A"));
        assert!(q.assigned());
        assert_eq!(q.room_id(), Some(&room("A")));

        q.clear_assignment();
        assert!(!q.assigned());
        assert!(q.room_id().is_none());
    }

    #[test]
    fn test_stay_is_half_open_over_the_endpoints() {
        let a = BookingQuery::new(ts("2024-03-01"), ts("2024-03-04"));
        let b = BookingQuery::new(ts("2024-03-04"), ts("2024-03-06"));
        assert!(!a.stay().intersects(&b.stay()));
        let c = BookingQuery::new(ts("2024-03-03"), ts("2024-03-05"));
        assert!(a.stay().intersects(&c.stay()));
    }
}
