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

use crate::common::{Identifier, IdentifierMarkerName};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomIdentifierMarker;

impl IdentifierMarkerName for RoomIdentifierMarker {
    const NAME: &'static str = "RoomId";
}

pub type RoomIdentifier = Identifier<String, RoomIdentifierMarker>;

/// The ordered room sequence supplied with the payload.
///
/// Order is significant: it is the preference order scanned during
/// allocation. Identifiers are assumed unique; duplicates are kept as
/// given and behave as a single room scanned more than once.
#[repr(transparent)]
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomRoster(Vec<RoomIdentifier>);

impl RoomRoster {
    #[inline]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    #[inline]
    pub fn push(&mut self, room: RoomIdentifier) {
        self.0.push(room);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn contains(&self, room: &RoomIdentifier) -> bool {
        self.0.iter().any(|r| r == room)
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &RoomIdentifier> {
        self.0.iter()
    }
}

impl Default for RoomRoster {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<RoomIdentifier> for RoomRoster {
    #[inline]
    fn from_iter<I: IntoIterator<Item = RoomIdentifier>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
