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

/// A half-open interval `[start, end)` over an ordered endpoint type.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Interval<P> {
    start: P,
    end: P,
}

impl<P: Ord> Interval<P> {
    #[inline]
    pub fn new(start: P, end: P) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn start(&self) -> &P {
        &self.start
    }

    #[inline]
    pub fn end(&self) -> &P {
        &self.end
    }

    #[inline]
    pub fn into_inner(self) -> (P, P) {
        (self.start, self.end)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// The half-open clash test: `self.start < other.end && self.end >
    /// other.start`. Touching endpoints are not a clash, so back-to-back
    /// intervals coexist. Degenerate intervals run through the raw
    /// predicate unchanged.
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        self.start < other.end && self.end > other.start
    }
}

impl<P: std::fmt::Display> std::fmt::Display for Interval<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[inline]
    fn iv(a: i64, b: i64) -> Interval<i64> {
        Interval::new(a, b)
    }

    #[test]
    fn test_intersects_on_partial_overlap() {
        assert!(iv(0, 10).intersects(&iv(5, 15)));
        assert!(iv(5, 15).intersects(&iv(0, 10)));
    }

    #[test]
    fn test_intersects_on_containment() {
        assert!(iv(0, 10).intersects(&iv(2, 4)));
        assert!(iv(2, 4).intersects(&iv(0, 10)));
        assert!(iv(3, 7).intersects(&iv(3, 7)));
    }

    #[test]
    fn test_touching_endpoints_do_not_clash() {
        assert!(!iv(0, 10).intersects(&iv(10, 20)));
        assert!(!iv(10, 20).intersects(&iv(0, 10)));
    }

    #[test]
    fn test_disjoint_intervals_do_not_clash() {
        assert!(!iv(0, 5).intersects(&iv(8, 12)));
    }

    #[test]
    fn test_degenerate_interval_uses_raw_predicate() {
        // An empty candidate strictly inside a booking still clashes under
        // the raw predicate; at the edges it does not.
        assert!(iv(5, 5).intersects(&iv(0, 10)));
        assert!(!iv(0, 0).intersects(&iv(0, 10)));
        assert!(!iv(10, 10).intersects(&iv(0, 10)));
    }

    #[test]
    fn test_is_empty() {
        assert!(iv(5, 5).is_empty());
        assert!(iv(7, 3).is_empty());
        assert!(!iv(3, 7).is_empty());
    }

    #[test]
    fn test_display_renders_half_open() {
        assert_eq!(iv(1, 4).to_string(), "[1, 4)");
    }
}
