//! Set semantics over a [RangeSet], independent of how its intervals were declared.

use itertools::Itertools;

use super::{Interval, RangeSet};

impl RangeSet {
    /// Returns the covered code points as sorted intervals that neither overlap nor touch.
    /// Two sets cover the same code points iff their coverages are equal.
    ///
    /// # Example
    /// ```
    /// use unicode_range::{Interval, RangeSet};
    ///
    /// let set = RangeSet::parse("u+61-63, u+30-39, u+62-66, u+67").unwrap();
    /// assert_eq!(
    ///     set.coverage(),
    ///     vec![Interval::new(0x30, 0x39).unwrap(), Interval::new(0x61, 0x67).unwrap()]
    /// );
    /// ```
    pub fn coverage(&self) -> Vec<Interval> {
        let mut merged: Vec<Interval> = Vec::with_capacity(self.intervals.len());
        for next in self.intervals.iter().copied().sorted() {
            match merged.last_mut() {
                // Overlapping or adjacent to the last merged interval
                Some(last) if next.start <= last.end.saturating_next() => {
                    last.end = last.end.max(next.end);
                }
                _ => merged.push(next),
            }
        }
        merged
    }

    /// Returns true if both sets cover exactly the same code points,
    /// regardless of the order, overlap or granularity of their intervals.
    ///
    /// # Example
    /// ```
    /// use unicode_range::RangeSet;
    ///
    /// let declared = RangeSet::parse("u+61-62").unwrap();
    /// let derived = RangeSet::from_text("ba");
    /// assert_ne!(declared, derived);
    /// assert!(declared.covers_same(&derived));
    /// ```
    pub fn covers_same(&self, other: &Self) -> bool {
        self.coverage() == other.coverage()
    }

    /// Returns the number of distinct code points covered by the set.
    pub fn code_point_count(&self) -> usize {
        self.coverage().iter().map(Interval::size).sum()
    }
}
