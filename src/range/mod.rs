mod coverage;
mod parse;

use std::{fmt::Display, str::FromStr};

use itertools::Itertools;
use log::debug;
use quickcheck::Arbitrary;

use crate::{utf16, CodePoint, CodePointIter, ParseError};

/// A range of code points defined by a start and an end code point.
/// The range covers all code points between the start and the end, including the start and the end themselves.
/// An interval is never empty: `start <= end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    start: CodePoint,
    end: CodePoint,
}

impl Interval {
    /// Create a new interval from the numeric values of its bounds.
    /// Fails if a bound is greater than 0x10FFFF or if `start > end`.
    ///
    /// # Example
    /// ```
    /// use unicode_range::{Interval, ParseError};
    ///
    /// let latin = Interval::new(0x0, 0xFF).unwrap();
    /// assert_eq!(latin.size(), 256);
    /// assert!(matches!(Interval::new(0x20, 0x10), Err(ParseError::ReversedRange { .. })));
    /// assert!(matches!(Interval::new(0x0, 0x110000), Err(ParseError::OutOfRange { .. })));
    /// ```
    pub fn new(start: u32, end: u32) -> Result<Self, ParseError> {
        let token = || {
            if start == end {
                format!("u+{:x}", start)
            } else {
                format!("u+{:x}-{:x}", start, end)
            }
        };
        let start_cp = CodePoint::new(start).ok_or_else(|| ParseError::OutOfRange {
            token: token(),
            value: start,
        })?;
        let end_cp = CodePoint::new(end).ok_or_else(|| ParseError::OutOfRange {
            token: token(),
            value: end,
        })?;
        if start_cp > end_cp {
            return Err(ParseError::ReversedRange {
                token: token(),
                start,
                end,
            });
        }
        Ok(Interval {
            start: start_cp,
            end: end_cp,
        })
    }

    /// Create an interval that contains a single code point.
    pub fn singleton(c: impl Into<CodePoint>) -> Self {
        let c = c.into();
        Interval { start: c, end: c }
    }

    /// Create an interval that covers the whole Unicode codespace, i.e. `u+0-10ffff`.
    ///
    /// # Example
    /// ```
    /// use unicode_range::{CodePoint, Interval};
    ///
    /// let all = Interval::full();
    /// assert!(all.contains('a'));
    /// assert!(all.contains(CodePoint::MAX));
    /// assert!(all.is_full());
    /// ```
    pub fn full() -> Self {
        Interval {
            start: CodePoint::MIN,
            end: CodePoint::MAX,
        }
    }

    /// Returns the lower bound of the interval.
    pub fn start(&self) -> CodePoint {
        self.start
    }

    /// Returns the upper bound of the interval.
    pub fn end(&self) -> CodePoint {
        self.end
    }

    /// Return the number of code points in the interval.
    pub fn size(&self) -> usize {
        (self.end.as_u32() - self.start.as_u32()) as usize + 1
    }

    /// Check if the interval contains a single code point.
    pub fn is_singleton(&self) -> bool {
        self.start == self.end
    }

    /// Check if the interval spans the whole Unicode codespace.
    pub fn is_full(&self) -> bool {
        self.start == CodePoint::MIN && self.end == CodePoint::MAX
    }

    /// Check if a code point is in the interval.
    pub fn contains(&self, c: impl Into<CodePoint>) -> bool {
        let c = c.into();
        self.start <= c && c <= self.end
    }

    /// Check if two intervals share at least one code point.
    ///
    /// # Example
    /// ```
    /// use unicode_range::Interval;
    ///
    /// let a = Interval::new(0x100, 0x200).unwrap();
    /// let b = Interval::new(0x200, 0x300).unwrap();
    /// let c = Interval::new(0x201, 0x300).unwrap();
    /// assert!(a.intersects(&b));
    /// assert!(!a.intersects(&c));
    /// ```
    pub fn intersects(&self, other: &Self) -> bool {
        self.start.max(other.start) <= self.end.min(other.end)
    }

    /// Returns an iterator over the code points of the interval in ascending order.
    pub fn iter(&self) -> CodePointIter {
        CodePointIter::new(self.start, self.end)
    }
}

impl PartialOrd for Interval {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Interval {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.start.cmp(&other.start) {
            std::cmp::Ordering::Equal => self.end.cmp(&other.end),
            o => o,
        }
    }
}

impl Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_singleton() {
            write!(f, "u+{:x}", self.start)
        } else {
            write!(f, "u+{:x}-{:x}", self.start, self.end)
        }
    }
}

/// The code points a font claims to cover, as declared by a CSS `unicode-range` descriptor.
///
/// The intervals are kept in the order in which they were declared.
/// Overlapping or adjacent intervals are not merged; see [RangeSet::coverage] for a normalized view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RangeSet {
    intervals: Vec<Interval>,
}

impl RangeSet {
    /// Parses a `unicode-range` descriptor, i.e. a comma-separated list of tokens of the forms
    ///
    /// - `u+XXXX` for a single code point,
    /// - `u+XXXX-YYYY` for a range of code points, and
    /// - `u+XX??` for a range given by a wildcard pattern, where each `?` stands for any hex digit.
    ///
    /// The prefix is case-insensitive and each token has at most six hex digits (or wildcards) per bound.
    /// If any token is malformed, the whole descriptor is rejected.
    ///
    /// # Example
    /// ```
    /// use unicode_range::{Interval, RangeSet};
    ///
    /// let set = RangeSet::parse("U+0025-00FF, u+4??").unwrap();
    /// let mut iter = set.iter();
    /// assert_eq!(iter.next(), Some(&Interval::new(0x25, 0xFF).unwrap()));
    /// assert_eq!(iter.next(), Some(&Interval::new(0x400, 0x4FF).unwrap()));
    /// assert_eq!(iter.next(), None);
    ///
    /// assert!(RangeSet::parse("u+25, not-a-token").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let intervals = parse::parse_descriptor(input)?;
        Ok(RangeSet { intervals })
    }

    /// Derives the set of code points occurring in a sequence of UTF-16 code units.
    ///
    /// Surrogate pairs are combined into supplementary-plane code points, unpaired surrogates are kept as they are.
    /// The code points are deduplicated and sorted, and each one becomes a singleton interval.
    /// The result is the same set that parsing the descriptor `u+<cp1>,u+<cp2>,...` of the sorted code points yields.
    pub fn from_utf16(units: &[u16]) -> Self {
        let intervals: Vec<Interval> = utf16::decode(units)
            .sorted()
            .dedup()
            .map(Interval::singleton)
            .collect();
        debug!(
            "derived {} code points from {} UTF-16 units",
            intervals.len(),
            units.len()
        );
        RangeSet { intervals }
    }

    /// Derives the set of code points occurring in `text`.
    /// Equivalent to [RangeSet::from_utf16] on the UTF-16 encoding of `text`.
    ///
    /// # Example
    /// ```
    /// use unicode_range::RangeSet;
    ///
    /// let set = RangeSet::from_text("hello");
    /// assert_eq!(set.to_string(), "u+65,u+68,u+6c,u+6f");
    /// assert_eq!(set, RangeSet::from_text("olleh"));
    /// ```
    pub fn from_text(text: &str) -> Self {
        let units: Vec<u16> = text.encode_utf16().collect();
        Self::from_utf16(&units)
    }

    /// Returns the intervals in declaration order.
    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// Returns an iterator over the intervals in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Interval> {
        self.intervals.iter()
    }

    /// Returns true if the set has no intervals.
    /// Only [RangeSet::default] and sets derived from empty text are empty; parsing never yields an empty set.
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Check if a code point is covered by any interval of the set.
    pub fn contains(&self, c: impl Into<CodePoint>) -> bool {
        let c = c.into();
        self.intervals.iter().any(|i| i.contains(c))
    }

    /// Returns true if some interval of this set intersects some interval of `other`.
    ///
    /// # Example
    /// ```
    /// use unicode_range::RangeSet;
    ///
    /// let latin = RangeSet::parse("u+0-ff").unwrap();
    /// let cyrillic = RangeSet::parse("u+400-4ff").unwrap();
    /// assert!(latin.intersects(&RangeSet::from_text("abc")));
    /// assert!(!cyrillic.intersects(&RangeSet::from_text("abc")));
    /// ```
    pub fn intersects(&self, other: &Self) -> bool {
        self.intervals
            .iter()
            .any(|a| other.intervals.iter().any(|b| a.intersects(b)))
    }
}

impl FromStr for RangeSet {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RangeSet::parse(s)
    }
}

impl FromIterator<Interval> for RangeSet {
    fn from_iter<T: IntoIterator<Item = Interval>>(iter: T) -> Self {
        RangeSet {
            intervals: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RangeSet {
    type Item = &'a Interval;
    type IntoIter = std::slice::Iter<'a, Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}

impl Display for RangeSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.intervals.iter().format(","))
    }
}

impl Arbitrary for Interval {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let start = CodePoint::arbitrary(g);
        let end = CodePoint::arbitrary(g);
        Interval {
            start: start.min(end),
            end: end.max(start),
        }
    }
}

impl Arbitrary for RangeSet {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let intervals: Vec<Interval> = Arbitrary::arbitrary(g);
        RangeSet { intervals }
    }
}
