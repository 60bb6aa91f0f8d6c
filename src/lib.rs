pub mod error;
pub mod probe;
pub mod range;
pub mod utf16;

use std::fmt::{Display, LowerHex};

use quickcheck::Arbitrary;

pub use error::ParseError;
pub use probe::{ProbeOptions, ProbeString};
pub use range::{Interval, RangeSet};

/// A unicode code point in the range 0x0000 to 0x10FFFF.
/// Surrogate code points (0xD800 to 0xDFFF) are valid values, since unpaired surrogates can appear in UTF-16 input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CodePoint(u32);

/// The maximum unicode code point.
pub const MAX_CODEPOINT: u32 = 0x10FFFF;

/// The minimum unicode code point.
pub const MIN_CODEPOINT: u32 = 0x0000;

impl CodePoint {
    /// The maximum `CodePoint`.
    pub const MAX: Self = Self(MAX_CODEPOINT);

    /// The minimum `CodePoint`.
    pub const MIN: Self = Self(MIN_CODEPOINT);

    /// Create a new `CodePoint` from its numeric value.
    /// Returns `None` if the value is greater than 0x10FFFF.
    ///
    /// # Examples
    /// ```
    /// use unicode_range::CodePoint;
    /// assert_eq!(CodePoint::new(0x61), Some(CodePoint::from('a')));
    /// assert_eq!(CodePoint::new(0x110000), None);
    /// ```
    pub fn new(code: u32) -> Option<Self> {
        if code <= MAX_CODEPOINT {
            Some(CodePoint(code))
        } else {
            None
        }
    }

    /// Get the `char` representation of this `CodePoint`, if it can be represented as a `char`.
    ///
    /// # Examples
    /// ```
    /// use unicode_range::CodePoint;
    /// assert_eq!(CodePoint::from('a').as_char(), Some('a'));
    /// // Surrogates are not Unicode scalar values.
    /// assert_eq!(CodePoint::new(0xD800).unwrap().as_char(), None);
    /// ```
    pub fn as_char(self) -> Option<char> {
        char::from_u32(self.0)
    }

    /// Get the `u32` representation of this `CodePoint`.
    pub fn as_u32(self) -> u32 {
        self.0
    }

    /// Returns the next `CodePoint`, or `None` if this is [CodePoint::MAX].
    ///
    /// # Examples
    /// ```
    /// use unicode_range::CodePoint;
    /// assert_eq!(CodePoint::from('a').next(), Some(CodePoint::from('b')));
    /// assert_eq!(CodePoint::MAX.next(), None);
    /// ```
    pub fn next(self) -> Option<Self> {
        if self.0 == MAX_CODEPOINT {
            None
        } else {
            Some(CodePoint(self.0 + 1))
        }
    }

    /// Like `next`, but returns [CodePoint::MAX] instead of `None`.
    pub fn saturating_next(self) -> Self {
        self.next().unwrap_or(CodePoint::MAX)
    }

    /// Returns the previous `CodePoint`, or `None` if this is [CodePoint::MIN].
    ///
    /// # Examples
    /// ```
    /// use unicode_range::CodePoint;
    /// assert_eq!(CodePoint::from('b').prev(), Some(CodePoint::from('a')));
    /// assert_eq!(CodePoint::MIN.prev(), None);
    /// ```
    pub fn prev(self) -> Option<Self> {
        if self.0 == MIN_CODEPOINT {
            None
        } else {
            Some(CodePoint(self.0 - 1))
        }
    }

    /// Like `prev`, but returns [CodePoint::MIN] instead of `None`.
    pub fn saturating_prev(self) -> Self {
        self.prev().unwrap_or(CodePoint::MIN)
    }

    /// Returns `true` if this is a C0 control, the space character or a C1 control.
    /// These are the code points in 0x00 to 0x20 and 0x80 to 0x9F, none of which render a visible glyph.
    ///
    /// # Examples
    /// ```
    /// use unicode_range::CodePoint;
    /// assert!(CodePoint::from(' ').is_control_or_space());
    /// assert!(CodePoint::from('\u{85}').is_control_or_space());
    /// assert!(!CodePoint::from('!').is_control_or_space());
    /// assert!(!CodePoint::from('\u{a0}').is_control_or_space());
    /// ```
    pub fn is_control_or_space(self) -> bool {
        self.0 <= 0x20 || (0x80..=0x9F).contains(&self.0)
    }
}

impl From<char> for CodePoint {
    fn from(c: char) -> Self {
        CodePoint(c as u32)
    }
}

impl From<u16> for CodePoint {
    fn from(unit: u16) -> Self {
        CodePoint(u32::from(unit))
    }
}

impl From<CodePoint> for u32 {
    fn from(c: CodePoint) -> Self {
        c.0
    }
}

impl LowerHex for CodePoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        LowerHex::fmt(&self.0, f)
    }
}

impl Display for CodePoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "u+{:x}", self.0)
    }
}

/// An iterator over the code points in the range `start` to `end`, both inclusively.
#[derive(Debug, Clone)]
pub struct CodePointIter {
    current: Option<CodePoint>,
    end: CodePoint,
}

impl CodePointIter {
    /// Create a new iterator over the code points from `start` to `end` (both inclusively).
    /// The iterator is empty if `start > end`.
    pub fn new(start: CodePoint, end: CodePoint) -> Self {
        CodePointIter {
            current: Some(start),
            end,
        }
    }
}

impl Iterator for CodePointIter {
    type Item = CodePoint;

    fn next(&mut self) -> Option<Self::Item> {
        let c = self.current.filter(|c| *c <= self.end)?;
        // `None` once MAX has been yielded
        self.current = c.next();
        Some(c)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.current {
            Some(c) if c <= self.end => {
                let n = (self.end.0 - c.0) as usize + 1;
                (n, Some(n))
            }
            _ => (0, Some(0)),
        }
    }
}

impl Arbitrary for CodePoint {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let code = u32::arbitrary(g) % (MAX_CODEPOINT + 1);
        CodePoint(code)
    }
}
