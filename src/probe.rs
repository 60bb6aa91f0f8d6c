use std::fmt::Display;

use log::trace;

use crate::{utf16, CodePoint, RangeSet};

/// The default maximum number of code points in a probe string.
pub const DEFAULT_PROBE_LEN: usize = 7;

/// The probe used for a set that covers the whole codespace: "BESbswy".
/// Its glyphs differ strongly in width between typefaces, which makes a font swap easy to measure.
pub const FULL_RANGE_PROBE: [u32; 7] = [66, 69, 83, 98, 115, 119, 121];

/// Configuration for deriving probe strings from a [RangeSet].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOptions {
    max_len: usize,
    full_range_probe: Vec<CodePoint>,
}

impl Default for ProbeOptions {
    fn default() -> Self {
        Self {
            max_len: DEFAULT_PROBE_LEN,
            full_range_probe: FULL_RANGE_PROBE.iter().map(|&c| CodePoint(c)).collect(),
        }
    }
}

impl ProbeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum number of code points in a probe string.
    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = max_len;
        self
    }

    /// Sets the text used as probe for a set that covers the whole codespace.
    pub fn with_full_range_probe(mut self, text: &str) -> Self {
        self.full_range_probe = text.chars().map(CodePoint::from).collect();
        self
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    pub fn full_range_probe(&self) -> &[CodePoint] {
        &self.full_range_probe
    }
}

/// A short sequence of code points to render off-screen to detect whether a font has loaded.
///
/// The code points may include unpaired surrogates, so the string is kept as code points
/// and is available as UTF-16 via [ProbeString::units].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ProbeString {
    code_points: Vec<CodePoint>,
}

impl ProbeString {
    /// Returns the code points of the probe.
    pub fn code_points(&self) -> &[CodePoint] {
        &self.code_points
    }

    /// Returns the UTF-16 encoding of the probe.
    ///
    /// # Example
    /// ```
    /// use unicode_range::RangeSet;
    ///
    /// let probe = RangeSet::parse("u+1f600").unwrap().to_probe_string();
    /// assert_eq!(probe.units(), vec![0xD83D, 0xDE00]);
    /// ```
    pub fn units(&self) -> Vec<u16> {
        utf16::encode_all(self.code_points.iter().copied())
    }

    /// The number of code points in the probe.
    pub fn len(&self) -> usize {
        self.code_points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.code_points.is_empty()
    }

    /// Converts the probe into a `String`, replacing surrogate code points with U+FFFD.
    pub fn to_string_lossy(&self) -> String {
        self.code_points
            .iter()
            .map(|c| c.as_char().unwrap_or(char::REPLACEMENT_CHARACTER))
            .collect()
    }
}

impl Display for ProbeString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_string_lossy())
    }
}

impl RangeSet {
    /// Derives the probe string for this set with the default [ProbeOptions].
    ///
    /// A set consisting of the single interval `u+0-10ffff` yields "BESbswy".
    /// Otherwise the probe consists of the first seven code points of the intervals, in declaration order,
    /// skipping C0 controls, space and C1 controls.
    ///
    /// # Example
    /// ```
    /// use unicode_range::RangeSet;
    ///
    /// let probe = |s: &str| RangeSet::parse(s).unwrap().to_probe_string().to_string();
    /// assert_eq!(probe("u+0-10ffff"), "BESbswy");
    /// assert_eq!(probe("u+0-7f"), "!\"#$%&'");
    /// assert_eq!(probe("u+7e-a2"), "~\u{7f}\u{a0}\u{a1}\u{a2}");
    /// assert_eq!(probe("u+0-20"), "");
    /// ```
    pub fn to_probe_string(&self) -> ProbeString {
        self.to_probe_string_with(&ProbeOptions::default())
    }

    /// Derives the probe string for this set with the given options.
    pub fn to_probe_string_with(&self, options: &ProbeOptions) -> ProbeString {
        let code_points: Vec<CodePoint> = match self.intervals() {
            [only] if only.is_full() => options
                .full_range_probe()
                .iter()
                .copied()
                .take(options.max_len())
                .collect(),
            intervals => intervals
                .iter()
                .flat_map(|i| i.iter())
                .filter(|c| !c.is_control_or_space())
                .take(options.max_len())
                .collect(),
        };
        trace!("probe for {}: {:x?}", self, code_points);
        ProbeString { code_points }
    }
}
