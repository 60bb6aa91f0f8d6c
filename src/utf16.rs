//! Surrogate-pair decoding and encoding over raw UTF-16 code units.
//!
//! Unlike [char::decode_utf16], decoding here never fails: unpaired surrogates are kept as code points of their own.

use crate::CodePoint;

/// First code unit of the high (leading) surrogate block.
pub const HIGH_SURROGATE_START: u16 = 0xD800;
/// Last code unit of the high (leading) surrogate block.
pub const HIGH_SURROGATE_END: u16 = 0xDBFF;
/// First code unit of the low (trailing) surrogate block.
pub const LOW_SURROGATE_START: u16 = 0xDC00;
/// Last code unit of the low (trailing) surrogate block.
pub const LOW_SURROGATE_END: u16 = 0xDFFF;

const SUPPLEMENTARY_START: u32 = 0x10000;

pub fn is_high_surrogate(unit: u16) -> bool {
    (HIGH_SURROGATE_START..=HIGH_SURROGATE_END).contains(&unit)
}

pub fn is_low_surrogate(unit: u16) -> bool {
    (LOW_SURROGATE_START..=LOW_SURROGATE_END).contains(&unit)
}

/// Combines a high and a low surrogate into a supplementary-plane code point.
/// The caller must ensure that `high` and `low` are in their respective surrogate blocks.
///
/// # Example
/// ```
/// use unicode_range::utf16::combine_surrogates;
/// assert_eq!(combine_surrogates(0xD83D, 0xDE00).as_u32(), 0x1F600);
/// ```
pub fn combine_surrogates(high: u16, low: u16) -> CodePoint {
    debug_assert!(is_high_surrogate(high) && is_low_surrogate(low));
    let high = u32::from(high) & 0x3FF;
    let low = u32::from(low) & 0x3FF;
    CodePoint((high << 10) + low + SUPPLEMENTARY_START)
}

/// Decodes a sequence of UTF-16 code units into code points.
///
/// # Example
/// ```
/// use unicode_range::utf16::decode;
///
/// let units = [0x61, 0xD83D, 0xDE00, 0xD800, 0x62];
/// let decoded: Vec<u32> = decode(&units).map(u32::from).collect();
/// assert_eq!(decoded, vec![0x61, 0x1F600, 0xD800, 0x62]);
/// ```
pub fn decode(units: &[u16]) -> Decoder<'_> {
    Decoder { units, pos: 0 }
}

/// Iterator returned by [decode].
#[derive(Debug, Clone)]
pub struct Decoder<'a> {
    units: &'a [u16],
    pos: usize,
}

impl Iterator for Decoder<'_> {
    type Item = CodePoint;

    fn next(&mut self) -> Option<Self::Item> {
        let unit = *self.units.get(self.pos)?;
        self.pos += 1;
        if is_high_surrogate(unit) {
            if let Some(&low) = self.units.get(self.pos).filter(|u| is_low_surrogate(**u)) {
                self.pos += 1;
                return Some(combine_surrogates(unit, low));
            }
        }
        Some(CodePoint::from(unit))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.units.len() - self.pos;
        (left.div_ceil(2), Some(left))
    }
}

/// The UTF-16 encoding of a single code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoded {
    /// Code points up to 0xFFFF occupy a single unit.
    Single(u16),
    /// Supplementary-plane code points occupy a high and a low surrogate.
    Pair(u16, u16),
}

impl Encoded {
    /// Appends the code units to `out`.
    pub fn push_to(self, out: &mut Vec<u16>) {
        match self {
            Encoded::Single(u) => out.push(u),
            Encoded::Pair(high, low) => {
                out.push(high);
                out.push(low);
            }
        }
    }

    /// The number of code units, either 1 or 2.
    pub fn unit_count(self) -> usize {
        match self {
            Encoded::Single(_) => 1,
            Encoded::Pair(..) => 2,
        }
    }
}

/// Encodes a single code point.
///
/// # Example
/// ```
/// use unicode_range::{utf16::{encode, Encoded}, CodePoint};
///
/// assert_eq!(encode(CodePoint::from('a')), Encoded::Single(0x61));
/// assert_eq!(encode(CodePoint::from('😀')), Encoded::Pair(0xD83D, 0xDE00));
/// ```
pub fn encode(c: CodePoint) -> Encoded {
    let code = c.as_u32();
    match u16::try_from(code) {
        Ok(unit) => Encoded::Single(unit),
        Err(_) => {
            // code - 0x10000 has at most 20 bits, so both halves fit into 10 bits
            let offset = code - SUPPLEMENTARY_START;
            let high = (offset / 0x400) as u16 + HIGH_SURROGATE_START;
            let low = (offset % 0x400) as u16 + LOW_SURROGATE_START;
            Encoded::Pair(high, low)
        }
    }
}

/// Encodes a sequence of code points into UTF-16 code units.
pub fn encode_all(code_points: impl IntoIterator<Item = CodePoint>) -> Vec<u16> {
    let mut out = Vec::new();
    for c in code_points {
        encode(c).push_to(&mut out);
    }
    out
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;

    #[test]
    fn decode_supplementary() {
        let units: Vec<u16> = "a😀b".encode_utf16().collect();
        let decoded: Vec<u32> = decode(&units).map(u32::from).collect();
        assert_eq!(decoded, vec![0x61, 0x1F600, 0x62]);
    }

    #[test]
    fn decode_unpaired_high_surrogate_at_end() {
        let decoded: Vec<u32> = decode(&[0x61, 0xD83D]).map(u32::from).collect();
        assert_eq!(decoded, vec![0x61, 0xD83D]);
    }

    #[test]
    fn decode_unpaired_high_surrogate_keeps_next_unit() {
        let decoded: Vec<u32> = decode(&[0xD83D, 0x62]).map(u32::from).collect();
        assert_eq!(decoded, vec![0xD83D, 0x62]);
    }

    #[test]
    fn decode_two_high_surrogates_then_low() {
        let decoded: Vec<u32> = decode(&[0xD800, 0xD83D, 0xDE00]).map(u32::from).collect();
        assert_eq!(decoded, vec![0xD800, 0x1F600]);
    }

    #[test]
    fn decode_lone_low_surrogate() {
        let decoded: Vec<u32> = decode(&[0xDE00, 0xDE00]).map(u32::from).collect();
        assert_eq!(decoded, vec![0xDE00, 0xDE00]);
    }

    #[test]
    fn decode_empty() {
        assert_eq!(decode(&[]).next(), None);
    }

    #[test]
    fn encode_bmp_boundary() {
        assert_eq!(encode(CodePoint(0xFFFF)), Encoded::Single(0xFFFF));
        assert_eq!(encode(CodePoint(0x10000)), Encoded::Pair(0xD800, 0xDC00));
        assert_eq!(encode(CodePoint::MAX), Encoded::Pair(0xDBFF, 0xDFFF));
    }

    #[quickcheck]
    fn encode_matches_std(c: char) {
        let mut buf = [0u16; 2];
        let expected = c.encode_utf16(&mut buf);
        let mut actual = Vec::new();
        let encoded = encode(CodePoint::from(c));
        encoded.push_to(&mut actual);
        assert_eq!(actual, expected.to_vec());
        assert_eq!(encoded.unit_count(), expected.len());
    }

    #[quickcheck]
    fn decode_matches_std(s: String) {
        let units: Vec<u16> = s.encode_utf16().collect();
        let decoded: Vec<CodePoint> = decode(&units).collect();
        let expected: Vec<CodePoint> = s.chars().map(CodePoint::from).collect();
        assert_eq!(decoded, expected);
    }

    #[quickcheck]
    fn encode_decode_inverse(c: CodePoint) -> bool {
        let units = encode_all([c]);
        decode(&units).collect::<Vec<_>>() == vec![c]
    }
}
