use log::{debug, trace};

use super::Interval;
use crate::{CodePoint, ParseError, MAX_CODEPOINT};

/// The maximum number of hex digits (or wildcards) in one bound of a token.
const MAX_DIGITS: usize = 6;

/// Parses a comma-separated list of `unicode-range` tokens into intervals, in declaration order.
pub(super) fn parse_descriptor(input: &str) -> Result<Vec<Interval>, ParseError> {
    let result = input
        .split(',')
        .map(|token| parse_token(token.trim()))
        .collect::<Result<Vec<_>, _>>();
    match &result {
        Ok(intervals) => debug!("parsed {} unicode-range intervals", intervals.len()),
        Err(e) => debug!("rejected unicode-range descriptor `{}`: {}", input, e),
    }
    result
}

/// Parses a single token of the forms `u+XXXX`, `u+XXXX-YYYY` or `u+XX??`.
fn parse_token(token: &str) -> Result<Interval, ParseError> {
    if token.is_empty() {
        return Err(ParseError::Empty);
    }
    let invalid = || ParseError::InvalidToken(token.to_owned());

    let body = token
        .strip_prefix("u+")
        .or_else(|| token.strip_prefix("U+"))
        .ok_or_else(invalid)?;

    let (first, second) = match body.split_once('-') {
        Some((first, second)) => (first, Some(second)),
        None => (body, None),
    };

    if !is_bound(first, true) {
        return Err(invalid());
    }

    let (start, end) = if first.contains('?') {
        // Wildcards cannot be combined with an explicit range
        if second.is_some() {
            return Err(invalid());
        }
        let start = hex_value(&first.replace('?', "0")).ok_or_else(invalid)?;
        let end = hex_value(&first.replace('?', "f")).ok_or_else(invalid)?;
        (start, end)
    } else {
        let start = hex_value(first).ok_or_else(invalid)?;
        let end = match second {
            Some(second) if is_bound(second, false) => hex_value(second).ok_or_else(invalid)?,
            Some(_) => return Err(invalid()),
            None => start,
        };
        (start, end)
    };

    for value in [start, end] {
        if value > MAX_CODEPOINT {
            return Err(ParseError::OutOfRange {
                token: token.to_owned(),
                value,
            });
        }
    }
    if start > end {
        return Err(ParseError::ReversedRange {
            token: token.to_owned(),
            start,
            end,
        });
    }

    trace!("`{}` -> [{:#x}, {:#x}]", token, start, end);
    Ok(Interval {
        start: CodePoint(start),
        end: CodePoint(end),
    })
}

/// Checks that `s` consists of 1 to 6 hex digits, or `?` wildcards if `wildcards` is set.
fn is_bound(s: &str, wildcards: bool) -> bool {
    (1..=MAX_DIGITS).contains(&s.len())
        && s.chars()
            .all(|c| c.is_ascii_hexdigit() || (wildcards && c == '?'))
}

fn hex_value(digits: &str) -> Option<u32> {
    u32::from_str_radix(digits, 16).ok()
}

#[cfg(test)]
mod tests {
    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;

    use super::*;

    fn single(input: &str) -> Interval {
        let mut intervals = parse_descriptor(input).unwrap();
        assert_eq!(intervals.len(), 1, "{input}");
        intervals.remove(0)
    }

    fn bounds(i: Interval) -> (u32, u32) {
        (i.start().as_u32(), i.end().as_u32())
    }

    #[quickcheck]
    fn single_code_point(c: CodePoint) {
        let i = single(&format!("u+{:x}", c));
        assert_eq!(bounds(i), (c.as_u32(), c.as_u32()));
        let i = single(&format!("U+{:06X}", c.as_u32()));
        assert_eq!(bounds(i), (c.as_u32(), c.as_u32()));
    }

    #[test]
    fn wildcard() {
        assert_eq!(bounds(single("u+4??")), (0x400, 0x4FF));
        assert_eq!(bounds(single("u+?")), (0x0, 0xF));
        assert_eq!(bounds(single("u+10????")), (0x100000, 0x10FFFF));
        assert_eq!(bounds(single("U+0A?")), (0xA0, 0xAF));
    }

    #[test]
    fn wildcard_mixed_with_digits() {
        assert_eq!(bounds(single("u+4?1")), (0x401, 0x4F1));
    }

    #[test]
    fn range() {
        assert_eq!(bounds(single("u+100-200")), (0x100, 0x200));
        assert_eq!(bounds(single("U+0-10FFFF")), (0x0, 0x10FFFF));
        assert_eq!(bounds(single("u+41-41")), (0x41, 0x41));
    }

    #[test]
    fn list_keeps_order_and_duplicates() {
        let intervals = parse_descriptor("u+30-39 ,u+41,\tu+30-39,  u+20").unwrap();
        let bounds: Vec<_> = intervals.into_iter().map(bounds).collect();
        assert_eq!(
            bounds,
            vec![(0x30, 0x39), (0x41, 0x41), (0x30, 0x39), (0x20, 0x20)]
        );
    }

    #[test]
    fn invalid_tokens() {
        for token in [
            "not-a-token",
            "u+",
            "u-41",
            "+41",
            "41",
            "u+g",
            "u+1234567",
            "u+41-",
            "u+-41",
            "u+41-1234567",
            "u+4?-4ff",
            "u+41-4?",
            "u+41-42-43",
            "u+ 41",
            "u+41 42",
            "uu+41",
            "u+ä",
        ] {
            assert_eq!(
                parse_descriptor(token),
                Err(ParseError::InvalidToken(token.to_owned())),
                "{token}"
            );
        }
    }

    #[test]
    fn empty_tokens() {
        assert_eq!(parse_descriptor(""), Err(ParseError::Empty));
        assert_eq!(parse_descriptor("  "), Err(ParseError::Empty));
        assert_eq!(parse_descriptor("u+41,"), Err(ParseError::Empty));
        assert_eq!(parse_descriptor("u+41,,u+42"), Err(ParseError::Empty));
    }

    #[test]
    fn one_bad_token_rejects_all() {
        assert_eq!(
            parse_descriptor("u+41, u+42, oops, u+43"),
            Err(ParseError::InvalidToken("oops".to_owned()))
        );
    }

    #[test]
    fn out_of_range() {
        assert_eq!(
            parse_descriptor("u+110000"),
            Err(ParseError::OutOfRange {
                token: "u+110000".to_owned(),
                value: 0x110000
            })
        );
        assert_eq!(
            parse_descriptor("u+0-ffffff"),
            Err(ParseError::OutOfRange {
                token: "u+0-ffffff".to_owned(),
                value: 0xFFFFFF
            })
        );
        assert_eq!(
            parse_descriptor("u+??????"),
            Err(ParseError::OutOfRange {
                token: "u+??????".to_owned(),
                value: 0xFFFFFF
            })
        );
    }

    #[test]
    fn reversed_range() {
        assert_eq!(
            parse_descriptor("u+200-100"),
            Err(ParseError::ReversedRange {
                token: "u+200-100".to_owned(),
                start: 0x200,
                end: 0x100
            })
        );
    }

    #[quickcheck]
    fn range_of_two_code_points(a: CodePoint, b: CodePoint) -> TestResult {
        if a > b {
            return TestResult::discard();
        }
        let i = single(&format!("u+{:x}-{:X}", a, b.as_u32()));
        assert_eq!(bounds(i), (a.as_u32(), b.as_u32()));
        TestResult::passed()
    }
}
