//! Enumerator marker scanning.

use regex::Regex;
use std::sync::LazyLock;

/// One or more numeral glyphs followed by the separator.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static MARKER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([一二三四五六七八九十百千〇]+)、").expect("valid regex"));

/// A marker found in body text.
///
/// Offsets are byte positions into the scanned text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerToken {
    /// Start of the numeral glyphs.
    pub start: usize,

    /// End of the separator.
    pub end: usize,

    /// The numeral glyphs, e.g. "二十一".
    pub numeral: String,

    /// Numeric value of the numeral, if it parses.
    pub value: Option<u32>,
}

/// Scan text for enumerator markers, in order of appearance.
pub fn scan_markers(text: &str) -> Vec<MarkerToken> {
    MARKER_PATTERN
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let numeral = caps.get(1)?.as_str();
            Some(MarkerToken {
                start: whole.start(),
                end: whole.end(),
                numeral: numeral.to_string(),
                value: numeral_value(numeral),
            })
        })
        .collect()
}

fn digit(c: char) -> Option<u32> {
    let value = match c {
        '〇' => 0,
        '一' => 1,
        '二' => 2,
        '三' => 3,
        '四' => 4,
        '五' => 5,
        '六' => 6,
        '七' => 7,
        '八' => 8,
        '九' => 9,
        _ => return None,
    };
    Some(value)
}

fn unit(c: char) -> Option<u32> {
    match c {
        '十' => Some(10),
        '百' => Some(100),
        '千' => Some(1000),
        _ => None,
    }
}

/// Parse an ideographic numeral.
///
/// Handles composite forms ("二十一", "一百〇五"), a bare leading unit
/// ("十二") and positional digit runs ("一〇").
///
/// # Examples
/// ```
/// use regelrecht_review::segment::numeral_value;
///
/// assert_eq!(numeral_value("十一"), Some(11));
/// assert_eq!(numeral_value("九十九"), Some(99));
/// assert_eq!(numeral_value("一百〇五"), Some(105));
/// assert_eq!(numeral_value("甲"), None);
/// ```
pub fn numeral_value(numeral: &str) -> Option<u32> {
    if numeral.is_empty() {
        return None;
    }

    let mut total: u32 = 0;
    let mut pending: Option<u32> = None;

    for c in numeral.chars() {
        if let Some(d) = digit(c) {
            pending = Some(pending.unwrap_or(0).checked_mul(10)?.checked_add(d)?);
        } else if let Some(u) = unit(c) {
            let multiplier = pending.take().unwrap_or(1);
            total = total.checked_add(multiplier.checked_mul(u)?)?;
        } else {
            return None;
        }
    }

    total.checked_add(pending.unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_scan_markers_positions() {
        let text = "一、第一條內容一二三四五六七八九十。二、第二條內容一二三四五六七八九十。";
        let markers = scan_markers(text);

        assert_eq!(markers.len(), 2);
        assert_eq!(&text[markers[0].start..markers[0].end], "一、");
        assert_eq!(&text[markers[1].start..markers[1].end], "二、");
        assert_eq!(markers[1].value, Some(2));
    }

    #[test]
    fn test_scan_composite_markers() {
        let markers = scan_markers("十、甲\n十一、乙\n九十九、丙\n一百、丁");
        let numerals: Vec<_> = markers.iter().map(|m| m.numeral.as_str()).collect();
        let values: Vec<_> = markers.iter().map(|m| m.value).collect();

        assert_eq!(numerals, vec!["十", "十一", "九十九", "一百"]);
        assert_eq!(values, vec![Some(10), Some(11), Some(99), Some(100)]);
    }

    #[test]
    fn test_numeral_without_separator_is_not_a_marker() {
        assert!(scan_markers("第一條內容一二三。").is_empty());
        assert!(scan_markers("1、arabic digits").is_empty());
    }

    #[test]
    fn test_numeral_value_one_to_ninety_nine() {
        let ones = ["一", "二", "三", "四", "五", "六", "七", "八", "九"];
        for n in 1..=99u32 {
            let tens = n / 10;
            let rest = n % 10;
            let mut numeral = String::new();
            if tens > 1 {
                numeral.push_str(ones[(tens - 1) as usize]);
            }
            if tens > 0 {
                numeral.push('十');
            }
            if rest > 0 {
                numeral.push_str(ones[(rest - 1) as usize]);
            }
            assert_eq!(numeral_value(&numeral), Some(n), "numeral {numeral}");
        }
    }

    #[test]
    fn test_numeral_value_zero_glyph() {
        assert_eq!(numeral_value("〇"), Some(0));
        assert_eq!(numeral_value("一〇"), Some(10));
        assert_eq!(numeral_value("一千〇一"), Some(1001));
        assert_eq!(numeral_value(""), None);
    }
}
