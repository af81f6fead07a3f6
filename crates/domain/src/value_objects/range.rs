//! Spell range parsing.
//!
//! Host spell data stores range as free text ("30 feet", "touch",
//! "60 feet or 3 targets"). The marker only needs a radius, so parsing takes
//! the first run of digits and ignores everything else. Parsed manually to
//! keep regex out of the domain layer.

/// Extract the first integer substring from a free-text range.
///
/// Returns `None` when the text holds no digits ("touch", "self") or the
/// digit run overflows a `u32`.
pub fn parse_range_distance(range: &str) -> Option<u32> {
    let start = range.find(|c: char| c.is_ascii_digit())?;
    let digits: String = range[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}
