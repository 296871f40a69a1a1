//! Symbol substitution for level 2 tokens.
//!
//! The ten shifted characters of a US keyboard's digit row stand in for the
//! digit beneath them: `!@#$%^&*()` decode to `1234567890`.

/// Substitution table, symbol to digit.
const SYMBOL_TABLE: [(char, char); 10] = [
    ('!', '1'),
    ('@', '2'),
    ('#', '3'),
    ('$', '4'),
    ('%', '5'),
    ('^', '6'),
    ('&', '7'),
    ('*', '8'),
    ('(', '9'),
    (')', '0'),
];

/// Looks up the digit a symbol stands for, if it is one of the ten mapped symbols.
fn symbol_digit(symbol: char) -> Option<char> {
    SYMBOL_TABLE
        .iter()
        .find(|(from, _)| *from == symbol)
        .map(|(_, digit)| *digit)
}

/// Replaces every mapped symbol in `text` with its digit.
///
/// Characters outside the table pass through unchanged, so text without
/// symbols comes back as-is.
pub fn decode_symbols(text: &str) -> String {
    text.chars()
        .map(|c| symbol_digit(c).unwrap_or(c))
        .collect()
}
