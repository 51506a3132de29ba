//! Key labels for the three keyboard pages.
//!
//! Hosts render from these rows; the controller only cares which page is
//! the letter page.

/// Letters; the only page where gestures compose.
pub const LETTER_PAGE: u8 = 1;
/// Digits and common symbols.
pub const NUMBER_PAGE: u8 = 2;
/// Emoticons and brackets.
pub const SYMBOL_PAGE: u8 = 3;

pub type Row = &'static [&'static str];
pub type Page = &'static [Row];

static LETTERS: Page = &[
    &["q", "w", "e", "r", "t", "y", "u", "i", "o", "p"],
    &["a", "s", "d", "f", "g", "h", "j", "k", "l"],
    &["⇧", "z", "x", "c", "v", "b", "n", "m", "⌫"],
    &["1/3", "?", "!", "SPACE", ",", ".", "↵"],
];

static NUMBERS: Page = &[
    &["1", "2", "3", "4", "5", "6", "7", "8", "9", "0"],
    &["@", "#", "%", "&", "*", "/", "+", "-", "="],
    &["abc", "\"", "'", "§", "$", "€", "£", "¥", "⌫"],
    &["2/3", ";", ":", "SPACE", ",", ".", "↵"],
];

static SYMBOLS: Page = &[
    &["^^", ":-)", ";-)", ":-D", "XD", ":-P", ":-*", "<3", ":-/", ":-("],
    &["(", ")", "[", "]", "{", "}", "<", ">", "/", "\\"],
    &["abc", ".", ",", "-", "~", "|", "^", "°", "⌫"],
    &["3/3", ";", ":", "SPACE", ",", ".", "↵"],
];

/// Rows of `page`, or `None` for an unknown page number.
pub fn page(number: u8) -> Option<Page> {
    match number {
        LETTER_PAGE => Some(LETTERS),
        NUMBER_PAGE => Some(NUMBERS),
        SYMBOL_PAGE => Some(SYMBOLS),
        _ => None,
    }
}

/// Number of pages.
pub const PAGE_COUNT: u8 = 3;

/// The text a key shows: single letters are uppercased while shift is
/// active on the letter page.
pub fn display_label(label: &str, shifted: bool, page: u8) -> String {
    let mut chars = label.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if shifted && page == LETTER_PAGE && c.is_alphabetic() => {
            c.to_uppercase().collect()
        }
        _ => label.to_string(),
    }
}

/// Relative width of a key, for hosts that lay out rows proportionally.
pub fn key_weight(label: &str, row: usize, column: usize, row_len: usize) -> f32 {
    if label == "SPACE" {
        3.0
    } else if row >= 2 && (column == 0 || column + 1 == row_len) {
        1.5
    } else {
        1.0
    }
}
