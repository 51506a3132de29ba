//! Static composition tables.
//!
//! Every table is keyed by lowercase letters; case is reapplied after
//! composition. The tables are compiled in and never change at runtime.

use phf::{phf_map, phf_set};

/// Replacements reached by a lateral stroke on a base letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LateralModifiers {
    /// Variant for a left stroke (circumflex family).
    pub left: Option<char>,
    /// Variant for a right stroke (breve, horn, stroke).
    pub right: Option<char>,
}

/// Number of toned variants per tone-table entry.
pub const TONE_COUNT: usize = 5;

/// Letters whose keys open a gesture session on the letter page.
pub static SUPPORTED_BASES: phf::Set<char> = phf_set! {
    'a', 'e', 'i', 'o', 'u', 'y', 'd', 's',
};

pub static LATERAL_MODIFIERS: phf::Map<char, LateralModifiers> = phf_map! {
    'a' => LateralModifiers { left: Some('â'), right: Some('ă') },
    'e' => LateralModifiers { left: Some('ê'), right: None },
    'o' => LateralModifiers { left: Some('ô'), right: Some('ơ') },
    'u' => LateralModifiers { left: None, right: Some('ư') },
    'd' => LateralModifiers { left: None, right: Some('đ') },
};

pub static UMLAUTS: phf::Map<char, char> = phf_map! {
    'a' => 'ä',
    'o' => 'ö',
    'u' => 'ü',
    's' => 'ß',
};

/// Toned variants in tone-class order: acute, grave, hook above, tilde,
/// dot below.
pub static TONES: phf::Map<char, [char; TONE_COUNT]> = phf_map! {
    'a' => ['á', 'à', 'ả', 'ã', 'ạ'],
    'â' => ['ấ', 'ầ', 'ẩ', 'ẫ', 'ậ'],
    'ă' => ['ắ', 'ằ', 'ẳ', 'ẵ', 'ặ'],
    'e' => ['é', 'è', 'ẻ', 'ẽ', 'ẹ'],
    'ê' => ['ế', 'ề', 'ể', 'ễ', 'ệ'],
    'i' => ['í', 'ì', 'ỉ', 'ĩ', 'ị'],
    'o' => ['ó', 'ò', 'ỏ', 'õ', 'ọ'],
    'ô' => ['ố', 'ồ', 'ổ', 'ỗ', 'ộ'],
    'ơ' => ['ớ', 'ờ', 'ở', 'ỡ', 'ợ'],
    'u' => ['ú', 'ù', 'ủ', 'ũ', 'ụ'],
    'ư' => ['ứ', 'ừ', 'ử', 'ữ', 'ự'],
    'y' => ['ý', 'ỳ', 'ỷ', 'ỹ', 'ỵ'],
};

pub fn is_supported_base(letter: char) -> bool {
    SUPPORTED_BASES.contains(&letter)
}

pub fn left_variant(letter: char) -> Option<char> {
    LATERAL_MODIFIERS.get(&letter).and_then(|m| m.left)
}

pub fn right_variant(letter: char) -> Option<char> {
    LATERAL_MODIFIERS.get(&letter).and_then(|m| m.right)
}

pub fn umlaut_variant(letter: char) -> Option<char> {
    UMLAUTS.get(&letter).copied()
}

/// Toned variant for `class` in `1..=5`; `None` for class 0, out-of-range
/// classes, or letters without a tone entry.
pub fn toned_variant(letter: char, class: u8) -> Option<char> {
    let index = usize::from(class).checked_sub(1)?;
    TONES.get(&letter)?.get(index).copied()
}
