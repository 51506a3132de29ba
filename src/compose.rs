use crate::rules;
use crate::session::count_taps;
use crate::symbol::{DirectionalSymbol, SymbolSet};

/// Resolves a base letter and the symbols of one session into a lowercase
/// character.
///
/// Rules apply in a fixed order, each one skipped when its trigger is
/// absent or the table has no entry for the letter reached so far:
///
/// 1. lowercase the base,
/// 2. `Left` present: lateral left variant,
/// 3. `Right` present: lateral right variant of the result of step 2,
/// 4. two or more `Tap`s: umlaut variant,
/// 5. tone class from [`tone_class`],
/// 6. toned variant for that class.
///
/// Step 3 looks up the already modified letter, so `a` with both lateral
/// strokes stays `â` (there is no right variant of `â`).
pub fn resolve(base: char, symbols: &[DirectionalSymbol]) -> char {
    let present: SymbolSet = symbols.iter().copied().collect();
    let mut result = lowercase(base);

    if present.contains(SymbolSet::LEFT) {
        result = rules::left_variant(result).unwrap_or(result);
    }
    if present.contains(SymbolSet::RIGHT) {
        result = rules::right_variant(result).unwrap_or(result);
    }
    if count_taps(symbols) >= 2 {
        result = rules::umlaut_variant(result).unwrap_or(result);
    }

    match tone_class(present) {
        0 => result,
        class => rules::toned_variant(result, class).unwrap_or(result),
    }
}

/// Resolves and applies case: while shift is active the character is
/// uppercased (which may widen it, e.g. `ß`).
pub fn compose(base: char, symbols: &[DirectionalSymbol], shifted: bool) -> String {
    let resolved = resolve(base, symbols);
    if shifted {
        resolved.to_uppercase().collect()
    } else {
        resolved.to_string()
    }
}

/// Tone class in `0..=5` by first match, not by stroke order:
/// up-right 1, down-right 2, up 3, down 4, tap without left 5, else 0.
pub fn tone_class(present: SymbolSet) -> u8 {
    if present.contains(SymbolSet::UP_RIGHT) {
        1
    } else if present.contains(SymbolSet::DOWN_RIGHT) {
        2
    } else if present.contains(SymbolSet::UP) {
        3
    } else if present.contains(SymbolSet::DOWN) {
        4
    } else if present.contains(SymbolSet::TAP) && !present.contains(SymbolSet::LEFT) {
        5
    } else {
        0
    }
}

fn lowercase(letter: char) -> char {
    letter.to_lowercase().next().unwrap_or(letter)
}
