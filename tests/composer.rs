use gesture_keys::DirectionalSymbol::{self, *};
use gesture_keys::{SymbolSet, compose, resolve, tone_class};

fn lower(base: char, symbols: &[DirectionalSymbol]) -> String {
    compose(base, symbols, false)
}

#[test]
fn no_symbols_yields_base_letter() {
    assert_eq!(lower('a', &[]), "a");
    assert_eq!(lower('s', &[]), "s");
    assert_eq!(compose('a', &[], true), "A");
}

#[test]
fn single_tap_applies_fifth_tone() {
    // Class 5 selects the last entry of the row: the dot below.
    assert_eq!(lower('a', &[Tap]), "ạ");
    assert_eq!(compose('a', &[Tap], true), "Ạ");
}

#[test]
fn uppercase_base_is_folded_before_lookup() {
    assert_eq!(resolve('A', &[Tap]), 'ạ');
    assert_eq!(resolve('O', &[Right]), 'ơ');
}

#[test]
fn left_then_tap_keeps_circumflex_without_tone() {
    // A tap only selects the fifth tone class when no left stroke is present.
    assert_eq!(lower('a', &[Left, Tap]), "â");
}

#[test]
fn circumflex_takes_tones_from_its_own_row() {
    assert_eq!(lower('a', &[Left, UpRight]), "ấ");
    assert_eq!(lower('e', &[Left, Down]), "ễ");
    assert_eq!(lower('o', &[Left, DownRight]), "ồ");
}

#[test]
fn right_modifiers() {
    assert_eq!(lower('a', &[Right]), "ă");
    assert_eq!(lower('a', &[Right, DownRight]), "ằ");
    assert_eq!(lower('o', &[Right, Tap]), "ợ");
    assert_eq!(lower('u', &[Right, Up]), "ử");
    assert_eq!(lower('d', &[Right]), "đ");
    assert_eq!(compose('d', &[Right], true), "Đ");
}

#[test]
fn missing_lateral_entries_pass_through() {
    assert_eq!(lower('e', &[Right]), "e");
    assert_eq!(lower('u', &[Left, Left]), "u");
    assert_eq!(lower('i', &[Left]), "i");
}

#[test]
fn right_is_looked_up_on_the_left_result() {
    // `â` has no right variant, so both lateral strokes leave the circumflex.
    assert_eq!(lower('a', &[Left, Right]), "â");
    assert_eq!(lower('a', &[Right, Left]), "â");
    assert_eq!(lower('o', &[Right, Left]), "ô");
}

#[test]
fn double_tap_gives_umlaut() {
    assert_eq!(lower('o', &[Tap, Tap]), "ö");
    assert_eq!(lower('a', &[Tap, Tap]), "ä");
    assert_eq!(lower('u', &[Tap, Tap, Tap]), "ü");
    assert_eq!(compose('o', &[Tap, Tap], true), "Ö");
}

#[test]
fn sharp_s_from_double_tap() {
    assert_eq!(lower('s', &[Tap, Tap]), "ß");
    assert_eq!(compose('s', &[Tap, Tap], true), "SS");
}

#[test]
fn umlaut_needs_an_entry_for_the_current_letter() {
    assert_eq!(lower('a', &[Left, Tap, Tap]), "â");
    assert_eq!(lower('e', &[Tap, Tap]), "ẹ");
}

#[test]
fn letters_without_tones_are_unchanged() {
    assert_eq!(lower('s', &[Up]), "s");
    assert_eq!(lower('d', &[UpRight]), "d");
    assert_eq!(lower('d', &[Right, Down]), "đ");
}

#[test]
fn tone_priority_ignores_stroke_order() {
    assert_eq!(lower('a', &[Up, UpRight]), "á");
    assert_eq!(lower('a', &[Down, Up]), "ả");
    assert_eq!(lower('y', &[Tap, DownRight]), "ỳ");
    assert_eq!(lower('i', &[Down]), "ĩ");
}

#[test]
fn tone_classes() {
    assert_eq!(tone_class(SymbolSet::empty()), 0);
    assert_eq!(tone_class(SymbolSet::UP_RIGHT | SymbolSet::UP), 1);
    assert_eq!(tone_class(SymbolSet::DOWN_RIGHT | SymbolSet::DOWN), 2);
    assert_eq!(tone_class(SymbolSet::UP | SymbolSet::TAP), 3);
    assert_eq!(tone_class(SymbolSet::DOWN), 4);
    assert_eq!(tone_class(SymbolSet::TAP), 5);
    assert_eq!(tone_class(SymbolSet::TAP | SymbolSet::LEFT), 0);
    assert_eq!(tone_class(SymbolSet::UP_LEFT | SymbolSet::DOWN_LEFT), 0);
}

#[test]
fn diagonals_to_the_left_do_nothing() {
    assert_eq!(lower('a', &[UpLeft]), "a");
    assert_eq!(lower('o', &[DownLeft, UpLeft]), "o");
}

#[test]
fn replaying_a_session_gives_the_same_character() {
    let symbols = [Right, Tap, Up, Tap];
    let first = lower('o', &symbols);
    let second = lower('o', &symbols);
    assert_eq!(first, second);
    assert_eq!(first, "ở");
}
