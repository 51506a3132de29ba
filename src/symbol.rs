/// A discrete classification of one drag on the gesture surface.
///
/// `Tap` covers strokes too short to have a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectionalSymbol {
    Tap,
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl DirectionalSymbol {
    /// All nine symbols, taps first then clockwise from up.
    pub const ALL: [DirectionalSymbol; 9] = [
        DirectionalSymbol::Tap,
        DirectionalSymbol::Up,
        DirectionalSymbol::UpRight,
        DirectionalSymbol::Right,
        DirectionalSymbol::DownRight,
        DirectionalSymbol::Down,
        DirectionalSymbol::DownLeft,
        DirectionalSymbol::Left,
        DirectionalSymbol::UpLeft,
    ];
}

bitflags::bitflags! {
    /// The set of symbols present in a session, ignoring order and repeats.
    ///
    /// Rule lookups only ever ask "is this symbol present", so the composer
    /// folds the ordered session into one of these first.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct SymbolSet: u16 {
        const TAP        = 1 << 0;
        const UP         = 1 << 1;
        const DOWN       = 1 << 2;
        const LEFT       = 1 << 3;
        const RIGHT      = 1 << 4;
        const UP_LEFT    = 1 << 5;
        const UP_RIGHT   = 1 << 6;
        const DOWN_LEFT  = 1 << 7;
        const DOWN_RIGHT = 1 << 8;
    }
}

impl From<DirectionalSymbol> for SymbolSet {
    fn from(symbol: DirectionalSymbol) -> Self {
        match symbol {
            DirectionalSymbol::Tap => SymbolSet::TAP,
            DirectionalSymbol::Up => SymbolSet::UP,
            DirectionalSymbol::Down => SymbolSet::DOWN,
            DirectionalSymbol::Left => SymbolSet::LEFT,
            DirectionalSymbol::Right => SymbolSet::RIGHT,
            DirectionalSymbol::UpLeft => SymbolSet::UP_LEFT,
            DirectionalSymbol::UpRight => SymbolSet::UP_RIGHT,
            DirectionalSymbol::DownLeft => SymbolSet::DOWN_LEFT,
            DirectionalSymbol::DownRight => SymbolSet::DOWN_RIGHT,
        }
    }
}

impl FromIterator<DirectionalSymbol> for SymbolSet {
    fn from_iter<I: IntoIterator<Item = DirectionalSymbol>>(iter: I) -> Self {
        iter.into_iter()
            .fold(SymbolSet::empty(), |set, symbol| set | symbol.into())
    }
}
