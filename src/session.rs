use crate::symbol::{DirectionalSymbol, SymbolSet};

/// Symbols collected during one key hold.
///
/// Order and repeats are kept: repeated taps drive the umlaut rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GestureSession {
    symbols: Vec<DirectionalSymbol>,
}

impl GestureSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, symbol: DirectionalSymbol) {
        self.symbols.push(symbol);
    }

    pub fn symbols(&self) -> &[DirectionalSymbol] {
        &self.symbols
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn tap_count(&self) -> usize {
        count_taps(&self.symbols)
    }

    pub fn present(&self) -> SymbolSet {
        self.symbols.iter().copied().collect()
    }
}

pub(crate) fn count_taps(symbols: &[DirectionalSymbol]) -> usize {
    symbols
        .iter()
        .filter(|s| matches!(s, DirectionalSymbol::Tap))
        .count()
}
