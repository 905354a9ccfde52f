//! Card faces: symbols and the alphabet they are drawn from.
//!
//! A `Symbol` is an opaque index into an `Alphabet`. The engine only ever
//! compares symbols for equality; the alphabet maps them to display glyphs.

use serde::{Deserialize, Serialize};

/// Glyphs of the default alphabet.
pub const DEFAULT_GLYPHS: [&str; 16] = [
    "🐶", "🐱", "🐭", "🐹", "🐰", "🦊", "🐻", "🐼", "🦁", "🐯", "🐨", "🐮", "🐷", "🐸", "🐵",
    "🦉",
];

/// Number of distinct symbols a `u8` can address.
pub const MAX_SYMBOLS: usize = u8::MAX as usize + 1;

/// A card face. Two cards match when their symbols are equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Symbol(pub u8);

impl Symbol {
    /// Create a new symbol.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Symbol at alphabet position `index`, if addressable.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        u8::try_from(index).ok().map(Self)
    }

    /// Position of this symbol in its alphabet.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Symbol({})", self.0)
    }
}

/// The finite set of faces a board is dealt from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alphabet {
    glyphs: Vec<String>,
}

impl Alphabet {
    /// Create an alphabet from display glyphs.
    pub fn new<I, S>(glyphs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            glyphs: glyphs.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of distinct symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Display glyph for a symbol, if it belongs to this alphabet.
    #[must_use]
    pub fn glyph(&self, symbol: Symbol) -> Option<&str> {
        self.glyphs.get(symbol.index()).map(String::as_str)
    }

    /// Iterate over every addressable symbol of the alphabet.
    ///
    /// Glyphs past `MAX_SYMBOLS` have no symbol and are skipped.
    pub fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        (0..self.glyphs.len()).map_while(Symbol::from_index)
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::new(DEFAULT_GLYPHS)
    }
}
