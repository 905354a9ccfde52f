//! Dealing: pick distinct symbols, pair them up, shuffle.

use super::rng::GameRng;
use super::symbol::{Symbol, MAX_SYMBOLS};

/// Deal `pair_count` pairs from an alphabet of `alphabet_len` symbols.
///
/// Symbols are chosen uniformly without replacement, each is duplicated,
/// and the resulting `2 * pair_count` faces are uniformly permuted.
///
/// Only the first `MAX_SYMBOLS` positions of the alphabet are addressable,
/// so larger alphabets are dealt from that prefix.
///
/// Panics if `pair_count` exceeds the addressable alphabet;
/// `MatchConfig::validate` rules that out before a board is ever dealt.
///
/// ```
/// use memory_match::core::{deal_symbols, GameRng};
///
/// let mut rng = GameRng::new(1);
/// let faces = deal_symbols(16, 8, &mut rng);
/// assert_eq!(faces.len(), 16);
/// ```
pub fn deal_symbols(alphabet_len: usize, pair_count: usize, rng: &mut GameRng) -> Vec<Symbol> {
    let addressable = alphabet_len.min(MAX_SYMBOLS);
    let chosen: Vec<Symbol> = rng
        .sample_indices(addressable, pair_count)
        .into_iter()
        .filter_map(Symbol::from_index)
        .collect();

    let mut faces: Vec<Symbol> = chosen.iter().chain(chosen.iter()).copied().collect();

    rng.shuffle(&mut faces);
    faces
}
