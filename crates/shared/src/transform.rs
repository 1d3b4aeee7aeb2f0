//! Pure list transforms. Inputs are borrowed and left untouched; every
//! output is a fresh `Vec` in source order.

use crate::domain::Player;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParitySplit<T> {
    /// Elements at odd zero-based indices.
    pub odd: Vec<T>,
    /// Elements at even zero-based indices.
    pub even: Vec<T>,
}

impl<T: Clone> ParitySplit<T> {
    /// Interleaves both halves back into source order.
    pub fn rejoin(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.odd.len() + self.even.len());
        let mut even = self.even.iter();
        let mut odd = self.odd.iter();
        loop {
            match (even.next(), odd.next()) {
                (None, None) => break,
                (e, o) => {
                    out.extend(e.cloned());
                    out.extend(o.cloned());
                }
            }
        }
        out
    }
}

pub fn filter_by<T: Clone>(items: &[T], keep: impl Fn(&T) -> bool) -> Vec<T> {
    items.iter().filter(|item| keep(item)).cloned().collect()
}

pub fn partition_by_parity<T: Clone>(items: &[T]) -> ParitySplit<T> {
    let (odd, even): (Vec<_>, Vec<_>) = items
        .iter()
        .enumerate()
        .partition(|(index, _)| index % 2 != 0);
    ParitySplit {
        odd: odd.into_iter().map(|(_, item)| item.clone()).collect(),
        even: even.into_iter().map(|(_, item)| item.clone()).collect(),
    }
}

pub fn merge<T: Clone>(first: &[T], second: &[T]) -> Vec<T> {
    let mut merged = Vec::with_capacity(first.len() + second.len());
    merged.extend_from_slice(first);
    merged.extend_from_slice(second);
    merged
}

/// Players whose score is strictly below `threshold`.
pub fn below_score(players: &[Player], threshold: u32) -> Vec<Player> {
    filter_by(players, |player| player.score < threshold)
}

#[cfg(test)]
#[path = "tests/transform_tests.rs"]
mod tests;
