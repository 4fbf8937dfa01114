//! Clone-padded display sequence.
//!
//! For `N` real cards and `V` visible slots the sequence is
//! `[last V cards] + cards + [first V cards]`, so stepping one slot past either
//! end of the real range lands on a copy of the card at the opposite end.

use crate::card::CardRecord;

#[derive(Debug, Clone, Default)]
pub struct LoopBuffer {
    cards: Vec<CardRecord>,
    display: Vec<CardRecord>,
    visible_count: usize,
    clone_count: usize,
}

impl LoopBuffer {
    /// Looping is only enabled when there are more cards than visible slots;
    /// otherwise the cards are laid out once, unpadded.
    pub fn build(cards: Vec<CardRecord>, visible_count: usize) -> Self {
        let visible_count = visible_count.max(1);
        let len = cards.len();

        if len <= visible_count {
            return Self {
                display: cards.clone(),
                cards,
                visible_count,
                clone_count: 0,
            };
        }

        let mut display = Vec::with_capacity(len + 2 * visible_count);
        display.extend_from_slice(&cards[len - visible_count..]);
        display.extend_from_slice(&cards);
        display.extend_from_slice(&cards[..visible_count]);

        Self {
            cards,
            display,
            visible_count,
            clone_count: visible_count,
        }
    }

    pub fn cards(&self) -> &[CardRecord] {
        &self.cards
    }

    pub fn display(&self) -> &[CardRecord] {
        &self.display
    }

    pub fn real_len(&self) -> usize {
        self.cards.len()
    }

    pub fn display_len(&self) -> usize {
        self.display.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    /// Number of clones on each side; zero when looping is disabled.
    pub fn clone_count(&self) -> usize {
        self.clone_count
    }

    pub fn can_navigate(&self) -> bool {
        self.clone_count > 0
    }

    /// Display index of the first real card.
    pub fn initial_index(&self) -> usize {
        self.clone_count
    }

    pub fn is_clone(&self, display_index: usize) -> bool {
        display_index < self.clone_count
            || (display_index >= self.clone_count + self.real_len()
                && display_index < self.display_len())
    }

    /// Inclusive range of display indices holding real cards.
    pub fn real_range(&self) -> Option<(usize, usize)> {
        if self.is_empty() {
            return None;
        }
        Some((self.clone_count, self.clone_count + self.real_len() - 1))
    }
}
