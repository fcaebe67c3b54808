use crate::cards::{Card, Rank, Suit};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;

/// Build the canonical, unshuffled 52-card deck.
///
/// Order is rank-major (Two..Ace), suits Hearts, Diamonds, Clubs, Spades within
/// each rank. Verifiers rely on this order, since the shuffle permutes it.
///
/// ```
/// use video_poker::cards::{Card, Rank, Suit};
/// use video_poker::deck::make_deck;
///
/// let deck = make_deck();
/// assert_eq!(deck.len(), 52);
/// assert_eq!(deck[0], Card::new(Rank::Two, Suit::Hearts));
/// assert_eq!(deck[51], Card::new(Rank::Ace, Suit::Spades));
/// ```
pub fn make_deck() -> [Card; DECK_SIZE] {
    let mut cards = [Card::new(Rank::Two, Suit::Hearts); DECK_SIZE];
    for (i, &r) in Rank::ALL.iter().enumerate() {
        for (j, &s) in Suit::ALL.iter().enumerate() {
            cards[i * Suit::ALL.len() + j] = Card::new(r, s);
        }
    }
    cards
}

/// Fisher–Yates: for `i` from the last index down to 1, swap `i` with a uniform `j` in `[0, i]`.
///
/// Indices are drawn as `u32` so the permutation is identical on 32- and 64-bit targets.
pub fn fisher_yates<R: Rng + ?Sized>(cards: &mut [Card], rng: &mut R) {
    for i in (1..cards.len()).rev() {
        let j = rng.random_range(0..=i as u32) as usize;
        cards.swap(i, j);
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("deck exhausted: {requested} card(s) requested at position {position}")]
    Exhausted { position: usize, requested: usize },
}

/// A deck permuted once from a 32-byte digest, read front to back through a cursor.
///
/// The order never changes after construction; drawing only advances the cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShuffledDeck {
    cards: [Card; DECK_SIZE],
    cursor: usize,
}

impl ShuffledDeck {
    /// Shuffle the canonical deck with a ChaCha8 generator seeded by `digest`.
    pub fn from_digest(digest: &[u8; 32]) -> Self {
        let mut rng = ChaCha8Rng::from_seed(*digest);
        let mut cards = make_deck();
        fisher_yates(&mut cards, &mut rng);
        Self { cards, cursor: 0 }
    }

    /// Full permuted order, including cards already drawn.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Position of the next undealt card.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn remaining(&self) -> usize {
        DECK_SIZE - self.cursor
    }

    /// Cards consumed so far, in draw order.
    pub fn drawn(&self) -> &[Card] {
        &self.cards[..self.cursor]
    }

    /// Draw the next card.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        let card = self
            .cards
            .get(self.cursor)
            .copied()
            .ok_or(DeckError::Exhausted { position: self.cursor, requested: 1 })?;
        self.cursor += 1;
        Ok(card)
    }

    /// Draw `N` cards in order. Fails without advancing if fewer than `N` remain.
    pub fn draw_n<const N: usize>(&mut self) -> Result<[Card; N], DeckError> {
        self.ensure_remaining(N)?;
        let mut out = [Card::new(Rank::Two, Suit::Hearts); N];
        out.copy_from_slice(&self.cards[self.cursor..self.cursor + N]);
        self.cursor += N;
        Ok(out)
    }

    /// Check that `n` more cards can be drawn.
    pub fn ensure_remaining(&self, n: usize) -> Result<(), DeckError> {
        if self.remaining() < n {
            return Err(DeckError::Exhausted { position: self.cursor, requested: n });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const DIGEST: [u8; 32] = [7u8; 32];

    #[test]
    fn canonical_deck_has_every_card_once() {
        let d = make_deck();
        let set: HashSet<Card> = d.iter().copied().collect();
        assert_eq!(set.len(), DECK_SIZE);
        for r in Rank::ALL {
            for s in Suit::ALL {
                assert!(set.contains(&Card::new(r, s)));
            }
        }
    }

    #[test]
    fn seeded_shuffle_is_reproducible() {
        let d1 = ShuffledDeck::from_digest(&DIGEST);
        let d2 = ShuffledDeck::from_digest(&DIGEST);
        assert_eq!(d1.cards(), d2.cards());
        assert_ne!(d1.cards(), &make_deck()[..]);
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let d = ShuffledDeck::from_digest(&[42u8; 32]);
        let set: HashSet<Card> = d.cards().iter().copied().collect();
        assert_eq!(set.len(), DECK_SIZE);
    }

    #[test]
    fn different_digests_give_different_orders() {
        let d1 = ShuffledDeck::from_digest(&[1u8; 32]);
        let d2 = ShuffledDeck::from_digest(&[2u8; 32]);
        assert_ne!(d1.cards(), d2.cards());
    }

    #[test]
    fn draw_advances_cursor_in_order() {
        let mut d = ShuffledDeck::from_digest(&DIGEST);
        let order = d.cards().to_vec();
        let c1 = d.draw().unwrap();
        let five: [Card; 5] = d.draw_n().unwrap();
        assert_eq!(c1, order[0]);
        assert_eq!(&five[..], &order[1..6]);
        assert_eq!(d.cursor(), 6);
        assert_eq!(d.remaining(), 46);
        assert_eq!(d.drawn(), &order[..6]);
    }

    #[test]
    fn exhausted_deck_errors_without_advancing() {
        let mut d = ShuffledDeck::from_digest(&DIGEST);
        for _ in 0..50 {
            d.draw().unwrap();
        }
        let err = d.draw_n::<5>().unwrap_err();
        assert_eq!(err, DeckError::Exhausted { position: 50, requested: 5 });
        assert_eq!(d.cursor(), 50);
        d.draw().unwrap();
        d.draw().unwrap();
        assert!(matches!(d.draw(), Err(DeckError::Exhausted { position: 52, .. })));
    }
}
