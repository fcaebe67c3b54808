use crate::cards::{parse_cards, Card};
use std::fmt;
use std::str::FromStr;

/// Cards in a video poker hand.
pub const HAND_SIZE: usize = 5;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("expected exactly {HAND_SIZE} cards, got {0}")]
    CardCount(usize),
    #[error("held mask must have exactly {HAND_SIZE} entries, got {0}")]
    MaskLength(usize),
    #[error("hold index {0} out of range (0..{HAND_SIZE})")]
    HoldIndex(usize),
    #[error("card parse error: {0}")]
    CardParse(String),
}

/// Five cards in deal order. Position matters: holds refer to slots 0..4.
///
/// ```
/// use video_poker::hand::Hand;
///
/// let hand: Hand = "Ts Js Qs Ks As".parse().unwrap();
/// assert_eq!(hand.names()[4], ("Ace", "Spades"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hand([Card; HAND_SIZE]);

impl Hand {
    pub const fn new(cards: [Card; HAND_SIZE]) -> Self {
        Self(cards)
    }

    pub fn from_slice(cards: &[Card]) -> Result<Self, HandError> {
        let arr: [Card; HAND_SIZE] =
            cards.try_into().map_err(|_| HandError::CardCount(cards.len()))?;
        Ok(Self(arr))
    }

    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.0
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.0
    }

    pub fn get(&self, index: usize) -> Option<Card> {
        self.0.get(index).copied()
    }

    /// `(rank_name, suit_name)` per slot.
    pub fn names(&self) -> [(&'static str, &'static str); HAND_SIZE] {
        self.0.map(Card::names)
    }

    pub(crate) fn set(&mut self, index: usize, card: Card) {
        self.0[index] = card;
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl FromStr for Hand {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Self::from_slice(&cards)
    }
}

/// Which hand positions survive a replace. Defaults to nothing held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct HeldMask([bool; HAND_SIZE]);

impl HeldMask {
    pub const fn new(mask: [bool; HAND_SIZE]) -> Self {
        Self(mask)
    }

    pub const fn all() -> Self {
        Self([true; HAND_SIZE])
    }

    pub const fn none() -> Self {
        Self([false; HAND_SIZE])
    }

    /// Build from a caller slice; anything but five entries is rejected.
    ///
    /// ```
    /// use video_poker::hand::{HandError, HeldMask};
    ///
    /// assert!(HeldMask::from_slice(&[true, false, true, false, true]).is_ok());
    /// assert_eq!(HeldMask::from_slice(&[true]), Err(HandError::MaskLength(1)));
    /// ```
    pub fn from_slice(mask: &[bool]) -> Result<Self, HandError> {
        let arr: [bool; HAND_SIZE] =
            mask.try_into().map_err(|_| HandError::MaskLength(mask.len()))?;
        Ok(Self(arr))
    }

    pub fn is_held(&self, index: usize) -> bool {
        self.0.get(index).copied().unwrap_or(false)
    }

    pub fn set(&mut self, index: usize, held: bool) -> Result<(), HandError> {
        let slot = self.0.get_mut(index).ok_or(HandError::HoldIndex(index))?;
        *slot = held;
        Ok(())
    }

    /// Flip one position and return its new value.
    pub fn toggle(&mut self, index: usize) -> Result<bool, HandError> {
        let slot = self.0.get_mut(index).ok_or(HandError::HoldIndex(index))?;
        *slot = !*slot;
        Ok(*slot)
    }

    /// Positions that will be replaced, ascending.
    pub fn unheld(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().enumerate().filter(|(_, held)| !**held).map(|(i, _)| i)
    }

    pub fn unheld_count(&self) -> usize {
        self.0.iter().filter(|held| !**held).count()
    }

    pub fn as_array(&self) -> [bool; HAND_SIZE] {
        self.0
    }
}
