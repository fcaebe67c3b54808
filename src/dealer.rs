//! One round of draw poker: commit, deal, hold, replace, evaluate, reveal.

use crate::cards::Card;
use crate::deck::{DeckError, ShuffledDeck};
use crate::evaluator::{evaluate_hand, Category};
use crate::fairness::{Commitment, FairnessError, Seed};
use crate::hand::{Hand, HandError, HeldMask, HAND_SIZE};
use std::fmt;

/// Where a round is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Nothing dealt yet.
    Fresh,
    /// Five cards dealt, holds may change.
    Dealt,
    /// Unheld cards replaced. The round is complete.
    Replaced,
}

/// Broad failure classes a caller can branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    InvalidInput,
    Sequence,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DealerError {
    #[error("configuration error: {0}")]
    Configuration(#[from] FairnessError),
    #[error("invalid input: {0}")]
    InvalidInput(#[from] HandError),
    #[error("cannot {op} while {state:?}")]
    Sequence { op: &'static str, state: RoundState },
    #[error(transparent)]
    Deck(#[from] DeckError),
}

impl DealerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DealerError::Configuration(_) => ErrorKind::Configuration,
            DealerError::InvalidInput(_) => ErrorKind::InvalidInput,
            DealerError::Sequence { .. } | DealerError::Deck(_) => ErrorKind::Sequence,
        }
    }
}

/// A single provably-fair round.
///
/// The deck is shuffled once at construction from the seed's SHA-256 digest, and the
/// commitment to that digest is available immediately. The seed itself stays hidden
/// until the round completes.
///
/// ```
/// use video_poker::dealer::Dealer;
/// use video_poker::fairness::verify;
///
/// let mut dealer = Dealer::with_seed("example-seed");
/// let commitment = *dealer.commitment();
/// dealer.deal().unwrap();
/// dealer.set_held(0, true).unwrap();
/// dealer.replace().unwrap();
/// let category = dealer.evaluate().unwrap();
/// assert_eq!(dealer.evaluation(), Some(category));
/// assert!(verify(dealer.reveal_seed().unwrap(), &commitment));
/// ```
pub struct Dealer {
    seed: Seed,
    commitment: Commitment,
    deck: ShuffledDeck,
    hand: Option<Hand>,
    held: HeldMask,
    evaluation: Option<Category>,
    state: RoundState,
}

impl fmt::Debug for Dealer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // seed and deck order stay out of debug output
        f.debug_struct("Dealer")
            .field("commitment", &self.commitment.to_hex())
            .field("state", &self.state)
            .field("cursor", &self.deck.cursor())
            .field("hand", &self.hand)
            .field("held", &self.held)
            .field("evaluation", &self.evaluation)
            .finish_non_exhaustive()
    }
}

impl Dealer {
    /// Start a round. A missing or blank seed is replaced by a random one.
    pub fn new(seed: Option<&str>) -> Result<Self, DealerError> {
        let seed = match seed {
            Some(s) if !s.trim().is_empty() => Seed::new(s),
            _ => Seed::random()?,
        };
        Ok(Self::from_seed(seed))
    }

    /// Start a round from a known seed, used verbatim.
    pub fn with_seed(seed: &str) -> Self {
        Self::from_seed(Seed::new(seed))
    }

    fn from_seed(seed: Seed) -> Self {
        let hash = seed.digest();
        let commitment = Commitment::from_hash(hash);
        let deck = ShuffledDeck::from_digest(&hash);
        log::info!("new round, commitment {commitment}");
        Self {
            seed,
            commitment,
            deck,
            hand: None,
            held: HeldMask::none(),
            evaluation: None,
            state: RoundState::Fresh,
        }
    }

    pub fn commitment(&self) -> &Commitment {
        &self.commitment
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    /// Current hand; `None` until dealt.
    pub fn hand(&self) -> Option<&Hand> {
        self.hand.as_ref()
    }

    pub fn held(&self) -> &HeldMask {
        &self.held
    }

    /// Position of the next undealt card in the shuffled deck.
    pub fn cursor(&self) -> usize {
        self.deck.cursor()
    }

    /// Last computed category, cleared by a replace.
    pub fn evaluation(&self) -> Option<Category> {
        self.evaluation
    }

    fn sequence_error(&self, op: &'static str) -> DealerError {
        log::warn!("rejected {op} while {:?}", self.state);
        DealerError::Sequence { op, state: self.state }
    }

    /// Deal the first five cards of the shuffled deck.
    pub fn deal(&mut self) -> Result<&Hand, DealerError> {
        if self.state != RoundState::Fresh {
            return Err(self.sequence_error("deal"));
        }
        let cards: [Card; HAND_SIZE] = self.deck.draw_n()?;
        let hand = Hand::new(cards);
        log::debug!("dealt {hand}, {} card(s) left", self.deck.remaining());
        self.state = RoundState::Dealt;
        Ok(&*self.hand.insert(hand))
    }

    pub fn set_held(&mut self, index: usize, held: bool) -> Result<(), DealerError> {
        if self.state == RoundState::Replaced {
            return Err(self.sequence_error("change holds"));
        }
        self.held.set(index, held)?;
        Ok(())
    }

    /// Flip one hold and return the new value.
    pub fn toggle_held(&mut self, index: usize) -> Result<bool, DealerError> {
        if self.state == RoundState::Replaced {
            return Err(self.sequence_error("change holds"));
        }
        Ok(self.held.toggle(index)?)
    }

    /// Replace unheld positions using the dealer's own hold mask.
    pub fn replace(&mut self) -> Result<&Hand, DealerError> {
        let mask = self.held;
        self.replace_masked(mask)
    }

    /// Replace unheld positions using a caller-supplied mask of exactly five entries.
    ///
    /// The mask becomes the dealer's hold state on success.
    pub fn replace_with(&mut self, mask: &[bool]) -> Result<&Hand, DealerError> {
        let mask = HeldMask::from_slice(mask)?;
        self.replace_masked(mask)
    }

    fn replace_masked(&mut self, mask: HeldMask) -> Result<&Hand, DealerError> {
        let mut hand = match (self.state, self.hand) {
            (RoundState::Dealt, Some(hand)) => hand,
            _ => return Err(self.sequence_error("replace")),
        };
        // capacity is checked up front so a failure leaves the round untouched
        self.deck.ensure_remaining(mask.unheld_count())?;
        for i in mask.unheld() {
            hand.set(i, self.deck.draw()?);
        }
        log::debug!(
            "replaced {} card(s) held {:?}, hand {hand}, cursor {}",
            mask.unheld_count(),
            mask.as_array(),
            self.deck.cursor()
        );
        self.held = mask;
        self.evaluation = None;
        self.state = RoundState::Replaced;
        Ok(&*self.hand.insert(hand))
    }

    /// Classify the current hand and remember the result.
    pub fn evaluate(&mut self) -> Result<Category, DealerError> {
        let Some(hand) = self.hand else {
            return Err(self.sequence_error("evaluate"));
        };
        let category = evaluate_hand(&hand);
        log::debug!("evaluated {hand} as {}", category.id());
        self.evaluation = Some(category);
        Ok(category)
    }

    /// The seed, once the round is complete.
    pub fn reveal_seed(&self) -> Result<&str, DealerError> {
        if self.state != RoundState::Replaced {
            return Err(self.sequence_error("reveal seed"));
        }
        log::info!("revealed seed for commitment {}", self.commitment);
        Ok(self.seed.expose())
    }

    /// The full shuffled deck, once the round is complete.
    pub fn revealed_deck(&self) -> Result<&ShuffledDeck, DealerError> {
        if self.state != RoundState::Replaced {
            return Err(self.sequence_error("reveal deck"));
        }
        Ok(&self.deck)
    }
}
