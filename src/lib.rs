//! video-poker-rs: provably-fair Jacks-or-Better dealer
//!
//! Goals:
//! - Commit to a seed before any card is shown; reveal it after the round
//! - Deterministic, reproducible shuffle from the seed's SHA-256 digest
//! - Total, unambiguous Jacks-or-Better hand classification
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: play a round
//! ```
//! use video_poker::dealer::Dealer;
//! use video_poker::fairness::{replay, verify};
//!
//! let mut dealer = Dealer::new(Some("my-seed")).unwrap();
//! println!("commitment: {}", dealer.commitment());
//!
//! let hand = *dealer.deal().unwrap();
//! dealer.replace_with(&[true, true, false, false, false]).unwrap();
//! let category = dealer.evaluate().unwrap();
//! println!("{hand} -> {category} pays {}", category.payout());
//!
//! // Anyone holding the revealed seed can audit the round.
//! let seed = dealer.reveal_seed().unwrap();
//! assert!(verify(seed, dealer.commitment()));
//! assert_eq!(&replay(seed).deck.cards()[..5], hand.as_slice());
//! ```
//!
//! ## TUI
//! Run the interactive TUI with:
//! ```sh
//! cargo run --bin video-poker
//! ```

pub mod cards;
pub mod dealer;
pub mod deck;
pub mod evaluator;
pub mod fairness;
pub mod hand;
pub mod tui;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
