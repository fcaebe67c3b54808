use proptest::prelude::*;
use std::collections::HashSet;
use std::str::FromStr;
use video_poker::deck::{make_deck, ShuffledDeck, DECK_SIZE};
use video_poker::fairness::{commit, digest, replay, verify, Commitment, COMMITMENT_HEX_LEN};

const CORPUS: [&str; 8] = ["", "a", "b", "seed", "seed ", "Seed", "round-1", "🂡 unicode"];

#[test]
fn commitments_are_stable_and_distinct() {
    let mut seen = HashSet::new();
    for s in CORPUS {
        assert_eq!(commit(s), commit(s));
        let hex = commit(s).to_hex();
        assert_eq!(hex.len(), COMMITMENT_HEX_LEN);
        assert!(hex.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
        assert!(seen.insert(hex), "collision for {s:?}");
    }
}

#[test]
fn commitment_parses_back_from_hex() {
    let c = commit("round-1");
    assert_eq!(Commitment::from_str(&c.to_hex()).unwrap(), c);
    assert_eq!(Commitment::from_str(&c.to_hex().to_uppercase()).unwrap(), c);
    assert!(Commitment::from_str("abc").is_err());
    assert!(Commitment::from_str(&"zz".repeat(32)).is_err());
}

#[test]
fn verify_matches_only_the_committed_seed() {
    let c = commit("round-1");
    assert!(verify("round-1", &c));
    assert!(!verify("round-2", &c));
}

#[test]
fn replay_reproduces_deck_and_commitment() {
    let a = replay("round-1");
    let b = replay("round-1");
    assert_eq!(a.commitment, commit("round-1"));
    assert_eq!(a.deck.cards(), b.deck.cards());
    assert_ne!(a.deck.cards(), replay("round-2").deck.cards());
}

#[test]
fn shuffle_moves_cards() {
    let deck = ShuffledDeck::from_digest(&digest("round-1"));
    assert_ne!(deck.cards(), &make_deck()[..]);
    assert_eq!(deck.cursor(), 0);
    assert_eq!(deck.remaining(), DECK_SIZE);
}

proptest! {
    #[test]
    fn shuffle_is_a_permutation(seed in ".{0,32}") {
        let deck = ShuffledDeck::from_digest(&digest(&seed));
        let mut shuffled = deck.cards().to_vec();
        shuffled.sort();
        let mut canonical = make_deck().to_vec();
        canonical.sort();
        prop_assert_eq!(shuffled, canonical);
    }

    #[test]
    fn shuffle_is_deterministic(seed in ".{0,32}") {
        let a = ShuffledDeck::from_digest(&digest(&seed));
        let b = ShuffledDeck::from_digest(&digest(&seed));
        prop_assert_eq!(a, b);
    }
}
