//! Commit-then-reveal for the shuffle.
//!
//! The published contract, so any verifier can reproduce a round:
//! - `digest = SHA-256(seed as UTF-8 bytes)`
//! - `commitment = lowercase hex(digest)`, 64 characters
//! - deck order = Fisher–Yates over [`make_deck`](crate::deck::make_deck) driven by
//!   `ChaCha8Rng::from_seed(digest)` (see [`ShuffledDeck::from_digest`])
//!
//! ```
//! use video_poker::fairness::{commit, replay, verify};
//!
//! let commitment = commit("table-7-round-12");
//! assert!(verify("table-7-round-12", &commitment));
//! assert_eq!(replay("table-7-round-12").commitment, commitment);
//! ```

use crate::deck::ShuffledDeck;
use rand::rngs::OsRng;
use rand::TryRngCore;
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

/// SHA-256 output: the single hash from which both the commitment and the shuffle derive.
pub type SeedHash = [u8; 32];

/// Hex length of a [`Commitment`].
pub const COMMITMENT_HEX_LEN: usize = 64;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FairnessError {
    #[error("entropy source unavailable: {0}")]
    EntropyUnavailable(String),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum CommitmentParseError {
    #[error("commitment must be {COMMITMENT_HEX_LEN} hex characters, got {0}")]
    Length(usize),
    #[error("invalid commitment hex: {0}")]
    Hex(#[from] hex::FromHexError),
}

/// Hash a seed string.
pub fn digest(seed: &str) -> SeedHash {
    let mut out = [0u8; 32];
    out.copy_from_slice(&Sha256::digest(seed.as_bytes()));
    out
}

/// Commitment for a seed.
pub fn commit(seed: &str) -> Commitment {
    Commitment(digest(seed))
}

/// Check a revealed seed against a previously published commitment.
pub fn verify(seed: &str, commitment: &Commitment) -> bool {
    commit(seed) == *commitment
}

/// Secret seed. Its `Debug` output is redacted so it cannot leak through logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Seed(String);

impl Seed {
    pub fn new(seed: impl Into<String>) -> Self {
        Self(seed.into())
    }

    /// Fresh seed: 16 bytes of OS entropy formatted as a UUID v4 string.
    pub fn random() -> Result<Self, FairnessError> {
        let mut bytes = [0u8; 16];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| FairnessError::EntropyUnavailable(e.to_string()))?;
        let id = uuid::Builder::from_random_bytes(bytes).into_uuid();
        Ok(Self(id.hyphenated().to_string()))
    }

    pub fn digest(&self) -> SeedHash {
        digest(&self.0)
    }

    pub(crate) fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Seed(<redacted>)")
    }
}

/// One-way commitment to a seed, shown before any card is dealt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Commitment(SeedHash);

impl Commitment {
    pub const fn from_hash(hash: SeedHash) -> Self {
        Self(hash)
    }

    pub const fn as_bytes(&self) -> &SeedHash {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Commitment {
    type Err = CommitmentParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.len() != COMMITMENT_HEX_LEN {
            return Err(CommitmentParseError::Length(t.len()));
        }
        let mut out = [0u8; 32];
        hex::decode_to_slice(t, &mut out)?;
        Ok(Self(out))
    }
}

/// Independent recomputation of a round from its revealed seed.
#[derive(Debug, Clone)]
pub struct Replay {
    pub commitment: Commitment,
    pub deck: ShuffledDeck,
}

/// Recompute the commitment and the full deck order for `seed`.
pub fn replay(seed: &str) -> Replay {
    let hash = digest(seed);
    Replay { commitment: Commitment(hash), deck: ShuffledDeck::from_digest(&hash) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_sha256_vector() {
        assert_eq!(
            commit("abc").to_hex(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert_eq!(
            commit("").to_hex(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn commitment_is_idempotent_and_distinct() {
        assert_eq!(commit("seed-a"), commit("seed-a"));
        assert_ne!(commit("seed-a"), commit("seed-b"));
        assert_eq!(commit("seed-a").to_hex().len(), COMMITMENT_HEX_LEN);
    }

    #[test]
    fn commitment_parses_from_hex() {
        let c = commit("round-1");
        let parsed: Commitment = c.to_string().parse().unwrap();
        assert_eq!(parsed, c);
        let upper: Commitment = c.to_hex().to_ascii_uppercase().parse().unwrap();
        assert_eq!(upper, c);
        assert!(matches!("abcd".parse::<Commitment>(), Err(CommitmentParseError::Length(4))));
        let bad = "zz".repeat(32);
        assert!(matches!(bad.parse::<Commitment>(), Err(CommitmentParseError::Hex(_))));
    }

    #[test]
    fn verify_rejects_wrong_seed() {
        let c = commit("honest");
        assert!(verify("honest", &c));
        assert!(!verify("tampered", &c));
        assert!(!verify("honest ", &c));
    }

    #[test]
    fn random_seeds_are_uuid_shaped_and_unique() {
        let a = Seed::random().unwrap();
        let b = Seed::random().unwrap();
        assert_ne!(a, b);
        let s = a.expose();
        assert_eq!(s.len(), 36);
        assert!(uuid::Uuid::parse_str(s).is_ok());
    }

    #[test]
    fn seed_debug_is_redacted() {
        let seed = Seed::new("super-secret");
        let dbg = format!("{seed:?}");
        assert!(!dbg.contains("super-secret"));
    }

    #[test]
    fn replay_matches_seed_digest() {
        let r = replay("audit-me");
        assert_eq!(r.commitment, commit("audit-me"));
        assert_eq!(r.deck, ShuffledDeck::from_digest(&Seed::new("audit-me").digest()));
        assert_eq!(r.deck.cursor(), 0);
    }
}
