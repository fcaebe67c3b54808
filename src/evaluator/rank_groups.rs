use crate::cards::Rank;

/// Ranks grouped by frequency, sorted by (count desc, rank desc).
///
/// Example: QQQ72 groups as [(Queen, 3), (Seven, 1), (Two, 1)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    groups: Vec<(Rank, u8)>,
}

impl RankGroups {
    pub fn from_ranks(ranks: &[Rank]) -> Self {
        let mut counts = [0u8; 15];
        for r in ranks {
            counts[r.value() as usize] += 1;
        }
        let mut groups: Vec<(Rank, u8)> = Rank::ALL
            .iter()
            .copied()
            .filter_map(|r| {
                let c = counts[r.value() as usize];
                (c > 0).then_some((r, c))
            })
            .collect();
        groups.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));
        Self { groups }
    }

    /// Rank appearing four or more times.
    pub fn quad(&self) -> Option<Rank> {
        self.groups.iter().find(|(_, count)| *count >= 4).map(|(rank, _)| *rank)
    }

    /// Rank appearing exactly three times.
    pub fn trips(&self) -> Option<Rank> {
        self.groups.iter().find(|(_, count)| *count == 3).map(|(rank, _)| *rank)
    }

    /// Ranks appearing exactly twice, descending.
    pub fn pairs(&self) -> Vec<Rank> {
        self.groups.iter().filter(|(_, count)| *count == 2).map(|(rank, _)| *rank).collect()
    }

    pub fn has_full_house(&self) -> bool {
        self.trips().is_some() && !self.pairs().is_empty()
    }

    #[cfg(test)]
    pub fn groups(&self) -> &[(Rank, u8)] {
        &self.groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quad() {
        let groups = RankGroups::from_ranks(&[Rank::Ace, Rank::Ace, Rank::King, Rank::Ace, Rank::Ace]);
        assert_eq!(groups.quad(), Some(Rank::Ace));
        assert_eq!(groups.trips(), None);
        assert!(groups.pairs().is_empty());
    }

    #[test]
    fn test_full_house() {
        let groups =
            RankGroups::from_ranks(&[Rank::Nine, Rank::Four, Rank::Nine, Rank::Four, Rank::Nine]);
        assert!(groups.has_full_house());
        assert_eq!(groups.trips(), Some(Rank::Nine));
        assert_eq!(groups.pairs(), vec![Rank::Four]);
    }

    #[test]
    fn test_two_pair_order() {
        let groups =
            RankGroups::from_ranks(&[Rank::Five, Rank::Jack, Rank::Two, Rank::Five, Rank::Jack]);
        assert_eq!(groups.pairs(), vec![Rank::Jack, Rank::Five]);
        assert_eq!(groups.groups(), &[(Rank::Jack, 2), (Rank::Five, 2), (Rank::Two, 1)]);
    }
}
