use crate::cards::Rank;

/// Whether five ranks form a straight, and its top rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub is_straight: bool,
    pub top_rank: Option<Rank>,
    /// The distinct ranks are exactly Ten..Ace.
    pub is_broadway: bool,
}

impl StraightInfo {
    /// Detect a straight from five ranks in any order.
    ///
    /// Works on the set of distinct values, so duplicated ranks never form a straight.
    /// The wheel (A-2-3-4-5) counts, with Five as the top rank.
    pub fn detect(ranks: &[Rank; 5]) -> Self {
        let mut vals = ranks.map(Rank::value);
        vals.sort_unstable();
        let distinct = vals.windows(2).all(|w| w[0] != w[1]);
        let none = StraightInfo { is_straight: false, top_rank: None, is_broadway: false };
        if !distinct {
            return none;
        }

        if vals[4] - vals[0] == 4 {
            return StraightInfo {
                is_straight: true,
                top_rank: Rank::from_value(vals[4]),
                is_broadway: vals[0] == Rank::Ten.value(),
            };
        }

        if vals == [2, 3, 4, 5, 14] {
            return StraightInfo { is_straight: true, top_rank: Some(Rank::Five), is_broadway: false };
        }

        none
    }
}
