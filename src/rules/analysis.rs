use crate::cards::card::Card;
use crate::cards::rank::Rank;

/// Per-rank multiplicities of a card collection.
///
/// Counts live in a fixed array indexed by rank, so every list derived here
/// comes out in ascending rank order no matter how the cards were ordered.
/// The four exact-count lists hold ranks seen exactly 4, 3, 2 and 1 times.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Analysis {
    counts: [usize; 15],
    fours: Vec<Rank>,
    trios: Vec<Rank>,
    pairs: Vec<Rank>,
    singles: Vec<Rank>,
}

impl Analysis {
    pub fn count(&self, rank: Rank) -> usize {
        self.counts[u8::from(rank) as usize]
    }
    /// total number of cards
    pub fn size(&self) -> usize {
        self.counts.iter().sum()
    }
    /// number of ranks present
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|n| **n > 0).count()
    }
    pub fn ranks(&self) -> Vec<Rank> {
        self.at_least(1)
    }
    /// ranks held at least `n` times, ascending
    pub fn at_least(&self, n: usize) -> Vec<Rank> {
        Rank::ALL
            .into_iter()
            .filter(|r| self.count(*r) >= n)
            .collect()
    }
    pub fn has_rocket(&self) -> bool {
        self.count(Rank::BlackJoker) > 0 && self.count(Rank::RedJoker) > 0
    }

    pub fn fours(&self) -> &[Rank] {
        &self.fours
    }
    pub fn trios(&self) -> &[Rank] {
        &self.trios
    }
    pub fn pairs(&self) -> &[Rank] {
        &self.pairs
    }
    pub fn singles(&self) -> &[Rank] {
        &self.singles
    }

    fn exactly(counts: &[usize; 15], n: usize) -> Vec<Rank> {
        Rank::ALL
            .into_iter()
            .filter(|r| counts[u8::from(*r) as usize] == n)
            .collect()
    }
}

impl From<&[Card]> for Analysis {
    fn from(cards: &[Card]) -> Self {
        let counts = cards.iter().fold([0usize; 15], |mut counts, card| {
            counts[u8::from(card.rank()) as usize] += 1;
            counts
        });
        Self {
            fours: Self::exactly(&counts, 4),
            trios: Self::exactly(&counts, 3),
            pairs: Self::exactly(&counts, 2),
            singles: Self::exactly(&counts, 1),
            counts,
        }
    }
}
