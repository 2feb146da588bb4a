use super::card::Card;
use super::selection::Selection;
use super::selection::SelectionError;

/// The cards a player holds.
///
/// Unlike a deck, a hand is a multiset: nothing stops a caller from mixing
/// cards of several decks, so duplicates are kept and counted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Hand(Vec<Card>);

impl Hand {
    pub fn size(&self) -> usize {
        self.0.len()
    }
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
    /// strongest first, the way a player fans their cards
    pub fn sort(&mut self) {
        self.0.sort_by(|a, b| b.cmp(a));
    }
    /// Resolves a rank token such as `"3334"` or `"JOKER"` into cards held.
    pub fn select(&self, token: &str) -> Result<Vec<Card>, SelectionError> {
        Selection::try_from(token)?.take(&self.0)
    }
    /// Multiset difference: each entry of `cards` removes at most one
    /// matching card. Survivors keep their order.
    pub fn without(&self, cards: &[Card]) -> Self {
        let mut pending = cards.to_vec();
        self.0
            .iter()
            .filter(|card| match pending.iter().position(|p| p == *card) {
                Some(i) => {
                    pending.swap_remove(i);
                    false
                }
                None => true,
            })
            .copied()
            .collect()
    }
    pub fn remove(&mut self, cards: &[Card]) {
        *self = self.without(cards);
    }
}

/// Vec<Card> isomorphism
impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self(cards)
    }
}
impl From<Hand> for Vec<Card> {
    fn from(hand: Hand) -> Self {
        hand.0
    }
}
impl From<&[Card]> for Hand {
    fn from(cards: &[Card]) -> Self {
        Self(cards.to_vec())
    }
}
impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// str isomorphism
/// this follows from Card::parse
impl TryFrom<&str> for Hand {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Card::parse(s).map(Self)
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let cards = self.0.iter().map(|c| c.to_string()).collect::<Vec<_>>();
        write!(f, "{}", cards.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::rank::Rank;

    #[test]
    fn sorting() {
        let mut hand = Hand::try_from("3s RJ Ah 2c 3d").unwrap();
        hand.sort();
        assert_eq!(hand.to_string(), "RJ 2c Ah 3s 3d");
    }

    #[test]
    fn removal_by_identity() {
        let hand = Hand::try_from("3s 3h 4d 5c").unwrap();
        let gone = Card::parse("3h 5c").unwrap();
        assert_eq!(hand.without(&gone), Hand::try_from("3s 4d").unwrap());
    }

    #[test]
    fn removal_ignores_missing() {
        let mut hand = Hand::try_from("3s 4d").unwrap();
        hand.remove(&Card::parse("3h Kd").unwrap());
        assert_eq!(hand, Hand::try_from("3s 4d").unwrap());
    }

    #[test]
    fn removal_counts_occurrences() {
        // two decks mixed together hold duplicate cards
        let hand = Hand::try_from("7s 7s 7s 8h").unwrap();
        let once = hand.without(&Card::parse("7s").unwrap());
        assert_eq!(once, Hand::try_from("7s 7s 8h").unwrap());
        let twice = hand.without(&Card::parse("7s 7s 8h 8h").unwrap());
        assert_eq!(twice, Hand::try_from("7s").unwrap());
    }

    #[test]
    fn selecting() {
        let hand = Hand::try_from("3s 3h 3d 4c BJ").unwrap();
        let picked = hand.select("334").unwrap();
        assert_eq!(picked.len(), 3);
        assert_eq!(picked.iter().filter(|c| c.rank() == Rank::Three).count(), 2);
        assert_eq!(picked.iter().filter(|c| c.rank() == Rank::Four).count(), 1);
        assert!(picked.iter().all(|c| hand.cards().contains(c)));
    }
}
