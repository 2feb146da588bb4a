use super::card::Card;
use super::hand::Hand;
use super::rank::Rank;
use super::suit::Suit;
use rand::seq::SliceRandom;

/// The 54-card deck: thirteen suited ranks in four suits plus both jokers.
///
/// Cards come off the top (the end of the underlying list). A fresh deck is
/// ordered; shuffle it before dealing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck(Vec<Card>);

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    pub fn new() -> Self {
        Self(
            Rank::ALL
                .into_iter()
                .flat_map(|rank| match rank.is_joker() {
                    true => vec![Card::from((rank, Suit::default()))],
                    false => Suit::all().map(|suit| Card::from((rank, suit))).to_vec(),
                })
                .collect(),
        )
    }
    /// A fresh deck shuffled with the thread-local generator.
    pub fn shuffled() -> Self {
        let mut deck = Self::new();
        deck.shuffle(&mut rand::rng());
        deck
    }
    pub fn shuffle<R: rand::Rng + ?Sized>(&mut self, rng: &mut R) {
        self.0.shuffle(rng);
    }
    pub fn size(&self) -> usize {
        self.0.len()
    }
    pub fn draw(&mut self) -> Option<Card> {
        self.0.pop()
    }
    /// deal up to n cards off the top
    pub fn deal(&mut self, n: usize) -> Hand {
        (0..n).filter_map(|_| self.draw()).collect()
    }
}

impl From<Deck> for Hand {
    fn from(deck: Deck) -> Self {
        Hand::from(deck.0)
    }
}

impl Iterator for Deck {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        self.draw()
    }
}
