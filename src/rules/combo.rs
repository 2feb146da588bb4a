use super::classifier::Classifier;
use super::error::ShapeError;
use super::shape::Shape;
use crate::cards::card::Card;
use crate::cards::hand::Hand;

/// A legal play: the cards laid down together with the shape they form.
///
/// Only classification builds one, so it serializes but never deserializes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Combo {
    shape: Shape,
    cards: Vec<Card>,
}

impl Combo {
    pub fn shape(&self) -> Shape {
        self.shape
    }
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
    pub fn beats(&self, other: &Self) -> bool {
        self.shape.beats(&other.shape)
    }
}

impl TryFrom<Vec<Card>> for Combo {
    type Error = ShapeError;
    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        let shape = Classifier::from(cards.as_slice()).classify();
        log::trace!("{:<32}{:?}", Hand::from(cards.as_slice()), shape);
        Ok(Self {
            shape: shape?,
            cards,
        })
    }
}
impl TryFrom<&[Card]> for Combo {
    type Error = ShapeError;
    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        Self::try_from(cards.to_vec())
    }
}

impl From<Combo> for Vec<Card> {
    fn from(combo: Combo) -> Self {
        combo.cards
    }
}

impl std::fmt::Display for Combo {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}  {}", self.shape, Hand::from(self.cards.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::deck::Deck;
    use crate::cards::rank::Rank;

    fn combo(token: &str) -> Result<Combo, ShapeError> {
        Combo::try_from(Hand::from(Deck::new()).select(token).unwrap())
    }

    #[test]
    fn keeps_cards() {
        let played = combo("3334").unwrap();
        assert_eq!(played.shape(), Shape::TrioWithSingle(Rank::Three));
        assert_eq!(played.cards().len(), 4);
        assert_eq!(played.shape().n_cards(), played.cards().len());
    }

    #[test]
    fn rejects() {
        assert_eq!(combo(""), Err(ShapeError::Empty));
        assert_eq!(combo("33345"), Err(ShapeError::Unrecognized));
    }

    #[test]
    fn compares_by_shape() {
        let bomb = combo("4444").unwrap();
        let kings = combo("KK").unwrap();
        let rocket = combo("JOKER").unwrap();
        assert!(bomb.beats(&kings));
        assert!(!kings.beats(&bomb));
        assert!(rocket.beats(&bomb));
        assert!(!combo("3333").unwrap().beats(&bomb));
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn serializes_shape_and_cards() {
        let rocket = combo("JOKER").unwrap();
        let json = serde_json::to_value(&rocket).unwrap();
        assert_eq!(json["shape"], serde_json::json!("Rocket"));
        assert_eq!(json["cards"], serde_json::json!([52, 53]));
    }

    #[test]
    fn display() {
        let played = combo("556677").unwrap();
        assert!(played.to_string().starts_with("PairStraight     5x3"));
    }
}
