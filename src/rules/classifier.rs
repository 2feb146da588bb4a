use super::analysis::Analysis;
use super::error::ShapeError;
use super::shape::Shape;
use crate::cards::card::Card;
use crate::cards::rank::Rank;

/// Maps a set of cards to the one shape it forms.
///
/// Rules are tried in a fixed priority and the first match wins, even when
/// the cards would also satisfy a later rule.
pub struct Classifier(Analysis);

impl From<&[Card]> for Classifier {
    fn from(cards: &[Card]) -> Self {
        Self(Analysis::from(cards))
    }
}

impl Classifier {
    pub fn classify(&self) -> Result<Shape, ShapeError> {
        match self.0.size() {
            0 => Err(ShapeError::Empty),
            _ => self.find_shape().ok_or(ShapeError::Unrecognized),
        }
    }

    fn find_shape(&self) -> Option<Shape> {
        None.or_else(|| self.find_rocket())
            .or_else(|| self.find_bomb())
            .or_else(|| self.find_four_with_kickers())
            .or_else(|| self.find_trio_with_kicker())
            .or_else(|| self.find_plane())
            .or_else(|| self.find_straight())
            .or_else(|| self.find_pair_straight())
            .or_else(|| self.find_uniform())
    }

    ///

    fn find_rocket(&self) -> Option<Shape> {
        (self.0.size() == 2 && self.0.has_rocket()).then_some(Shape::Rocket)
    }
    fn find_bomb(&self) -> Option<Shape> {
        match (self.0.fours(), self.0.size()) {
            ([four], 4) => Some(Shape::Bomb(*four)),
            _ => None,
        }
    }
    fn find_four_with_kickers(&self) -> Option<Shape> {
        match (self.0.fours(), self.0.size()) {
            ([four], 6) if self.0.singles().len() == 2 || self.0.pairs().len() == 1 => {
                Some(Shape::FourWithTwo(*four))
            }
            ([four], 8) if self.0.pairs().len() == 2 => Some(Shape::FourWithTwoPairs(*four)),
            _ => None,
        }
    }
    fn find_trio_with_kicker(&self) -> Option<Shape> {
        match (self.0.trios(), self.0.size()) {
            ([trio], 4) if self.0.singles().len() == 1 => Some(Shape::TrioWithSingle(*trio)),
            ([trio], 5) if self.0.pairs().len() == 1 => Some(Shape::TrioWithPair(*trio)),
            _ => None,
        }
    }
    fn find_plane(&self) -> Option<Shape> {
        let trios = self.0.trios();
        let n = trios.len();
        if n < 2 || !Rank::is_run(trios) {
            return None;
        }
        let key = trios[0];
        match self.0.size() {
            size if size == n * 3 => Some(Shape::Plane(key, n)),
            size if size == n * 4 && self.0.singles().len() == n => {
                Some(Shape::PlaneWithSingles(key, n))
            }
            size if size == n * 5 && self.0.pairs().len() == n => {
                Some(Shape::PlaneWithPairs(key, n))
            }
            _ => None,
        }
    }
    fn find_straight(&self) -> Option<Shape> {
        let singles = self.0.singles();
        let n = singles.len();
        (n >= 5 && n == self.0.size() && Rank::is_run(singles))
            .then(|| Shape::Straight(singles[0], n))
    }
    fn find_pair_straight(&self) -> Option<Shape> {
        let pairs = self.0.pairs();
        let n = pairs.len();
        (n >= 3 && n * 2 == self.0.size() && Rank::is_run(pairs))
            .then(|| Shape::PairStraight(pairs[0], n))
    }
    fn find_uniform(&self) -> Option<Shape> {
        if self.0.distinct() != 1 {
            return None;
        }
        let rank = self.0.ranks()[0];
        match self.0.size() {
            1 => Some(Shape::Single(rank)),
            2 => Some(Shape::Pair(rank)),
            3 => Some(Shape::Trio(rank)),
            _ => None,
        }
    }
}
