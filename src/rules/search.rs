use super::analysis::Analysis;
use super::shape::Shape;
use crate::cards::card::Card;
use crate::cards::rank::Rank;

/// What a trio or plane has to carry alongside its body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kicker {
    Bare,
    Single,
    Pair,
}

/// Decides whether a hand holds any play that beats a reference shape.
///
/// Nothing is enumerated: each reference shape has a finder that reasons
/// over rank counts alone. Kickers are counted exactly. A trio or plane
/// body of length L with single kickers needs L distinct ranks outside the
/// body; with pair kickers it needs L outside ranks held at least twice.
pub struct Search(Analysis);

impl From<&[Card]> for Search {
    fn from(cards: &[Card]) -> Self {
        Self(Analysis::from(cards))
    }
}

impl Search {
    /// Some shape from the hand that beats `reference`, if one exists.
    ///
    /// The rocket and bombs are tried first since they answer almost
    /// anything. The returned shape is a witness, not necessarily the
    /// cheapest play.
    pub fn answer(&self, reference: &Shape) -> Option<Shape> {
        let answer = None
            .or_else(|| self.find_rocket())
            .or_else(|| self.find_bomb(reference))
            .or_else(|| self.find_match(reference));
        match answer {
            Some(shape) => log::debug!("{:<32}{}", reference, shape),
            None => log::debug!("{:<32}pass", reference),
        }
        answer
    }
    pub fn answers(&self, reference: &Shape) -> bool {
        self.answer(reference).is_some()
    }

    ///

    fn find_rocket(&self) -> Option<Shape> {
        self.0.has_rocket().then_some(Shape::Rocket)
    }
    fn find_bomb(&self, reference: &Shape) -> Option<Shape> {
        self.0
            .at_least(4)
            .into_iter()
            .map(Shape::Bomb)
            .find(|bomb| bomb.beats(reference))
    }
    fn find_match(&self, reference: &Shape) -> Option<Shape> {
        match *reference {
            Shape::Rocket | Shape::Bomb(_) => None,
            // any hand able to form these also holds a bomb
            Shape::FourWithTwo(_) | Shape::FourWithTwoPairs(_) => None,
            Shape::Single(key) => self.find_above(key, 1).map(Shape::Single),
            Shape::Pair(key) => self.find_above(key, 2).map(Shape::Pair),
            Shape::Trio(key) => self.find_trio(key, Kicker::Bare).map(Shape::Trio),
            Shape::TrioWithSingle(key) => self
                .find_trio(key, Kicker::Single)
                .map(Shape::TrioWithSingle),
            Shape::TrioWithPair(key) => self.find_trio(key, Kicker::Pair).map(Shape::TrioWithPair),
            Shape::Straight(key, n) => self.find_run(key, n, 1).map(|r| Shape::Straight(r, n)),
            Shape::PairStraight(key, n) => self
                .find_run(key, n, 2)
                .map(|r| Shape::PairStraight(r, n)),
            Shape::Plane(key, n) => self
                .find_plane(key, n, Kicker::Bare)
                .map(|r| Shape::Plane(r, n)),
            Shape::PlaneWithSingles(key, n) => self
                .find_plane(key, n, Kicker::Single)
                .map(|r| Shape::PlaneWithSingles(r, n)),
            Shape::PlaneWithPairs(key, n) => self
                .find_plane(key, n, Kicker::Pair)
                .map(|r| Shape::PlaneWithPairs(r, n)),
        }
    }

    /// lowest rank above `key` held at least `n` times
    fn find_above(&self, key: Rank, n: usize) -> Option<Rank> {
        self.0.at_least(n).into_iter().find(|r| *r > key)
    }
    fn find_trio(&self, key: Rank, kicker: Kicker) -> Option<Rank> {
        self.0
            .at_least(3)
            .into_iter()
            .filter(|r| *r > key)
            .find(|r| self.has_kickers(&[*r], kicker))
    }
    fn find_run(&self, key: Rank, length: usize, width: usize) -> Option<Rank> {
        self.runs(length, width)
            .into_iter()
            .map(|run| run[0])
            .find(|r| *r > key)
    }
    fn find_plane(&self, key: Rank, length: usize, kicker: Kicker) -> Option<Rank> {
        self.runs(length, 3)
            .into_iter()
            .filter(|run| run[0] > key)
            .find(|run| self.has_kickers(run, kicker))
            .map(|run| run[0])
    }

    /// every run of `length` consecutive ranks, each held at least `width` times
    fn runs(&self, length: usize, width: usize) -> Vec<Vec<Rank>> {
        let ranks = self
            .0
            .at_least(width)
            .into_iter()
            .filter(Rank::is_sequential)
            .collect::<Vec<Rank>>();
        match length {
            0 => Vec::new(),
            n => ranks
                .windows(n)
                .filter(|w| Rank::is_run(w))
                .map(|w| w.to_vec())
                .collect(),
        }
    }
    /// one kicker per rank in `body`, each from a distinct rank outside it
    fn has_kickers(&self, body: &[Rank], kicker: Kicker) -> bool {
        let spare = |width: usize| {
            self.0
                .at_least(width)
                .into_iter()
                .filter(|r| !body.contains(r))
                .count()
        };
        match kicker {
            Kicker::Bare => true,
            Kicker::Single => spare(1) >= body.len(),
            Kicker::Pair => spare(2) >= body.len(),
        }
    }
}
