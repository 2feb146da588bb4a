use crate::cards::rank::Rank;

/// A recognized card combination.
///
/// The rank payload is the key rank: the repeated unit of a single, pair,
/// trio or bomb, or the lowest rank of a run. Run-based shapes also carry
/// their length, counted in ranks rather than cards, so `Plane(Five, 2)`
/// is 555666 and `PairStraight(Nine, 3)` is 99TTJJ.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Shape {
    Single(Rank),
    Pair(Rank),
    Trio(Rank),
    TrioWithSingle(Rank),
    TrioWithPair(Rank),
    Straight(Rank, usize),
    PairStraight(Rank, usize),
    Plane(Rank, usize),
    PlaneWithSingles(Rank, usize),
    PlaneWithPairs(Rank, usize),
    Bomb(Rank),
    FourWithTwo(Rank),
    FourWithTwoPairs(Rank),
    Rocket,
}

impl Shape {
    pub fn key(&self) -> Rank {
        match *self {
            Shape::Single(r)
            | Shape::Pair(r)
            | Shape::Trio(r)
            | Shape::TrioWithSingle(r)
            | Shape::TrioWithPair(r)
            | Shape::Bomb(r)
            | Shape::FourWithTwo(r)
            | Shape::FourWithTwoPairs(r)
            | Shape::Straight(r, _)
            | Shape::PairStraight(r, _)
            | Shape::Plane(r, _)
            | Shape::PlaneWithSingles(r, _)
            | Shape::PlaneWithPairs(r, _) => r,
            Shape::Rocket => Rank::RedJoker,
        }
    }

    /// run length of the variable shapes, zero for the rest
    pub fn length(&self) -> usize {
        match *self {
            Shape::Straight(_, n)
            | Shape::PairStraight(_, n)
            | Shape::Plane(_, n)
            | Shape::PlaneWithSingles(_, n)
            | Shape::PlaneWithPairs(_, n) => n,
            Shape::Single(_)
            | Shape::Pair(_)
            | Shape::Trio(_)
            | Shape::TrioWithSingle(_)
            | Shape::TrioWithPair(_)
            | Shape::Bomb(_)
            | Shape::FourWithTwo(_)
            | Shape::FourWithTwoPairs(_)
            | Shape::Rocket => 0,
        }
    }

    /// how many cards a play of this shape consumes
    pub fn n_cards(&self) -> usize {
        match *self {
            Shape::Single(_) => 1,
            Shape::Pair(_) | Shape::Rocket => 2,
            Shape::Trio(_) => 3,
            Shape::TrioWithSingle(_) | Shape::Bomb(_) => 4,
            Shape::TrioWithPair(_) => 5,
            Shape::FourWithTwo(_) => 6,
            Shape::FourWithTwoPairs(_) => 8,
            Shape::Straight(_, n) => n,
            Shape::PairStraight(_, n) => n * 2,
            Shape::Plane(_, n) => n * 3,
            Shape::PlaneWithSingles(_, n) => n * 4,
            Shape::PlaneWithPairs(_, n) => n * 5,
        }
    }

    /// Whether playing `self` over `other` is legal.
    ///
    /// The rocket beats everything, a bomb beats anything but a higher bomb
    /// or the rocket, and otherwise shapes must match in type (and length,
    /// for runs) with a strictly higher key rank.
    pub fn beats(&self, other: &Self) -> bool {
        match (*self, *other) {
            (Shape::Rocket, _) => true,
            (_, Shape::Rocket) => false,
            (Shape::Bomb(a), Shape::Bomb(b)) => a > b,
            (Shape::Bomb(_), _) => true,
            (Shape::Single(a), Shape::Single(b))
            | (Shape::Pair(a), Shape::Pair(b))
            | (Shape::Trio(a), Shape::Trio(b))
            | (Shape::TrioWithSingle(a), Shape::TrioWithSingle(b))
            | (Shape::TrioWithPair(a), Shape::TrioWithPair(b))
            | (Shape::FourWithTwo(a), Shape::FourWithTwo(b))
            | (Shape::FourWithTwoPairs(a), Shape::FourWithTwoPairs(b)) => a > b,
            (Shape::Straight(a, m), Shape::Straight(b, n))
            | (Shape::PairStraight(a, m), Shape::PairStraight(b, n))
            | (Shape::Plane(a, m), Shape::Plane(b, n))
            | (Shape::PlaneWithSingles(a, m), Shape::PlaneWithSingles(b, n))
            | (Shape::PlaneWithPairs(a, m), Shape::PlaneWithPairs(b, n)) => m == n && a > b,
            _ => false,
        }
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Shape::Single(r) => write!(f, "Single           {}", r),
            Shape::Pair(r) => write!(f, "Pair             {}", r),
            Shape::Trio(r) => write!(f, "Trio             {}", r),
            Shape::TrioWithSingle(r) => write!(f, "TrioWithSingle   {}", r),
            Shape::TrioWithPair(r) => write!(f, "TrioWithPair     {}", r),
            Shape::Straight(r, n) => write!(f, "Straight         {}x{}", r, n),
            Shape::PairStraight(r, n) => write!(f, "PairStraight     {}x{}", r, n),
            Shape::Plane(r, n) => write!(f, "Plane            {}x{}", r, n),
            Shape::PlaneWithSingles(r, n) => write!(f, "PlaneWithSingles {}x{}", r, n),
            Shape::PlaneWithPairs(r, n) => write!(f, "PlaneWithPairs   {}x{}", r, n),
            Shape::Bomb(r) => write!(f, "Bomb             {}", r),
            Shape::FourWithTwo(r) => write!(f, "FourWithTwo      {}", r),
            Shape::FourWithTwoPairs(r) => write!(f, "FourWithTwoPairs {}", r),
            Shape::Rocket => write!(f, "Rocket           BR"),
        }
    }
}
