/// A card's rank in strength order.
///
/// Fight-the-Landlord ranks run 3 through Ace, then Two, then the two jokers.
/// The discriminant doubles as the strength, so the derived `Ord` is the
/// game's ordering.
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rank {
    #[default]
    Three = 0,
    Four = 1,
    Five = 2,
    Six = 3,
    Seven = 4,
    Eight = 5,
    Nine = 6,
    Ten = 7,
    Jack = 8,
    Queen = 9,
    King = 10,
    Ace = 11,
    Two = 12,
    BlackJoker = 13,
    RedJoker = 14,
}

impl Rank {
    pub const ALL: [Rank; 15] = [
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
        Rank::Two,
        Rank::BlackJoker,
        Rank::RedJoker,
    ];

    pub const fn is_joker(&self) -> bool {
        matches!(self, Rank::BlackJoker | Rank::RedJoker)
    }

    /// Two and the jokers never take part in straights, pair straights or planes.
    pub fn is_sequential(&self) -> bool {
        *self < Rank::Two
    }

    /// Whether `ranks` form a contiguous run: non-empty, ascending by
    /// exactly one, and entirely below Two. A single rank is a run.
    pub fn is_run(ranks: &[Rank]) -> bool {
        !ranks.is_empty()
            && ranks.iter().all(Rank::is_sequential)
            && ranks
                .windows(2)
                .all(|w| u8::from(w[0]) + 1 == u8::from(w[1]))
    }
}

/// u8 isomorphism
impl From<u8> for Rank {
    fn from(n: u8) -> Rank {
        match n {
            0 => Rank::Three,
            1 => Rank::Four,
            2 => Rank::Five,
            3 => Rank::Six,
            4 => Rank::Seven,
            5 => Rank::Eight,
            6 => Rank::Nine,
            7 => Rank::Ten,
            8 => Rank::Jack,
            9 => Rank::Queen,
            10 => Rank::King,
            11 => Rank::Ace,
            12 => Rank::Two,
            13 => Rank::BlackJoker,
            14 => Rank::RedJoker,
            _ => panic!("Invalid rank u8: {}", n),
        }
    }
}
impl From<Rank> for u8 {
    fn from(r: Rank) -> u8 {
        r as u8
    }
}

/// char isomorphism over the token alphabet
impl TryFrom<char> for Rank {
    type Error = char;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            '3' => Ok(Rank::Three),
            '4' => Ok(Rank::Four),
            '5' => Ok(Rank::Five),
            '6' => Ok(Rank::Six),
            '7' => Ok(Rank::Seven),
            '8' => Ok(Rank::Eight),
            '9' => Ok(Rank::Nine),
            'T' => Ok(Rank::Ten),
            'J' => Ok(Rank::Jack),
            'Q' => Ok(Rank::Queen),
            'K' => Ok(Rank::King),
            'A' => Ok(Rank::Ace),
            '2' => Ok(Rank::Two),
            'B' => Ok(Rank::BlackJoker),
            'R' => Ok(Rank::RedJoker),
            _ => Err(c),
        }
    }
}
impl From<Rank> for char {
    fn from(r: Rank) -> char {
        match r {
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
            Rank::Two => '2',
            Rank::BlackJoker => 'B',
            Rank::RedJoker => 'R',
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", char::from(*self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        for rank in Rank::ALL {
            assert!(rank == Rank::from(u8::from(rank)));
        }
    }

    #[test]
    fn bijective_char() {
        for rank in Rank::ALL {
            assert_eq!(Rank::try_from(char::from(rank)), Ok(rank));
        }
        assert_eq!(Rank::try_from('t'), Ok(Rank::Ten));
        assert_eq!(Rank::try_from('X'), Err('X'));
    }

    #[test]
    fn strength_order() {
        assert!(Rank::Ace < Rank::Two);
        assert!(Rank::Two < Rank::BlackJoker);
        assert!(Rank::BlackJoker < Rank::RedJoker);
        assert!(Rank::ALL.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn runs() {
        use Rank::*;
        assert!(Rank::is_run(&[Three, Four, Five, Six, Seven]));
        assert!(Rank::is_run(&[Jack, Queen, King]));
        assert!(Rank::is_run(&[Five]));
        assert!(!Rank::is_run(&[]));
        assert!(!Rank::is_run(&[Three, Four, Six]));
        assert!(!Rank::is_run(&[Ace, Two]));
        assert!(!Rank::is_run(&[King, Ace, BlackJoker]));
        assert!(!Rank::is_run(&[Two]));
    }
}
