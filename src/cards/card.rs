use super::rank::Rank;
use super::suit::Color;
use super::suit::Suit;

/// A playing card encoded as a single byte.
///
/// The 52 suited cards map to `rank * 4 + suit`, the black joker to 52 and
/// the red joker to 53. Sorting cards therefore sorts them by strength first,
/// then by suit within a rank.
///
/// Identity is rank plus suit: two cards compare equal exactly when both
/// match, which is what hand bookkeeping relies on.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct Card(u8);

impl Card {
    const BLACK_JOKER: u8 = 52;
    const RED_JOKER: u8 = 53;

    pub const fn n_cards() -> usize {
        54
    }

    pub fn rank(&self) -> Rank {
        match self.0 {
            Self::BLACK_JOKER => Rank::BlackJoker,
            Self::RED_JOKER => Rank::RedJoker,
            n => Rank::from(n / 4),
        }
    }
    /// Jokers carry no suit.
    pub fn suit(&self) -> Option<Suit> {
        match self.0 {
            Self::BLACK_JOKER | Self::RED_JOKER => None,
            n => Some(Suit::from(n % 4)),
        }
    }
    pub fn color(&self) -> Color {
        match (self.suit(), self.rank()) {
            (Some(suit), _) => suit.color(),
            (None, Rank::RedJoker) => Color::Red,
            (None, _) => Color::Black,
        }
    }

    /// Parses concatenated two-character cards, e.g. `"3s 3h Td BJ"`.
    ///
    /// Whitespace is ignored. Returns an error if any card fails to parse.
    pub fn parse(s: &str) -> Result<Vec<Self>, String> {
        s.replace(char::is_whitespace, "")
            .chars()
            .collect::<Vec<_>>()
            .chunks(2)
            .map(|pair| pair.iter().collect::<String>())
            .map(|pair| Self::try_from(pair.as_str()))
            .collect::<Result<Vec<Self>, _>>()
    }
}

/// (Rank, Suit) isomorphism
/// jokers ignore the suit
impl From<(Rank, Suit)> for Card {
    fn from((r, s): (Rank, Suit)) -> Self {
        match r {
            Rank::BlackJoker => Self(Self::BLACK_JOKER),
            Rank::RedJoker => Self(Self::RED_JOKER),
            r => Self(u8::from(r) * 4 + u8::from(s)),
        }
    }
}

/// u8 isomorphism
/// each card is mapped to its location in a sorted deck 0..54
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}
impl TryFrom<u8> for Card {
    type Error = String;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match (n as usize) < Self::n_cards() {
            true => Ok(Self(n)),
            false => Err(format!("invalid card u8: {}", n)),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.suit() {
            Some(suit) => write!(f, "{}{}", self.rank(), suit),
            None => write!(f, "{}J", self.rank()),
        }
    }
}

/// str isomorphism
impl TryFrom<&str> for Card {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let chars = s.trim().chars().collect::<Vec<char>>();
        match chars.as_slice() {
            [r, j] if j.eq_ignore_ascii_case(&'J') && matches!(r.to_ascii_uppercase(), 'B' | 'R') => {
                let rank = Rank::try_from(*r).map_err(|c| format!("invalid rank char: {}", c))?;
                Ok(Card::from((rank, Suit::default())))
            }
            [r, s] => {
                let rank = Rank::try_from(*r).map_err(|c| format!("invalid rank char: {}", c))?;
                let suit = Suit::try_from(*s)?;
                match rank.is_joker() {
                    true => Err(format!("jokers are written {}J", rank)),
                    false => Ok(Card::from((rank, suit))),
                }
            }
            _ => Err(format!("expected 2 characters: {}", s)),
        }
    }
}
