use super::card::Card;
use super::rank::Rank;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("unrecognized card token: {0}")]
    UnknownToken(char),
    #[error("not enough cards of rank {0}")]
    InsufficientRank(Rank),
    #[error("both jokers are needed to play a rocket")]
    MissingRocket,
}

/// A player's request for cards, written as a rank string.
///
/// One character per card: `3`..`9`, `T` (or `10`), `J`, `Q`, `K`, `A`,
/// `2`, `B` for the black joker and `R` for the red. The words `JOKER`,
/// `BR` and `RB` ask for the rocket. Case and whitespace do not matter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Rocket,
    Ranks([usize; 15]),
}

impl Selection {
    /// Picks the requested cards out of `hand`.
    ///
    /// Every rank is checked before anything is taken, so a failed request
    /// never yields a partial selection. Within a rank, cards are taken from
    /// the end of the hand first.
    pub fn take(&self, hand: &[Card]) -> Result<Vec<Card>, SelectionError> {
        match self {
            Self::Rocket => {
                let black = hand.iter().find(|c| c.rank() == Rank::BlackJoker);
                let red = hand.iter().find(|c| c.rank() == Rank::RedJoker);
                match (black, red) {
                    (Some(b), Some(r)) => Ok(vec![*b, *r]),
                    _ => Err(SelectionError::MissingRocket),
                }
            }
            Self::Ranks(wanted) => {
                let held = hand.iter().fold([0usize; 15], |mut held, card| {
                    held[u8::from(card.rank()) as usize] += 1;
                    held
                });
                if let Some(short) = Rank::ALL
                    .into_iter()
                    .find(|r| wanted[u8::from(*r) as usize] > held[u8::from(*r) as usize])
                {
                    return Err(SelectionError::InsufficientRank(short));
                }
                Ok(Rank::ALL
                    .into_iter()
                    .flat_map(|rank| {
                        hand.iter()
                            .rev()
                            .filter(move |c| c.rank() == rank)
                            .take(wanted[u8::from(rank) as usize])
                            .copied()
                    })
                    .collect())
            }
        }
    }
}

impl TryFrom<&str> for Selection {
    type Error = SelectionError;
    fn try_from(token: &str) -> Result<Self, Self::Error> {
        let token = token
            .replace(char::is_whitespace, "")
            .to_ascii_uppercase()
            .replace("10", "T");
        match token.as_str() {
            "JOKER" | "BR" | "RB" => Ok(Self::Rocket),
            ranks => ranks
                .chars()
                .try_fold([0usize; 15], |mut counts, c| {
                    let rank = Rank::try_from(c).map_err(SelectionError::UnknownToken)?;
                    counts[u8::from(rank) as usize] += 1;
                    Ok(counts)
                })
                .map(Self::Ranks),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::hand::Hand;

    fn hand(s: &str) -> Hand {
        Hand::try_from(s).unwrap()
    }

    #[test]
    fn picks_requested_ranks() {
        let held = hand("3s 3h 3d 4c 9h Td");
        let picked = held.select("3334").unwrap();
        assert_eq!(picked, Card::parse("3d 3h 3s 4c").unwrap());
    }

    #[test]
    fn takes_from_end_of_hand() {
        let held = hand("5s 5h 5d");
        assert_eq!(held.select("5").unwrap(), Card::parse("5d").unwrap());
        assert_eq!(held.select("55").unwrap(), Card::parse("5d 5h").unwrap());
    }

    #[test]
    fn ten_spelled_out() {
        let held = hand("Ts Th Jd");
        assert_eq!(held.select("10 10 j").unwrap(), held.select("TTJ").unwrap());
        assert_eq!(held.select("1"), Err(SelectionError::UnknownToken('1')));
    }

    #[test]
    fn rocket_words() {
        let held = hand("RJ 3s BJ");
        let rocket = Card::parse("BJ RJ").unwrap();
        assert_eq!(held.select("JOKER").unwrap(), rocket);
        assert_eq!(held.select("joker").unwrap(), rocket);
        assert_eq!(held.select("BR").unwrap(), rocket);
        assert_eq!(held.select("rb").unwrap(), rocket);
        assert_eq!(held.select("B").unwrap(), Card::parse("BJ").unwrap());
    }

    #[test]
    fn rocket_needs_both_jokers() {
        let held = hand("3s BJ");
        assert_eq!(held.select("JOKER"), Err(SelectionError::MissingRocket));
        assert_eq!(held.select("BR"), Err(SelectionError::MissingRocket));
    }

    #[test]
    fn unknown_tokens() {
        let held = hand("3s 4s");
        assert_eq!(held.select("3X"), Err(SelectionError::UnknownToken('X')));
        assert_eq!(held.select("Z9Y"), Err(SelectionError::UnknownToken('Z')));
    }

    #[test]
    fn insufficient_ranks() {
        let held = hand("3s 3h 4s");
        assert_eq!(
            held.select("333"),
            Err(SelectionError::InsufficientRank(Rank::Three))
        );
        assert_eq!(
            held.select("4455"),
            Err(SelectionError::InsufficientRank(Rank::Four))
        );
    }

    #[test]
    fn empty_request() {
        assert_eq!(hand("3s").select("  ").unwrap(), Vec::<Card>::new());
    }
}
