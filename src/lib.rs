pub mod cards;
pub mod rules;

use cards::card::Card;
use cards::hand::Hand;
use cards::selection::Selection;
use cards::selection::SelectionError;
use rules::combo::Combo;
use rules::error::ShapeError;
use rules::search::Search;

/// Classify cards into the one combination they form.
pub fn classify(cards: &[Card]) -> Result<Combo, ShapeError> {
    Combo::try_from(cards)
}

/// Whether `candidate` may be played over `reference`.
pub fn beats(candidate: &Combo, reference: &Combo) -> bool {
    candidate.beats(reference)
}

/// Whether some legal play inside `hand` beats `reference`.
/// A `None` reference opens a fresh round, which any hand may lead.
pub fn has_answer(hand: &[Card], reference: Option<&Combo>) -> bool {
    match reference {
        None => true,
        Some(reference) => Search::from(hand).answers(&reference.shape()),
    }
}

/// Resolve a rank token such as `"33344"`, `"10JQKA"` or `"JOKER"` into cards of `hand`.
pub fn select_by_token(hand: &[Card], token: &str) -> Result<Vec<Card>, SelectionError> {
    Selection::try_from(token)?.take(hand)
}

/// Drop one card of `hand` per entry of `removed`, keeping the rest in order.
pub fn remove_cards(hand: &[Card], removed: &[Card]) -> Vec<Card> {
    Hand::from(hand).without(removed).into()
}

/// Initialize terminal logging at the given level.
#[cfg(feature = "cli")]
pub fn logs(level: log::LevelFilter) -> Result<(), log::SetLoggerError> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::deck::Deck;
    use crate::cards::rank::Rank;
    use crate::rules::shape::Shape;

    fn deck() -> Vec<Card> {
        Deck::new().collect()
    }
    fn play(token: &str) -> Combo {
        classify(&select_by_token(&deck(), token).unwrap()).unwrap()
    }

    #[test]
    fn scenarios() {
        assert_eq!(play("3334").shape(), Shape::TrioWithSingle(Rank::Three));
        assert_eq!(play("556677").shape(), Shape::PairStraight(Rank::Five, 3));
        assert!(beats(&play("4444"), &play("KK")));
        assert!(!beats(&play("3333"), &play("4444")));
        let kings = select_by_token(&deck(), "KKK").unwrap();
        let kings_and_three = select_by_token(&deck(), "KKK3").unwrap();
        let reference = play("QQQ5");
        assert_eq!(reference.shape(), Shape::TrioWithSingle(Rank::Queen));
        assert!(!has_answer(&kings, Some(&reference)));
        assert!(has_answer(&kings_and_three, Some(&reference)));
    }

    #[test]
    fn fresh_round() {
        assert!(has_answer(&[], None));
        assert!(!has_answer(&[], Some(&play("3"))));
    }

    #[test]
    fn rocket_selection() {
        let full = deck();
        let rocket = select_by_token(&full, "JOKER").unwrap();
        assert_eq!(classify(&rocket).map(|c| c.shape()), Ok(Shape::Rocket));
        let without_red = remove_cards(&full, &Card::parse("RJ").unwrap());
        assert_eq!(
            select_by_token(&without_red, "JOKER"),
            Err(SelectionError::MissingRocket)
        );
    }

    #[test]
    fn play_out_a_hand() {
        let mut hand = select_by_token(&deck(), "333456789TJ").unwrap();
        let played = select_by_token(&hand, "3334").unwrap();
        hand = remove_cards(&hand, &played);
        assert_eq!(hand.len(), 7);
        let straight = classify(&hand).unwrap();
        assert_eq!(straight.shape(), Shape::Straight(Rank::Five, 7));
        assert!(!has_answer(&hand, Some(&straight)));
        assert!(!has_answer(&hand, Some(&play("44"))));
        assert!(has_answer(&hand, Some(&play("4"))));
    }

    #[test]
    fn remove_is_multiset_difference() {
        let hand = Card::parse("3s 3h 4d").unwrap();
        let left = remove_cards(&hand, &Card::parse("3h 3h 9c").unwrap());
        assert_eq!(left, Card::parse("3s 4d").unwrap());
    }
}
