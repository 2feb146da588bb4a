//! Command line referee for Fight-the-Landlord plays.
//!
//! Cards are named by rank tokens (`3334`, `10JQKA`, `JOKER`) and drawn
//! from a fresh 54-card deck, so suits never need to be typed.

use anyhow::Context;
use clap::Parser;
use clap::Subcommand;
use landlord::cards::card::Card;
use landlord::cards::deck::Deck;
use landlord::cards::hand::Hand;
use landlord::rules::combo::Combo;
use landlord::rules::search::Search;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Referee {
    #[arg(short, long, action = clap::ArgAction::Count, help = "Log more, up to -vvv")]
    verbose: u8,
    #[arg(long, help = "Print results as JSON")]
    json: bool,
    #[command(subcommand)]
    call: Call,
}

#[derive(Subcommand)]
enum Call {
    #[command(about = "Name the combination a set of cards forms", alias = "cls")]
    Classify {
        #[arg(required = true)]
        token: String,
    },
    #[command(about = "Decide whether one play beats another", alias = "cmp")]
    Beats {
        #[arg(required = true)]
        candidate: String,
        #[arg(required = true)]
        reference: String,
    },
    #[command(
        about = "Decide whether a hand can answer a play, or lead when none is given",
        alias = "ans"
    )]
    Answer {
        #[arg(required = true)]
        hand: String,
        reference: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let referee = Referee::parse();
    landlord::logs(match referee.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    })?;
    match referee.call {
        Call::Classify { token } => {
            let combo = play(&token)?;
            log::info!("{:<32}{}", token, combo.shape());
            match referee.json {
                true => println!("{}", serde_json::to_string(&combo)?),
                false => println!("{}", combo),
            }
        }
        Call::Beats {
            candidate,
            reference,
        } => {
            let candidate = play(&candidate)?;
            let reference = play(&reference)?;
            let verdict = landlord::beats(&candidate, &reference);
            match referee.json {
                true => println!(
                    "{}",
                    serde_json::json!({
                        "candidate": candidate,
                        "reference": reference,
                        "beats": verdict,
                    })
                ),
                false => println!(
                    "{}\n{}\n{}",
                    candidate,
                    reference,
                    if verdict { "beats" } else { "does not beat" }
                ),
            }
        }
        Call::Answer { hand, reference } => {
            let held = cards(&hand)?;
            let mut fanned = Hand::from(held.as_slice());
            fanned.sort();
            let reference = reference.as_deref().map(play).transpose()?;
            let shape = reference.as_ref().map(Combo::shape);
            let witness = shape.map(|s| Search::from(held.as_slice()).answer(&s));
            let verdict = landlord::has_answer(&held, reference.as_ref());
            match referee.json {
                true => println!(
                    "{}",
                    serde_json::json!({
                        "hand": held,
                        "reference": reference,
                        "answer": witness.flatten(),
                        "answers": verdict,
                    })
                ),
                false => println!(
                    "{}\n{}",
                    fanned,
                    match (shape, witness.flatten()) {
                        (None, _) => String::from("free to lead"),
                        (Some(_), Some(answer)) => format!("answers with {}", answer),
                        (Some(_), None) => String::from("must pass"),
                    }
                ),
            }
        }
    }
    Ok(())
}

/// cards for a rank token, drawn from a fresh deck
fn cards(token: &str) -> anyhow::Result<Vec<Card>> {
    landlord::select_by_token(&Deck::new().collect::<Vec<Card>>(), token)
        .with_context(|| format!("resolving {:?}", token))
}

fn play(token: &str) -> anyhow::Result<Combo> {
    landlord::classify(&cards(token)?).with_context(|| format!("classifying {:?}", token))
}
