// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand rank CLI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use ahash::AHashSet;
use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use log::error;

use handrank_eval::{Card, HandValue, parse_cards, showdown};

mod sample;

#[derive(Debug, Parser)]
#[clap(version, about)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluates a hand with the board cards.
    Eval {
        /// The player cards, e.g. "Ac Kc".
        #[clap(long)]
        hand: String,
        /// The board cards, e.g. "Qc Jc Tc 7h 2d".
        #[clap(long, short, default_value = "")]
        board: String,
    },
    /// Compares hands that share the same board and prints the winners.
    Showdown {
        /// The board cards.
        #[clap(long, short)]
        board: String,
        /// A player cards, repeat for each player.
        #[clap(long = "hand", required = true)]
        hands: Vec<String>,
    },
    /// Evaluates random pools and counts each hand rank.
    Sample {
        /// Number of pools to evaluate.
        #[clap(long, default_value_t = 100_000)]
        hands: usize,
        /// Number of cards in each pool.
        #[clap(long, default_value_t = 7, value_parser = clap::value_parser!(u8).range(5..=9))]
        cards: u8,
        /// Number of parallel tasks.
        #[clap(long, default_value_t = 4, value_parser = clap::value_parser!(u16).range(1..=64))]
        tasks: u16,
        /// The random generator seed.
        #[clap(long)]
        seed: Option<u64>,
    },
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli.command) {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Eval { hand, board } => {
            let pool = make_pools(&board, &[hand])?.remove(0);
            let hv = HandValue::eval(&pool)?;
            println!("{}: {}", hv.rank(), cards_to_string(&hv.cards()));
            println!("{hv}");
        }
        Command::Showdown { board, hands } => {
            let pools = make_pools(&board, &hands)?;
            let values = pools
                .iter()
                .map(|pool| HandValue::eval(pool))
                .collect::<Result<Vec<_>, _>>()?;

            for (idx, (hand, hv)) in hands.iter().zip(&values).enumerate() {
                println!(
                    "Hand {} [{}] {}: {}",
                    idx + 1,
                    hand.trim(),
                    hv.rank(),
                    cards_to_string(&hv.cards())
                );
                println!("    {hv}");
            }

            match showdown(&values).as_slice() {
                [winner] => println!("Hand {} wins", winner + 1),
                winners => {
                    let winners = winners
                        .iter()
                        .map(|idx| (idx + 1).to_string())
                        .collect::<Vec<_>>();
                    println!("Split pot between hands {}", winners.join(", "));
                }
            }
        }
        Command::Sample {
            hands,
            cards,
            tasks,
            seed,
        } => {
            let config = sample::Config {
                hands,
                cards: cards as usize,
                tasks: tasks as usize,
                seed,
            };

            let report = sample::run(&config)?;
            print!("{report}");
        }
    }

    Ok(())
}

/// Parses the board and each hand and returns a pool for each hand.
///
/// Fails if a card appears more than once.
fn make_pools(board: &str, hands: &[String]) -> Result<Vec<Vec<Card>>> {
    let board = parse_cards(board)?;
    let mut seen = board.iter().copied().collect::<AHashSet<_>>();
    if seen.len() != board.len() {
        bail!("The board has duplicate cards");
    }

    if board.len() > 5 {
        bail!("The board has {} cards, expected at most 5", board.len());
    }

    let mut pools = Vec::with_capacity(hands.len());
    for hand in hands {
        let mut pool = parse_cards(hand)?;
        for card in &pool {
            if !seen.insert(*card) {
                bail!("Card {card} is dealt more than once");
            }
        }

        pool.extend_from_slice(&board);
        pools.push(pool);
    }

    Ok(pools)
}

fn cards_to_string(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
