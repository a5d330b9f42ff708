// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Random pools sampling.
use anyhow::Result;
use log::info;
use rand::{SeedableRng, rngs::StdRng};
use std::{fmt, time::Instant};

use handrank_eval::{Deck, HandRank, par_eval};

/// Sampling configuration.
#[derive(Debug)]
pub struct Config {
    /// Number of pools to evaluate.
    pub hands: usize,
    /// Number of cards in each pool.
    pub cards: usize,
    /// Number of parallel tasks.
    pub tasks: usize,
    /// The random generator seed, a random one if none.
    pub seed: Option<u64>,
}

/// Hand ranks counts for the sampled pools.
#[derive(Debug)]
pub struct Report {
    counts: [u64; 9],
    elapsed: f64,
}

impl Report {
    /// Number of pools with the given rank.
    pub fn count(&self, rank: HandRank) -> u64 {
        self.counts[rank.value() as usize - 1]
    }

    /// Number of evaluated pools.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.total();
        writeln!(f, "Total hands      {total}")?;
        writeln!(f, "Elapsed:         {:.3}s", self.elapsed)?;
        writeln!(f, "Hands/sec:       {:.0}\n", total as f64 / self.elapsed)?;

        for rank in HandRank::ranks() {
            let count = self.count(rank);
            let pct = 100.0 * count as f64 / total.max(1) as f64;
            writeln!(f, "{:<17}{count:<10} {pct:6.3}%", format!("{rank}:"))?;
        }

        Ok(())
    }
}

/// Samples random pools from a full deck and counts their ranks.
pub fn run(config: &Config) -> Result<Report> {
    let seed = config.seed.unwrap_or_else(rand::random);
    info!(
        "Sampling {} pools of {} cards with seed {seed}",
        config.hands, config.cards
    );

    let mut rng = StdRng::seed_from_u64(seed);
    let deck = Deck::default();
    let pools = (0..config.hands)
        .map(|_| deck.sample(&mut rng, config.cards))
        .collect::<Vec<_>>();

    let now = Instant::now();
    let values = par_eval(&pools, config.tasks)?;
    let elapsed = now.elapsed().as_secs_f64();

    let mut counts = [0; 9];
    for hv in &values {
        counts[hv.rank().value() as usize - 1] += 1;
    }

    info!("Evaluated {} pools in {elapsed:.3}s", values.len());
    Ok(Report { counts, elapsed })
}
