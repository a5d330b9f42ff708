// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Parallel hands evaluation.
use log::debug;
use std::{panic, thread};

use crate::{Card, EvalError, HandValue};

/// Evaluates each pool using `num_tasks` parallel tasks.
///
/// The pools are split in contiguous chunks, one for each task, and the values
/// are returned in the same order as the pools. Returns the first error found.
///
/// Panics if `num_tasks` is zero.
pub fn par_eval<P>(pools: &[P], num_tasks: usize) -> Result<Vec<HandValue>, EvalError>
where
    P: AsRef<[Card]> + Sync,
{
    assert!(num_tasks > 0);

    if pools.is_empty() {
        return Ok(Vec::new());
    }

    let pools_per_task = pools.len().div_ceil(num_tasks);

    thread::scope(|s| {
        let tasks = pools
            .chunks(pools_per_task)
            .enumerate()
            .map(|(task_id, chunk)| {
                s.spawn(move || {
                    let values = chunk
                        .iter()
                        .map(|pool| HandValue::eval(pool.as_ref()))
                        .collect::<Result<Vec<_>, _>>();
                    debug!("Task {task_id} evaluated {} pools", chunk.len());
                    values
                })
            })
            .collect::<Vec<_>>();

        let mut values = Vec::with_capacity(pools.len());
        for task in tasks {
            match task.join() {
                Ok(chunk_values) => values.extend(chunk_values?),
                Err(e) => panic::resume_unwind(e),
            }
        }

        Ok(values)
    })
}
