//! Producer / worker-pool / coordinator fan-out over bounded queues.
//!
//! ```text
//! enumerate ──work queue──▶ roots-0 ┐
//!                         ▶ roots-1 ├──results queue──▶ caller (drain + stats)
//!                         ▶ roots-N ┘          ▲
//!                     coordinate (join workers, then close)
//! ```
//!
//! Every worker owns its own `ChaCha8Rng`. The queues are the only shared state.

use std::ops::RangeInclusive;
use std::thread::Builder;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::foundation::error::{GlowError, GlowResult};
use crate::foundation::math::mix_seed;
use crate::poly::enumerate::{PolynomialEnumerator, WorkItem};
use crate::roots::newton::find_roots;
use crate::schedule::generate::{GenerateOpts, Generation, HeightProgress, RootPoint};

pub(crate) fn generate_parallel(
    heights: RangeInclusive<u32>,
    opts: &GenerateOpts,
) -> GlowResult<Generation> {
    let last_height = *heights.end();
    let enumerator = PolynomialEnumerator::with_heights(heights)?;
    let workers = opts.resolved_workers();
    let base_seed = opts.resolved_seed();
    let newton = opts.newton;
    let work_capacity = opts.work_capacity.max(1);
    let result_capacity = opts.result_capacity.max(1);

    tracing::debug!(workers, seed = base_seed, work_capacity, result_capacity, "starting worker pool");

    std::thread::scope(|scope| -> GlowResult<Generation> {
        // Channels live inside the scope so an early return drops both ends and lets every
        // spawned thread run down before the scope joins them.
        let (work_tx, work_rx) = crossbeam_channel::bounded::<WorkItem>(work_capacity);
        let (result_tx, result_rx) = crossbeam_channel::bounded::<Vec<RootPoint>>(result_capacity);

        let producer = Builder::new()
            .name("enumerate".to_string())
            .spawn_scoped(scope, move || {
                let mut progress = HeightProgress::new(last_height);
                for item in enumerator {
                    progress.observe(item.height);
                    if work_tx.send(item).is_err() {
                        // Every worker is gone; nothing left to feed.
                        break;
                    }
                }
            })
            .map_err(|e| spawn_error("enumeration", e))?;

        let mut handles = Vec::with_capacity(workers);
        for worker in 0..workers {
            let rx = work_rx.clone();
            let tx = result_tx.clone();
            let seed = mix_seed(base_seed, worker as u64);
            let handle = Builder::new()
                .name(format!("roots-{worker}"))
                .spawn_scoped(scope, move || {
                    let mut rng = ChaCha8Rng::seed_from_u64(seed);
                    for item in rx.iter() {
                        let roots = find_roots(&item.polynomial, &newton, &mut rng);
                        if tx.send(RootPoint::batch(&item, roots)).is_err() {
                            break;
                        }
                    }
                })
                .map_err(|e| spawn_error("root-finding worker", e))?;
            handles.push(handle);
        }
        drop(work_rx);

        // The coordinator holds the last results sender and drops it only after every
        // worker has been joined, which is what closes the results queue.
        let coordinator = Builder::new()
            .name("coordinate".to_string())
            .spawn_scoped(scope, move || -> usize {
                let mut panicked = 0usize;
                for handle in handles {
                    if handle.join().is_err() {
                        panicked += 1;
                    }
                }
                drop(result_tx);
                panicked
            })
            .map_err(|e| spawn_error("coordinator", e))?;

        let mut generation = Generation::default();
        for batch in result_rx.iter() {
            generation.stats.polynomials += 1;
            generation.stats.roots += batch.len() as u64;
            generation.points.extend(batch);
        }

        let panicked = coordinator
            .join()
            .map_err(|_| GlowError::evaluation("coordinator thread panicked"))?;
        producer
            .join()
            .map_err(|_| GlowError::evaluation("enumeration thread panicked"))?;
        if panicked > 0 {
            return Err(GlowError::evaluation(format!(
                "{panicked} root-finding worker(s) panicked"
            )));
        }

        generation.stats.workers = workers;
        Ok(generation)
    })
}

fn spawn_error(what: &str, e: std::io::Error) -> GlowError {
    GlowError::evaluation(format!("failed to spawn {what} thread: {e}"))
}
