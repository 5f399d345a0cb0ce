use std::ops::RangeInclusive;

use num_complex::Complex64;

use crate::foundation::error::{GlowError, GlowResult};
use crate::poly::enumerate::{MIN_HEIGHT, WorkItem, validate_heights};
use crate::roots::newton::NewtonOpts;

/// One root of one enumerated polynomial, tagged with the polynomial's metadata.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RootPoint {
    /// The root.
    pub z: Complex64,
    /// Height of the polynomial the root came from.
    pub height: u32,
    /// Degree of that polynomial.
    pub degree: usize,
    /// Absolute value of its leading coefficient.
    pub leading_magnitude: u32,
}

impl RootPoint {
    pub(crate) fn batch(item: &WorkItem, roots: Vec<Complex64>) -> Vec<RootPoint> {
        roots
            .into_iter()
            .map(|z| RootPoint {
                z,
                height: item.height,
                degree: item.degree,
                leading_magnitude: item.leading_magnitude,
            })
            .collect()
    }
}

/// Options controlling point generation.
#[derive(Clone, Debug)]
pub struct GenerateOpts {
    /// Fan work out to a worker pool. `false` runs everything on the calling thread.
    pub parallel: bool,
    /// Worker count override. `None` uses the available hardware parallelism.
    pub workers: Option<usize>,
    /// Capacity of the bounded work queue.
    pub work_capacity: usize,
    /// Capacity of the bounded results queue (in per-polynomial batches).
    pub result_capacity: usize,
    /// Base seed for the per-worker random sources. `None` draws one from the OS.
    pub seed: Option<u64>,
    /// Newton search tuning.
    pub newton: NewtonOpts,
}

impl Default for GenerateOpts {
    fn default() -> Self {
        Self {
            parallel: true,
            workers: None,
            work_capacity: 1000,
            result_capacity: 1000,
            seed: None,
            newton: NewtonOpts::default(),
        }
    }
}

impl GenerateOpts {
    /// Reject zero worker counts and invalid Newton settings.
    pub fn validate(&self) -> GlowResult<()> {
        if let Some(n) = self.workers
            && n == 0
        {
            return Err(GlowError::validation("generate 'workers' must be >= 1 when set"));
        }
        self.newton.validate()
    }

    pub(crate) fn resolved_workers(&self) -> usize {
        self.workers.unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1)
        })
    }

    pub(crate) fn resolved_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            use rand::Rng as _;
            rand::rng().random()
        })
    }
}

/// Counters accumulated while draining results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GenerateStats {
    /// Polynomials whose roots were searched.
    pub polynomials: u64,
    /// Roots found across all polynomials.
    pub roots: u64,
    /// Threads that ran root finding (1 for the sequential path).
    pub workers: usize,
}

/// Result of one generation pass.
#[derive(Clone, Debug, Default)]
pub struct Generation {
    /// Every root found, in arrival order.
    pub points: Vec<RootPoint>,
    /// Summary counters.
    pub stats: GenerateStats,
}

/// Generate all root points for heights `2..=max_height`.
pub fn generate(max_height: u32, opts: &GenerateOpts) -> GlowResult<Generation> {
    generate_heights(MIN_HEIGHT..=max_height, opts)
}

/// Generate all root points for an explicit slice of heights.
///
/// Heights are validated before any work starts. Arrival order of points is unspecified
/// on the parallel path; the point multiset is the same either way.
#[tracing::instrument(skip(opts), fields(parallel = opts.parallel))]
pub fn generate_heights(
    heights: RangeInclusive<u32>,
    opts: &GenerateOpts,
) -> GlowResult<Generation> {
    validate_heights(&heights)?;
    opts.validate()?;

    let generation = if opts.parallel {
        crate::schedule::pool::generate_parallel(heights, opts)?
    } else {
        crate::schedule::sequential::generate_sequential(heights, opts)
    };

    tracing::info!(
        eqns = generation.stats.polynomials,
        roots = generation.stats.roots,
        workers = generation.stats.workers,
        "generated algebraic numbers"
    );
    Ok(generation)
}

/// Logs once per height as the enumeration moves through the range.
pub(crate) struct HeightProgress {
    current: Option<u32>,
    last: u32,
}

impl HeightProgress {
    pub(crate) fn new(last: u32) -> Self {
        Self {
            current: None,
            last,
        }
    }

    pub(crate) fn observe(&mut self, height: u32) {
        if self.current == Some(height) {
            return;
        }
        self.current = Some(height);
        let expected = crate::poly::enumerate::count_for_height(height);
        // Per-height progress is info-level only for long runs.
        if self.last > 15 {
            tracing::info!(height, max_height = self.last, expected = %expected, "processing height");
        } else {
            tracing::debug!(height, max_height = self.last, expected = %expected, "processing height");
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/generate.rs"]
mod tests;
