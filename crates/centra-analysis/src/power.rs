//! Power iteration with pluggable stop conditions.
//!
//! # Algorithm
//!
//! 1. Start from the all-ones vector, normalized to unit length.
//! 2. Multiply the current iterate as a row vector by the matrix
//!    (`b ← b · M`) and normalize again.
//! 3. Stop when the largest absolute per-component change from the previous
//!    normalized iterate is below the tolerance, or when the stop condition
//!    triggers.
//!
//! The previous iterate starts as the zero vector, so the first step can
//! never report convergence. The last normalized iterate is returned whether
//! or not it converged.
//!
//! # Stop conditions
//!
//! - [`StopCondition::Deadline`]: wall-clock budget (the default, 1000 ms).
//! - [`StopCondition::Iterations`]: fixed iteration cap, deterministic.
//! - A [`CancelToken`] checked before every step ends the loop early.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use centra_core::{GraphError, linalg};
use nalgebra::{DMatrix, DVector};
use tracing::{debug, instrument, warn};

/// Default convergence tolerance (max per-component change).
pub const DEFAULT_TOLERANCE: f64 = 1e-5;

/// Default wall-clock budget.
pub const DEFAULT_MAX_TIME: Duration = Duration::from_millis(1000);

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// When power iteration gives up on convergence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopCondition {
    /// Stop once this much wall-clock time has elapsed.
    Deadline(Duration),
    /// Stop after this many multiply-normalize steps.
    Iterations(usize),
}

impl Default for StopCondition {
    fn default() -> Self {
        Self::Deadline(DEFAULT_MAX_TIME)
    }
}

impl StopCondition {
    /// The condition each half of a bipartite run gets.
    ///
    /// Deadlines are split into thirds; iteration caps are kept whole.
    #[must_use]
    pub fn for_bipartite_half(self) -> Self {
        match self {
            Self::Deadline(budget) => Self::Deadline(budget / 3),
            Self::Iterations(cap) => Self::Iterations(cap),
        }
    }
}

/// Shared flag that asks a running power iteration to stop.
///
/// Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// A fresh, un-cancelled token.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation was requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Configuration for power iteration.
#[derive(Debug, Clone)]
pub struct PowerIterationConfig {
    /// Convergence threshold on the max absolute component change.
    /// Default: 1e-5.
    pub tolerance: f64,
    /// Time or iteration bound. Default: 1000 ms deadline.
    pub stop: StopCondition,
    /// Optional external cancellation.
    pub cancel: Option<CancelToken>,
}

impl Default for PowerIterationConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            stop: StopCondition::default(),
            cancel: None,
        }
    }
}

impl PowerIterationConfig {
    /// Deterministic configuration: `tolerance` with an iteration cap.
    #[must_use]
    pub const fn with_iterations(tolerance: f64, max_iterations: usize) -> Self {
        Self {
            tolerance,
            stop: StopCondition::Iterations(max_iterations),
            cancel: None,
        }
    }

    /// Same tolerance and cancel token, different stop condition.
    #[must_use]
    pub fn with_stop(&self, stop: StopCondition) -> Self {
        Self {
            tolerance: self.tolerance,
            stop,
            cancel: self.cancel.clone(),
        }
    }

    fn cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(CancelToken::is_cancelled)
    }
}

// ---------------------------------------------------------------------------
// Iteration
// ---------------------------------------------------------------------------

/// Result of a power-iteration run.
#[derive(Debug, Clone)]
pub struct PowerIterationOutcome {
    /// Last normalized iterate.
    pub vector: DVector<f64>,
    /// Number of multiply-normalize steps performed.
    pub iterations: usize,
    /// Whether the tolerance was reached before the stop condition.
    pub converged: bool,
}

/// Approximate the dominant eigenvector of a square matrix.
///
/// A 0×0 matrix yields an empty vector immediately.
///
/// # Errors
///
/// Returns [`GraphError::ZeroVector`] when an iterate collapses to zero (a
/// zero matrix, or a nilpotent one), and [`GraphError::DimensionMismatch`]
/// for a non-square matrix.
#[instrument(skip(matrix, config), fields(n = matrix.nrows(), stop = ?config.stop))]
pub fn power_iteration(
    matrix: &DMatrix<f64>,
    config: &PowerIterationConfig,
) -> Result<PowerIterationOutcome, GraphError> {
    let n = matrix.nrows();
    if matrix.ncols() != n {
        return Err(GraphError::DimensionMismatch {
            left: (1, n),
            right: matrix.shape(),
        });
    }
    if n == 0 {
        return Ok(PowerIterationOutcome {
            vector: DVector::zeros(0),
            iterations: 0,
            converged: true,
        });
    }

    let started = Instant::now();
    let mut current = linalg::normalize(&DVector::from_element(n, 1.0))?;
    let mut previous = DVector::zeros(n);
    let mut iterations = 0usize;
    let mut converged = false;

    loop {
        let budget_left = match config.stop {
            StopCondition::Deadline(budget) => started.elapsed() < budget,
            StopCondition::Iterations(cap) => iterations < cap,
        };
        if !budget_left || config.cancelled() {
            break;
        }

        current = linalg::normalize(&matrix.tr_mul(&current))?;
        iterations += 1;

        if linalg::max_abs_delta(&previous, &current) < config.tolerance {
            converged = true;
            break;
        }
        previous.copy_from(&current);
    }

    if converged {
        debug!(iterations, "power iteration converged");
    } else {
        warn!(
            iterations,
            elapsed_ms = started.elapsed().as_millis(),
            cancelled = config.cancelled(),
            "power iteration stopped before converging"
        );
    }

    Ok(PowerIterationOutcome {
        vector: current,
        iterations,
        converged,
    })
}
