#![forbid(unsafe_code)]
//! centra-analysis library.
//!
//! Centrality measures, Freeman centralization, and the flow-distance
//! transform over [`centra_core::Graph`].
//!
//! # Conventions
//!
//! - **Errors**: Fallible operations return [`AnalysisError`].
//! - **Logging**: Use `tracing` macros (`info!`, `warn!`, `error!`, `debug!`, `trace!`).
//! - **Scores**: Every centrality returns a [`Scores`] map from vertex
//!   identifier to a value that is normally in `[0, 1]`.

use std::collections::HashMap;

pub mod centralization;
pub mod error;
pub mod flow;
pub mod metrics;
pub mod paths;
pub mod power;
pub mod request;
pub mod selector;

pub use centralization::{centralization, centralization_from_scores};
pub use error::AnalysisError;
pub use flow::flow_distance;
pub use power::{CancelToken, PowerIterationConfig, StopCondition};
pub use request::{AnalysisReport, AnalysisRequest, WeightPolicy};
pub use selector::Centrality;

/// Per-vertex centrality scores keyed by vertex identifier.
pub type Scores = HashMap<String, f64>;
