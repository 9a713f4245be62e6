//! Node ordering / crossing reduction.
//!
//! Barycenter sweeps that reorder nodes inside each layer, plus a crossing counter used to
//! measure the result.

mod barycenter;
pub use barycenter::{CrossingReport, Side, barycenter, reduce_crossings, sweep_layer};

mod cross_count;
pub use cross_count::count_crossings;
