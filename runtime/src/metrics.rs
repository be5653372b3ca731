//! Metric names and descriptions for the Store runtime.
//!
//! The runtime records through the `metrics` facade only. Nothing is
//! exported unless the host installs a recorder; without one every
//! `counter!`/`histogram!` call is a no-op.
//!
//! # Example
//!
//! ```
//! use statecraft_runtime::metrics::{describe_metrics, ACTIONS_TOTAL};
//!
//! describe_metrics();
//! assert_eq!(ACTIONS_TOTAL, "store_actions_total");
//! ```

use metrics::{describe_counter, describe_histogram, Unit};

// Re-export metrics macros for use in other modules
pub use metrics::{counter, histogram};

/// Actions applied by a store, labelled by `store` and `action`.
pub const ACTIONS_TOTAL: &str = "store_actions_total";

/// Actions refused by a store (unrecognized or sent after close), labelled by `store` and `reason`.
pub const ACTIONS_REJECTED_TOTAL: &str = "store_actions_rejected_total";

/// Wall-clock time spent inside `Reducer::reduce`, labelled by `store`.
pub const REDUCER_DURATION_SECONDS: &str = "store_reducer_duration_seconds";

/// Register descriptions for every metric the runtime emits.
///
/// Safe to call more than once; later calls overwrite the same descriptions.
pub fn describe_metrics() {
    describe_counter!(ACTIONS_TOTAL, "Total number of actions applied by stores");
    describe_counter!(
        ACTIONS_REJECTED_TOTAL,
        "Total number of actions rejected before reaching a reducer"
    );
    describe_histogram!(
        REDUCER_DURATION_SECONDS,
        Unit::Seconds,
        "Time taken to compute the next state"
    );
}
