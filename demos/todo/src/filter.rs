//! Reducer for the active filter.
//!
//! Every transition is absolute: the next mode depends on the action alone.
//! The three modes form a fully connected state machine starting at
//! [`FilterMode::All`].

use crate::action::FilterAction;
use crate::types::FilterMode;
use statecraft_core::reducer::Reducer;

/// Reducer for the filter mode
#[derive(Clone, Copy, Debug, Default)]
pub struct FilterReducer;

impl FilterReducer {
    /// Creates a new `FilterReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for FilterReducer {
    type State = FilterMode;
    type Action = FilterAction;
    type Environment = ();

    fn reduce(&self, _mode: &FilterMode, action: FilterAction, _env: &()) -> FilterMode {
        match action {
            FilterAction::ShowAll => FilterMode::All,
            FilterAction::ShowComplete => FilterMode::Complete,
            FilterAction::ShowIncomplete => FilterMode::Incomplete,
        }
    }
}

impl From<FilterMode> for FilterAction {
    /// The action that selects `mode`
    fn from(mode: FilterMode) -> Self {
        match mode {
            FilterMode::All => Self::ShowAll,
            FilterMode::Complete => Self::ShowComplete,
            FilterMode::Incomplete => Self::ShowIncomplete,
        }
    }
}
