//! Local UI chrome state.

/// UI state shared across pages. Currently just the theme flag; the badge
/// and filter states are page-local.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
}
