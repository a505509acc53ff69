use crate::LoadError;

/// Lifecycle of a one-shot fetch.
///
/// A view starts in [`LoadState::Loading`] and settles exactly once into
/// either [`LoadState::Error`] or [`LoadState::Ready`]. Both are terminal.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Error(LoadError),
    Ready(T),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Loading
    }
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn is_terminal(&self) -> bool {
        !self.is_loading()
    }

    pub fn label(&self) -> &'static str {
        match self {
            LoadState::Loading => "loading",
            LoadState::Error(_) => "error",
            LoadState::Ready(_) => "ready",
        }
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&LoadError> {
        match self {
            LoadState::Error(e) => Some(e),
            _ => None,
        }
    }

    /// Apply a fetch outcome. Only the first call from `Loading` has any
    /// effect; returns whether the state changed.
    pub fn settle(&mut self, outcome: Result<T, LoadError>) -> bool {
        if self.is_terminal() {
            return false;
        }

        *self = match outcome {
            Ok(value) => LoadState::Ready(value),
            Err(e) => LoadState::Error(e),
        };
        true
    }
}

impl<T> From<Result<T, LoadError>> for LoadState<T> {
    fn from(outcome: Result<T, LoadError>) -> Self {
        let mut state = LoadState::Loading;
        state.settle(outcome);
        state
    }
}
