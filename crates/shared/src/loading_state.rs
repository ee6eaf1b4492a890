use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LoadingState {
    #[default]
    Loading,
    Ready,
    Error(String),
}

impl LoadingState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadingState::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, LoadingState::Ready)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, LoadingState::Error(_))
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            LoadingState::Error(msg) => Some(msg),
            _ => None,
        }
    }
}

impl fmt::Display for LoadingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadingState::Loading => write!(f, "Loading"),
            LoadingState::Ready => write!(f, "Ready"),
            LoadingState::Error(msg) => write!(f, "Error: {}", msg),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadingEvent {
    StartLoading,
    LoadComplete,
    LoadError(String),
}

impl LoadingEvent {
    pub fn apply_to_state(self, current_state: LoadingState) -> LoadingState {
        match (self, current_state) {
            (LoadingEvent::StartLoading, _) => LoadingState::Loading,
            // A failed bulk load is final; late completions don't mask it
            (LoadingEvent::LoadComplete, LoadingState::Error(msg)) => LoadingState::Error(msg),
            (LoadingEvent::LoadComplete, _) => LoadingState::Ready,
            (LoadingEvent::LoadError(msg), _) => LoadingState::Error(msg),
        }
    }
}
