use std::rc::Rc;

/// Lifecycle of one remote fetch. `Idle` exists for on-demand data
/// (the leaderboard) that has not been requested yet.
#[derive(Clone, PartialEq, Debug)]
pub enum FetchState<T> {
    Idle,
    Loading,
    Loaded(Rc<T>),
    Error(String),
}

impl<T> FetchState<T> {
    /// Returns true if the fetch is in flight
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    /// Returns the data if it is loaded
    pub fn data(&self) -> Option<&Rc<T>> {
        match self {
            FetchState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    /// Returns the error message if the fetch failed
    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Error(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_extraction() {
        let loaded = FetchState::Loaded(Rc::new(5u32));
        assert_eq!(loaded.data().map(|d| **d), Some(5));
        assert!(!loaded.is_loading());

        let loading: FetchState<u32> = FetchState::Loading;
        assert!(loading.is_loading());
        assert!(loading.data().is_none());

        let error: FetchState<u32> = FetchState::Error("boom".to_string());
        assert_eq!(error.error(), Some("boom"));

        let idle: FetchState<u32> = FetchState::Idle;
        assert!(idle.data().is_none());
        assert!(idle.error().is_none());
    }
}
