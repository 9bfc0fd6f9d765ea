//! Generic per-view load tracking.
//!
//! A [`LoadState`] owns the last successfully loaded payload together with
//! the loading flag and error slot of the fetch in flight. Data is kept
//! stale-while-revalidate: a new fetch or a failed fetch never blanks what
//! the user is already looking at, so the UI only shows an empty screen
//! before the first successful load.

// ============================================================================
// LoadState
// ============================================================================

/// Load lifecycle for one view's data payload.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadState<P> {
    data: P,
    loading: bool,
    error: Option<String>,
    seq: u64,
}

impl<P: Default> Default for LoadState<P> {
    fn default() -> Self {
        Self {
            data: P::default(),
            loading: false,
            error: None,
            seq: 0,
        }
    }
}

impl<P> LoadState<P> {
    /// Marks a new fetch as in flight: sets `loading`, clears the previous
    /// error, and returns the request token the completion must carry.
    ///
    /// Tokens are how overlapping loads are resolved: only the completion
    /// of the most recently issued fetch is applied (see [`Self::finish`]).
    pub fn begin(&mut self) -> u64 {
        self.loading = true;
        self.error = None;
        self.seq = self.seq.wrapping_add(1);
        self.seq
    }

    /// Applies a fetch completion carrying request token `seq`.
    ///
    /// A stale token (any fetch superseded by a later `begin`) is dropped
    /// without touching state. Returns `true` if the completion was applied.
    pub fn finish(&mut self, seq: u64, result: Result<P, String>) -> bool {
        if seq != self.seq {
            return false;
        }
        self.loading = false;
        match result {
            Ok(payload) => self.data = payload,
            // Stale data stays; only the error slot records the failure
            Err(message) => self.error = Some(message),
        }
        true
    }

    /// The last successfully loaded payload.
    #[must_use]
    pub fn data(&self) -> &P {
        &self.data
    }

    /// Returns `true` while a fetch is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The error of the most recent failed fetch, if it has not been
    /// superseded by a new attempt.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The token of the most recently issued fetch.
    #[must_use]
    #[allow(dead_code)] // Part of the load state API
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_sets_loading_and_clears_error() {
        let mut load: LoadState<Vec<u32>> = LoadState::default();
        let seq = load.begin();
        load.finish(seq, Err("boom".to_string()));
        assert_eq!(load.error(), Some("boom"));

        load.begin();
        assert!(load.is_loading());
        assert!(load.error().is_none());
    }

    #[test]
    fn test_success_replaces_data() {
        let mut load: LoadState<Vec<u32>> = LoadState::default();
        let seq = load.begin();
        assert!(load.finish(seq, Ok(vec![1, 2, 3])));
        assert_eq!(load.data(), &vec![1, 2, 3]);
        assert!(!load.is_loading());
        assert!(load.error().is_none());
    }

    #[test]
    fn test_repeated_identical_loads_are_idempotent() {
        let mut load: LoadState<Vec<u32>> = LoadState::default();
        let seq = load.begin();
        load.finish(seq, Ok(vec![7]));
        let seq = load.begin();
        load.finish(seq, Ok(vec![7]));
        assert_eq!(load.data(), &vec![7]);
        assert!(load.error().is_none());
    }

    #[test]
    fn test_failure_preserves_stale_data() {
        let mut load: LoadState<Vec<u32>> = LoadState::default();
        let seq = load.begin();
        load.finish(seq, Ok(vec![4, 5]));

        let seq = load.begin();
        load.finish(seq, Err("connection refused".to_string()));

        assert_eq!(load.data(), &vec![4, 5]);
        assert_eq!(load.error(), Some("connection refused"));
        assert!(!load.is_loading());
    }

    #[test]
    fn test_stale_token_is_dropped() {
        let mut load: LoadState<Vec<u32>> = LoadState::default();
        let first = load.begin();
        let second = load.begin();

        // The newer fetch resolves first.
        assert!(load.finish(second, Ok(vec![9])));
        // The superseded one must not overwrite it.
        assert!(!load.finish(first, Ok(vec![1])));

        assert_eq!(load.data(), &vec![9]);
        assert!(!load.is_loading());
    }

    #[test]
    fn test_empty_success_is_data_not_error() {
        let mut load: LoadState<Vec<u32>> = LoadState::default();
        let seq = load.begin();
        load.finish(seq, Ok(Vec::new()));
        assert!(load.data().is_empty());
        assert!(load.error().is_none());
        assert!(!load.is_loading());
    }
}
