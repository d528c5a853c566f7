/// The running state of a stopwatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchState {
    /// Not started, or reset. All counters are zero.
    Stopped,
    /// Ticking.
    Running,
    /// Started at least once, but not ticking.
    Paused,
}

impl WatchState {
    /// The label of the primary control in this state.
    ///
    /// The primary control starts a stopped watch, stops a running one and
    /// resumes a paused one.
    pub fn primary_label(self) -> &'static str {
        match self {
            WatchState::Stopped => "START",
            WatchState::Running => "STOP",
            WatchState::Paused => "RESUME",
        }
    }

    /// If the reset control should be offered in this state.
    pub fn reset_visible(self) -> bool {
        self != WatchState::Stopped
    }
}

impl Default for WatchState {
    fn default() -> Self {
        WatchState::Stopped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_label() {
        assert_eq!(WatchState::Stopped.primary_label(), "START");
        assert_eq!(WatchState::Running.primary_label(), "STOP");
        assert_eq!(WatchState::Paused.primary_label(), "RESUME");
    }

    #[test]
    fn test_reset_visible() {
        assert!(!WatchState::Stopped.reset_visible());
        assert!(WatchState::Running.reset_visible());
        assert!(WatchState::Paused.reset_visible());
    }
}
