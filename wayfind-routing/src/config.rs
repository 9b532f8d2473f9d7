//! Search configuration.

/// Knobs for a shortest-path run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Stop as soon as the finish node is finalized. When off, the run
    /// finalizes every node reachable from the start.
    pub stop_at_finish: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            stop_at_finish: true,
        }
    }
}

impl SearchConfig {
    /// Finalize every reachable node regardless of the finish node.
    pub fn exhaustive() -> Self {
        Self {
            stop_at_finish: false,
        }
    }

    pub fn with_stop_at_finish(mut self, stop_at_finish: bool) -> Self {
        self.stop_at_finish = stop_at_finish;
        self
    }
}
