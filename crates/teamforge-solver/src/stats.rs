//! Search statistics.

use std::time::{Duration, Instant};

/// Counters collected during one branch-and-bound run.
///
/// # Example
///
/// ```
/// use teamforge_solver::SearchStats;
///
/// let mut stats = SearchStats::default();
/// stats.start();
/// stats.record_node();
/// stats.record_node();
/// stats.record_leaf();
/// stats.record_prune();
///
/// assert_eq!(stats.nodes_explored, 2);
/// assert_eq!(stats.leaves_scored, 1);
/// assert_eq!(stats.subtrees_pruned, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    start_time: Option<Instant>,
    finish_time: Option<Instant>,
    /// Recursion frames entered, leaves included.
    pub nodes_explored: u64,
    /// Complete assignments that were valid and scored.
    pub leaves_scored: u64,
    /// Subtrees cut by the pruning bounds.
    pub subtrees_pruned: u64,
    /// Times a new best mission team was recorded.
    pub improvements: u64,
}

impl SearchStats {
    /// Marks the start of the search.
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
        self.finish_time = None;
    }

    /// Freezes the elapsed time.
    pub fn finish(&mut self) {
        self.finish_time = Some(Instant::now());
    }

    /// Time between [`start`](Self::start) and [`finish`](Self::finish), or
    /// until now while still running.
    pub fn elapsed(&self) -> Duration {
        match (self.start_time, self.finish_time) {
            (Some(start), Some(end)) => end.duration_since(start),
            (Some(start), None) => start.elapsed(),
            _ => Duration::ZERO,
        }
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed().as_millis() as u64
    }

    pub fn record_node(&mut self) {
        self.nodes_explored += 1;
    }

    pub fn record_leaf(&mut self) {
        self.leaves_scored += 1;
    }

    pub fn record_prune(&mut self) {
        self.subtrees_pruned += 1;
    }

    pub fn record_improvement(&mut self) {
        self.improvements += 1;
    }

    /// Explored nodes per second.
    pub fn nodes_per_second(&self) -> f64 {
        let secs = self.elapsed().as_secs_f64();
        if secs > 0.0 {
            self.nodes_explored as f64 / secs
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unstarted_stats() {
        let stats = SearchStats::default();
        assert_eq!(stats.elapsed(), Duration::ZERO);
        assert_eq!(stats.nodes_per_second(), 0.0);
    }

    #[test]
    fn test_finish_freezes_elapsed() {
        let mut stats = SearchStats::default();
        stats.start();
        stats.finish();
        let frozen = stats.elapsed();
        std::thread::sleep(Duration::from_millis(2));
        assert_eq!(stats.elapsed(), frozen);
    }

    #[test]
    fn test_counters() {
        let mut stats = SearchStats::default();
        stats.record_improvement();
        stats.record_improvement();
        stats.record_leaf();
        assert_eq!(stats.improvements, 2);
        assert_eq!(stats.leaves_scored, 1);
        assert_eq!(stats.nodes_explored, 0);
    }
}
