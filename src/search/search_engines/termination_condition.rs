use crate::search::{search_engines::SearchResult, SearchStatistics};
use memory_stats::memory_stats;
use std::time::{Duration, Instant};
use tracing::info;

/// Resource limits checked once per expansion by every search engine.
#[derive(Debug)]
pub struct TerminationCondition {
    node_budget: Option<u64>,
    time_limit: Option<Duration>,
    memory_limit_mb: Option<usize>,
    start_time: Instant,
    peak_memory_usage_mb: Option<usize>,
    last_log_time: Instant,
}

impl TerminationCondition {
    pub fn new(
        node_budget: Option<u64>,
        time_limit: Option<Duration>,
        memory_limit_mb: Option<usize>,
    ) -> Self {
        info!(
            node_budget = node_budget,
            time_limit = time_limit.map(|d| d.as_secs_f64()),
            memory_limit_mb = memory_limit_mb,
        );
        let mut condition = Self {
            node_budget,
            time_limit,
            memory_limit_mb,
            start_time: Instant::now(),
            peak_memory_usage_mb: None,
            last_log_time: Instant::now(),
        };
        if memory_limit_mb.is_some() {
            condition.log();
        }
        condition
    }

    pub fn unlimited() -> Self {
        Self::new(None, None, None)
    }

    pub fn with_node_budget(node_budget: u64) -> Self {
        Self::new(Some(node_budget), None, None)
    }

    pub fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed() > Duration::from_secs(10) {
            self.last_log_time = Instant::now();
            self.log();
        }
    }

    pub fn log(&mut self) {
        let memory_usage = memory_stats().map(|usage| usage.physical_mem / 1024 / 1024);
        self.peak_memory_usage_mb = self.peak_memory_usage_mb.max(memory_usage);
        let time_elapsed = self.start_time.elapsed();
        info!(
            memory_usage_mb = memory_usage,
            time_elapsed = time_elapsed.as_secs_f64(),
        );
    }

    pub fn finalise(&mut self) {
        let time_elapsed = self.start_time.elapsed();
        info!(
            peak_recorded_memory_usage_mb = self.peak_memory_usage_mb,
            total_time_used = time_elapsed.as_secs_f64(),
        );
    }

    /// The outcome to stop with, if any limit has been reached. Memory is
    /// only sampled when logging, so the memory limit reacts with a delay.
    pub fn should_terminate<S, A>(
        &mut self,
        statistics: &SearchStatistics,
    ) -> Option<SearchResult<S, A>> {
        self.log_if_needed();
        if let Some(node_budget) = self.node_budget {
            if statistics.expanded_nodes() >= node_budget {
                info!(expanded_nodes = statistics.expanded_nodes(), "node budget exhausted");
                return Some(SearchResult::NodeBudgetExhausted);
            }
        }
        if let Some(time_limit) = self.time_limit {
            if self.start_time.elapsed() > time_limit {
                return Some(SearchResult::TimeLimitExceeded);
            }
        }
        if let Some(memory_limit_mb) = self.memory_limit_mb {
            if let Some(peak_usage) = self.peak_memory_usage_mb {
                if peak_usage > memory_limit_mb {
                    return Some(SearchResult::MemoryLimitExceeded);
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlimited_never_terminates() {
        let mut condition = TerminationCondition::unlimited();
        let mut statistics = SearchStatistics::new();
        for _ in 0..1000 {
            statistics.increment_expanded_nodes();
        }
        assert!(condition.should_terminate::<(), ()>(&statistics).is_none());
    }

    #[test]
    fn node_budget_stops_at_budget() {
        let mut condition = TerminationCondition::with_node_budget(2);
        let mut statistics = SearchStatistics::new();
        statistics.increment_expanded_nodes();
        assert!(condition.should_terminate::<(), ()>(&statistics).is_none());
        statistics.increment_expanded_nodes();
        assert_eq!(
            condition.should_terminate::<(), ()>(&statistics),
            Some(SearchResult::NodeBudgetExhausted)
        );
    }

    #[test]
    fn zero_time_limit_terminates() {
        let mut condition = TerminationCondition::new(None, Some(Duration::ZERO), None);
        std::thread::sleep(Duration::from_millis(2));
        let statistics = SearchStatistics::new();
        assert_eq!(
            condition.should_terminate::<(), ()>(&statistics),
            Some(SearchResult::TimeLimitExceeded)
        );
    }
}
