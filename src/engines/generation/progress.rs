use super::evolution_engine::GenerationObserver;
use crate::types::GenerationStats;

/// Logs each generation summary; the engine itself never prints.
pub struct ConsoleObserver;

impl GenerationObserver for ConsoleObserver {
    fn on_generation_complete(&mut self, stats: &GenerationStats) {
        log::info!(
            "Generation {}: best {:.2}, mean {:.2}, all-time best {:.2}, goal reachers {}",
            stats.generation,
            stats.best_fitness,
            stats.mean_fitness,
            stats.all_time_best,
            stats.goal_reachers
        );
    }
}

/// Forwards summaries over a channel, for an external UI thread.
pub struct ChannelObserver {
    sender: std::sync::mpsc::Sender<GenerationStats>,
}

impl ChannelObserver {
    pub fn new(sender: std::sync::mpsc::Sender<GenerationStats>) -> Self {
        Self { sender }
    }
}

impl GenerationObserver for ChannelObserver {
    fn on_generation_complete(&mut self, stats: &GenerationStats) {
        let _ = self.sender.send(*stats);
    }
}

/// Discards summaries; handy in tests.
pub struct NullObserver;

impl GenerationObserver for NullObserver {
    fn on_generation_complete(&mut self, _stats: &GenerationStats) {}
}
