// Snapshot management for reverse execution

use crate::parser::ast::{Primitive, SourceLocation};
use crate::robot::Robot;

/// Log of executed primitives, one line per step
#[derive(Debug, Clone)]
pub struct MoveLog {
    pub lines: Vec<LogLine>,
}

impl MoveLog {
    pub fn new() -> Self {
        MoveLog { lines: Vec::new() }
    }

    pub fn record(&mut self, text: String, location: SourceLocation) {
        self.lines.push(LogLine { text, location });
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Keep only the first `len` lines
    pub fn truncate(&mut self, len: usize) {
        self.lines.truncate(len);
    }
}

impl Default for MoveLog {
    fn default() -> Self {
        Self::new()
    }
}

/// A line of move-log output with source location tracking
#[derive(Debug, Clone)]
pub struct LogLine {
    pub text: String,
    pub location: SourceLocation,
}

/// Snapshot of execution state after one step.
///
/// The trail and the log are append-only during a run, so a snapshot keeps
/// their lengths instead of copies.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub robot: Robot,
    pub step: usize,
    pub trail_len: usize,
    pub log_len: usize,
    pub source_location: SourceLocation,
    pub command: Option<Primitive>,
}

impl Snapshot {
    /// Estimate the memory usage of this snapshot in bytes
    pub fn estimated_size(&self) -> usize {
        std::mem::size_of::<Snapshot>()
    }
}

/// Manages execution history for reverse execution
#[derive(Debug)]
pub struct SnapshotManager {
    snapshots: Vec<Snapshot>,
    max_memory: usize,
    current_memory: usize,
}

impl SnapshotManager {
    pub fn new(max_memory: usize) -> Self {
        SnapshotManager {
            snapshots: Vec::new(),
            max_memory,
            current_memory: 0,
        }
    }

    /// Add a snapshot to history
    pub fn push(&mut self, snapshot: Snapshot) -> Result<(), String> {
        let snapshot_size = snapshot.estimated_size();

        if self.current_memory + snapshot_size > self.max_memory {
            return Err(format!(
                "Snapshot memory limit exceeded: {} + {} > {}",
                self.current_memory, snapshot_size, self.max_memory
            ));
        }

        self.current_memory += snapshot_size;
        self.snapshots.push(snapshot);
        Ok(())
    }

    /// Get a snapshot by index
    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    /// Most recently recorded snapshot
    pub fn last(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }

    /// Get the number of snapshots
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Get current memory usage
    pub fn memory_usage(&self) -> usize {
        self.current_memory
    }

    /// Get max memory limit
    pub fn memory_limit(&self) -> usize {
        self.max_memory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(step: usize) -> Snapshot {
        Snapshot {
            robot: Robot::new(),
            step,
            trail_len: 1,
            log_len: step,
            source_location: SourceLocation::new(1, 1),
            command: None,
        }
    }

    #[test]
    fn test_push_respects_memory_limit() {
        let size = snapshot(0).estimated_size();
        let mut manager = SnapshotManager::new(size * 2);

        assert!(manager.push(snapshot(0)).is_ok());
        assert!(manager.push(snapshot(1)).is_ok());
        assert!(manager.push(snapshot(2)).is_err());

        assert_eq!(manager.len(), 2);
        assert_eq!(manager.memory_usage(), size * 2);
        assert_eq!(manager.last().map(|s| s.step), Some(1));
    }

    #[test]
    fn test_log_truncate() {
        let mut log = MoveLog::new();
        log.record("go".to_string(), SourceLocation::new(1, 9));
        log.record("left".to_string(), SourceLocation::new(1, 12));
        log.truncate(1);
        assert_eq!(log.len(), 1);
        assert_eq!(log.lines[0].text, "go");
    }
}
