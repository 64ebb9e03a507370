// Constants for the robot interpreter

/// Default cap on executed primitives
/// `repeat` counts go up to u32::MAX per level, so a run must be bounded
pub const DEFAULT_MAX_STEPS: u64 = 100_000;

/// Default snapshot history budget (256 MB)
pub const DEFAULT_SNAPSHOT_MEMORY: usize = 256 * 1024 * 1024;

/// Interval between steps in TUI auto-play mode
pub const PLAY_INTERVAL_MS: u64 = 250;
