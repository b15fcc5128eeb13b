use std::time::Duration;

/// Event-loop poll timeout in milliseconds. The redraw this triggers is
/// how the live countdown refreshes; stored state is never touched on a
/// tick. 250ms keeps the display comfortably within the once-per-second
/// refresh contract.
pub const DEFAULT_TICK_MS: u64 = 250;

/// Get tick duration
pub fn tick_duration() -> Duration {
    Duration::from_millis(DEFAULT_TICK_MS)
}
