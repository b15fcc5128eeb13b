/// Over/under-budget outcome for a task.
///
/// `difference` is the absolute gap between budget and spent time; the sign
/// lives in `is_overtime`. Points won and lost are both measured in these
/// difference seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Performance {
    pub is_overtime: bool,
    pub difference: u64,
}

/// Compare allocated vs used seconds. Finishing exactly on budget counts
/// as under time (difference 0).
pub fn performance(allocated_secs: u64, used_secs: u64) -> Performance {
    Performance {
        is_overtime: used_secs > allocated_secs,
        difference: allocated_secs.abs_diff(used_secs),
    }
}

/// Format a duration compactly for summaries: "2h 5m", "45m 30s", "30s".
/// Zero components are omitted, except that a zero duration renders as "0s".
pub fn format_compact(secs: u64) -> String {
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;

    if hours > 0 {
        if minutes > 0 {
            format!("{}h {}m", hours, minutes)
        } else {
            format!("{}h", hours)
        }
    } else if minutes > 0 {
        if seconds > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}m", minutes)
        }
    } else {
        format!("{}s", seconds)
    }
}

/// Format a duration as a clock string for the live countdown:
/// "MM:SS" under an hour, "H:MM:SS" from one hour up.
pub fn format_digital(secs: u64) -> String {
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    }
}
