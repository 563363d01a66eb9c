use humansize::{format_size as human_format_size, BINARY};

/// Format a byte count in human-readable binary units (KiB, MiB, GiB)
pub fn format_size(size: u64) -> String {
    human_format_size(size, BINARY)
}

/// Percentage of `done` over `total`, 0 when nothing is expected
pub fn percentage(done: u64, total: u64) -> usize {
    if total == 0 {
        return 0;
    }
    ((done as f64 / total as f64) * 100.0).min(100.0) as usize
}

/// "1 file" / "3 files"
pub fn plural(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}
