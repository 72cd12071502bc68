/// `mm:ss` with minutes zero-padded to two digits; minutes keep growing past 99.
#[must_use]
pub fn format_clock(ms: u64) -> String {
    let seconds = ms / 1_000;
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[must_use]
pub fn format_seconds(seconds: u64) -> String {
    format!("{seconds}s")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_truncates_to_whole_seconds() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(999), "00:00");
        assert_eq!(format_clock(65_400), "01:05");
        assert_eq!(format_clock(6_000_000), "100:00");
    }

    #[test]
    fn seconds_label() {
        assert_eq!(format_seconds(7), "7s");
    }
}
