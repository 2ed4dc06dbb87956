#[cfg(test)]
mod progress_tests {
    use crate::ui::progress::{format_duration, human_bytes, ProgressBar};

    #[test]
    fn test_human_bytes_units() {
        assert_eq!(human_bytes(0.0), "0B");
        assert_eq!(human_bytes(512.0), "512.00B");
        assert_eq!(human_bytes(2048.0), "2.00KB");
        assert_eq!(human_bytes(5.0 * 1024.0 * 1024.0), "5.00MB");
        assert_eq!(human_bytes(3.0 * 1024.0 * 1024.0 * 1024.0), "3.00GB");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(59), "0:59");
        assert_eq!(format_duration(61), "1:01");
        assert_eq!(format_duration(3600), "1:00:00");
        assert_eq!(format_duration(3725), "1:02:05");
    }

    #[test]
    fn test_render_tolerates_out_of_range_progress() {
        let mut bar = ProgressBar::new(10);
        // Must clamp rather than panic.
        bar.render(-5.0, None, None);
        bar.render(250.0, Some(100), Some(50));
        bar.render(f64::NAN, None, None);
        bar.finish();
    }
}
