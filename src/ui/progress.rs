use std::io::{self, Write};
use std::time::Instant;

/// Single-line ANSI progress bar with throughput and ETA.
pub struct ProgressBar {
    width: usize,
    start: Instant,
}

impl ProgressBar {
    /// width = number of bar character slots (not including the brackets)
    pub fn new(width: usize) -> Self {
        Self {
            width,
            start: Instant::now(),
        }
    }

    /// Render the bar in place on the current line.
    /// - `progress`: 0.0..=100.0
    /// - `bytes_written` and `total_bytes` are optional; when both are
    ///   given, speed and ETA are shown.
    pub fn render(&mut self, progress: f64, bytes_written: Option<u64>, total_bytes: Option<u64>) {
        let pct = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 100.0)
        };

        let filled = ((pct / 100.0) * self.width as f64).round() as usize;
        let empty = self.width.saturating_sub(filled);

        // ANSI colors: green fill, gray rest, cyan stats
        let green = "\x1b[38;5;82m";
        let gray = "\x1b[38;5;240m";
        let cyan = "\x1b[38;5;51m";
        let bold = "\x1b[1m";
        let reset = "\x1b[0m";

        let bar = format!(
            "{}{}{}{}{}{}{}",
            bold,
            green,
            "█".repeat(filled),
            reset,
            gray,
            "░".repeat(empty),
            reset
        );

        let info = if let (Some(written), Some(total)) = (bytes_written, total_bytes) {
            let elapsed = self.start.elapsed().as_secs_f64().max(0.0001);
            let speed = written as f64 / elapsed;
            let remaining = total.saturating_sub(written);
            let eta_secs = if speed > 0.0 {
                (remaining as f64 / speed).round() as u64
            } else {
                0
            };

            format!(
                "{}{:.1}%{}  {}{}/s  ETA {}{}",
                bold,
                pct,
                reset,
                cyan,
                human_bytes(speed),
                format_duration(eta_secs),
                reset
            )
        } else {
            format!("{}{:.1}%{}", bold, pct, reset)
        };

        print!("\r\x1b[2K[{}] {}", bar, info);
        io::stdout().flush().ok();
    }

    /// Terminate the bar line once the pass completes.
    pub fn finish(&mut self) {
        println!();
    }
}

/// Convert bytes/sec to readable string
pub(crate) fn human_bytes(bps: f64) -> String {
    let units = ["B", "KB", "MB", "GB", "TB"];
    if bps <= 0.0 {
        return "0B".to_string();
    }
    let mut val = bps;
    let mut i = 0usize;
    while val >= 1024.0 && i + 1 < units.len() {
        val /= 1024.0;
        i += 1;
    }
    format!("{:.2}{}", val, units[i])
}

/// Format seconds to H:MM:SS or M:SS
pub(crate) fn format_duration(secs: u64) -> String {
    let h = secs / 3600;
    let m = (secs % 3600) / 60;
    let s = secs % 60;
    if h > 0 {
        format!("{}:{:02}:{:02}", h, m, s)
    } else {
        format!("{}:{:02}", m, s)
    }
}
