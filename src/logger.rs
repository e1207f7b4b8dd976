use std::io::Write;

use chrono::Local;

fn timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

pub fn format_line(timestamp: &str, line: &str) -> String {
    format!("[{}] {}", timestamp, line)
}

pub fn log_line(line: &str) {
    let mut err = std::io::stderr().lock();
    let _ = writeln!(err, "{}", format_line(&timestamp(), line));
}

pub fn log_error(prefix: &str, e: &dyn std::error::Error) {
    log_line(&format!("ERROR: {}: {}", prefix, e));
}
