use chrono::Local;
use std::env;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

pub fn get_data_dir() -> PathBuf {
    let xdg_data_home = env::var("XDG_DATA_HOME")
        .ok()
        .and_then(|path| {
            if path.is_empty() {
                None
            } else {
                Some(PathBuf::from(path))
            }
        })
        .or_else(|| {
            env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".local/share"))
        })
        .expect("Could not determine data directory");

    xdg_data_home.join("mtsieve")
}

/// Append one run to the execution log in the data directory. Failures
/// here are reported as warnings by the caller and never affect the count.
pub fn log_execution(
    start: usize,
    end: usize,
    threads: usize,
    duration_us: u128,
) -> std::io::Result<()> {
    let data_dir = get_data_dir();
    fs::create_dir_all(&data_dir)?;

    let log_path = data_dir.join("execution_log.txt");
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)?;

    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    writeln!(file, "{}", log_line(&timestamp, start, end, threads, duration_us))?;

    Ok(())
}

fn log_line(
    timestamp: &str,
    start: usize,
    end: usize,
    threads: usize,
    duration_us: u128,
) -> String {
    format!(
        "{} | count | s={} e={} t={} | {}us",
        timestamp, start, end, threads, duration_us
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_line_format() {
        let line = log_line("2026-08-26 12:00:00", 2, 340, 3, 1234);
        assert_eq!(line, "2026-08-26 12:00:00 | count | s=2 e=340 t=3 | 1234us");
    }

    #[test]
    fn test_data_dir_ends_with_app_name() {
        assert!(get_data_dir().ends_with("mtsieve"));
    }
}
