/// Formats a duration in seconds the way the course UI displays it:
/// `1h 5m`, `20m 0s`, or `45s`.
pub fn format_duration(seconds: i64) -> String {
  let hours = seconds / 3600;
  let minutes = (seconds % 3600) / 60;
  let secs = seconds % 60;

  if hours > 0 {
    format!("{hours}h {minutes}m")
  } else if minutes > 0 {
    format!("{minutes}m {secs}s")
  } else {
    format!("{secs}s")
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_format_duration() {
    assert_eq!(format_duration(45), "45s");
    assert_eq!(format_duration(90), "1m 30s");
    assert_eq!(format_duration(600), "10m 0s");
    assert_eq!(format_duration(3661), "1h 1m");
    assert_eq!(format_duration(0), "0s");
  }
}
