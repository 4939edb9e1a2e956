use std::time::Duration;

/// Parses a Go-style duration string such as `15s`, `1m30s`, `500ms` or `1.5h`.
///
/// A duration is a sequence of decimal numbers, each with an optional fraction and a unit
/// suffix. Valid units are `ns`, `us` (or `µs`), `ms`, `s`, `m` and `h`. A bare `0` is
/// accepted. Negative durations are rejected.
///
/// # Arguments
/// - `value` - The string to parse
///
/// # Returns
/// - `Ok(Duration)` - Successfully parsed duration
/// - `Err(String)` - Human-readable reason the string is not a duration
pub fn parse_duration(value: &str) -> Result<Duration, String> {
    let input = value.trim();
    if input.is_empty() {
        return Err("empty duration".to_string());
    }
    if input.starts_with('-') {
        return Err(format!("negative duration '{}'", value));
    }
    if input == "0" {
        return Ok(Duration::ZERO);
    }

    let mut rest = input.strip_prefix('+').unwrap_or(input);
    let mut total_nanos: f64 = 0.0;

    while !rest.is_empty() {
        let number_len = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(rest.len());
        if number_len == 0 {
            return Err(format!("invalid duration '{}'", value));
        }
        let number: f64 = rest[..number_len]
            .parse()
            .map_err(|_| format!("invalid number in duration '{}'", value))?;
        rest = &rest[number_len..];

        let unit_len = rest
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(rest.len());
        let nanos_per_unit = match &rest[..unit_len] {
            "ns" => 1.0,
            "us" | "µs" => 1_000.0,
            "ms" => 1_000_000.0,
            "s" => 1_000_000_000.0,
            "m" => 60_000_000_000.0,
            "h" => 3_600_000_000_000.0,
            "" => return Err(format!("missing unit in duration '{}'", value)),
            unit => return Err(format!("unknown unit '{}' in duration '{}'", unit, value)),
        };
        rest = &rest[unit_len..];

        total_nanos += number * nanos_per_unit;
    }

    if !total_nanos.is_finite() || total_nanos > u64::MAX as f64 {
        return Err(format!("duration '{}' out of range", value));
    }

    Ok(Duration::from_nanos(total_nanos.round() as u64))
}
