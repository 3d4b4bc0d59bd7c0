//! Custom serde module for Go-style duration values like "30s", "1m30s", "250ms".
//!
//! Integers are taken as nanoseconds, matching how `time.Duration` values are
//! usually written in YAML by services that share this config file.

use serde::{self, Deserialize, Deserializer};
use std::time::Duration;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDuration {
    Nanos(u64),
    Text(String),
}

/// Deserializes an optional duration. Absent or `null` yields `None`.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawDuration>::deserialize(deserializer)? {
        Some(RawDuration::Nanos(n)) => Ok(Some(Duration::from_nanos(n))),
        Some(RawDuration::Text(s)) => parse_duration(&s)
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

const NANOS_PER_MICRO: u64 = 1_000;
const NANOS_PER_MILLI: u64 = 1_000_000;
const NANOS_PER_SEC: u64 = 1_000_000_000;

fn unit_nanos(unit: &str) -> Option<u64> {
    match unit {
        "ns" => Some(1),
        "us" | "µs" | "μs" => Some(NANOS_PER_MICRO),
        "ms" => Some(NANOS_PER_MILLI),
        "s" => Some(NANOS_PER_SEC),
        "m" => Some(60 * NANOS_PER_SEC),
        "h" => Some(3600 * NANOS_PER_SEC),
        _ => None,
    }
}

fn split_digits(s: &str) -> (&str, &str) {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s.split_at(end)
}

/// Parses a Go-style duration exactly, in whole nanoseconds.
pub(crate) fn parse_duration(s: &str) -> Result<Duration, String> {
    let s = s.trim();
    let s = s.strip_prefix('+').unwrap_or(s);
    if s.starts_with('-') {
        return Err(format!("negative duration: {}", s));
    }
    if s == "0" {
        return Ok(Duration::ZERO);
    }
    if s.is_empty() {
        return Err("empty duration".to_string());
    }

    let out_of_range = || format!("duration out of range: {}", s);
    let mut total: u64 = 0;
    let mut rest = s;
    while !rest.is_empty() {
        let (int_part, tail) = split_digits(rest);
        let (frac_part, tail) = match tail.strip_prefix('.') {
            Some(t) => split_digits(t),
            None => ("", tail),
        };
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(format!("invalid duration number in {:?}", s));
        }

        let unit_end = tail
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(tail.len());
        let (unit, next) = tail.split_at(unit_end);
        let scale = match unit_nanos(unit) {
            Some(scale) => scale,
            None if unit.is_empty() => return Err(format!("missing unit in duration {:?}", s)),
            None => return Err(format!("unknown duration unit: {}", unit)),
        };

        // digits only, so parsing can fail on overflow alone
        let whole: u64 = if int_part.is_empty() {
            0
        } else {
            int_part.parse().map_err(|_| out_of_range())?
        };
        let mut nanos = whole.checked_mul(scale).ok_or_else(out_of_range)?;

        if !frac_part.is_empty() {
            // digits past 10^-18 are below a nanosecond at any unit
            let digits = &frac_part[..frac_part.len().min(18)];
            let frac: u128 = digits.parse().map_err(|_| out_of_range())?;
            let frac_nanos = frac * u128::from(scale) / 10u128.pow(digits.len() as u32);
            let frac_nanos = u64::try_from(frac_nanos).map_err(|_| out_of_range())?;
            nanos = nanos.checked_add(frac_nanos).ok_or_else(out_of_range)?;
        }

        total = total.checked_add(nanos).ok_or_else(out_of_range)?;
        rest = next;
    }

    Ok(Duration::from_nanos(total))
}
