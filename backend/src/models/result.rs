//! Aggregated win statistics
//!
//! A `GameResult` is computed once from a completed sequence of games and
//! never mutated afterwards. Rates are plain `wins / count` divisions, so an
//! empty bucket yields NaN instead of an error.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::game::Bucket;

/// Significant digits used when rendering rates (C++ `ostream` default)
const SIGNIFICANT_DIGITS: usize = 6;

/// Per-bucket and overall CHSH statistics
///
/// Field names serialize under their interop names (`n00`, `w00`,
/// `WinRate00`, ..., `n`, `w`, `WinRate`).
///
/// # Example
/// ```
/// use chsh_simulator_core_rs::{analyze, Game};
///
/// let games = vec![
///     Game::new(false, false, true, true),
///     Game::new(true, true, true, false),
/// ];
/// let result = analyze(&games);
/// assert_eq!(result.n, 2);
/// assert_eq!(result.win_rate, 1.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameResult {
    pub n00: usize,
    pub n01: usize,
    pub n10: usize,
    pub n11: usize,

    pub w00: usize,
    pub w01: usize,
    pub w10: usize,
    pub w11: usize,

    #[serde(rename = "WinRate00")]
    pub win_rate_00: f64,
    #[serde(rename = "WinRate01")]
    pub win_rate_01: f64,
    #[serde(rename = "WinRate10")]
    pub win_rate_10: f64,
    #[serde(rename = "WinRate11")]
    pub win_rate_11: f64,

    /// Total games
    pub n: usize,
    /// Total wins
    pub w: usize,
    #[serde(rename = "WinRate")]
    pub win_rate: f64,
}

impl GameResult {
    /// Build a result from per-bucket counts and wins, indexed by `Bucket::index`
    pub fn from_counts(counts: [usize; 4], wins: [usize; 4]) -> Self {
        let n = counts.iter().sum();
        let w = wins.iter().sum();
        Self {
            n00: counts[0],
            n01: counts[1],
            n10: counts[2],
            n11: counts[3],
            w00: wins[0],
            w01: wins[1],
            w10: wins[2],
            w11: wins[3],
            win_rate_00: ratio(wins[0], counts[0]),
            win_rate_01: ratio(wins[1], counts[1]),
            win_rate_10: ratio(wins[2], counts[2]),
            win_rate_11: ratio(wins[3], counts[3]),
            n,
            w,
            win_rate: ratio(w, n),
        }
    }

    pub fn count(&self, bucket: Bucket) -> usize {
        match bucket {
            Bucket::B00 => self.n00,
            Bucket::B01 => self.n01,
            Bucket::B10 => self.n10,
            Bucket::B11 => self.n11,
        }
    }

    pub fn wins(&self, bucket: Bucket) -> usize {
        match bucket {
            Bucket::B00 => self.w00,
            Bucket::B01 => self.w01,
            Bucket::B10 => self.w10,
            Bucket::B11 => self.w11,
        }
    }

    pub fn bucket_win_rate(&self, bucket: Bucket) -> f64 {
        match bucket {
            Bucket::B00 => self.win_rate_00,
            Bucket::B01 => self.win_rate_01,
            Bucket::B10 => self.win_rate_10,
            Bucket::B11 => self.win_rate_11,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bucket in Bucket::ALL {
            writeln!(
                f,
                "Winning rate with x = {} and y = {}: {}( {} / {} )",
                u8::from(bucket.x()),
                u8::from(bucket.y()),
                format_rate(self.bucket_win_rate(bucket)),
                self.wins(bucket),
                self.count(bucket),
            )?;
        }
        write!(
            f,
            "Overall winning rate: {}( {} / {} )",
            format_rate(self.win_rate),
            self.w,
            self.n
        )
    }
}

fn ratio(wins: usize, count: usize) -> f64 {
    wins as f64 / count as f64
}

/// Render a rate in `%g` style: six significant digits, trailing zeros dropped
pub fn format_rate(value: f64) -> String {
    // NaN sign is dropped
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // Rounded scientific form decides the exponent after rounding
    let sci = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, value);
    let Some((mantissa, exponent)) = sci.split_once('e') else {
        return sci;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return sci;
    };

    if exponent < -4 || exponent >= SIGNIFICANT_DIGITS as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exponent.abs())
    } else {
        let decimals = (SIGNIFICANT_DIGITS as i32 - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rate_general_style() {
        assert_eq!(format_rate(1.0), "1");
        assert_eq!(format_rate(0.75), "0.75");
        assert_eq!(format_rate(0.853_553_390_6), "0.853553");
        assert_eq!(format_rate(0.5), "0.5");
        assert_eq!(format_rate(0.0), "0");
        assert_eq!(format_rate(0.000_01), "1e-05");
        assert_eq!(format_rate(0.999_999_7), "1");
        assert_eq!(format_rate(1_234_567.0), "1.23457e+06");
        assert_eq!(format_rate(f64::NAN), "nan");
        assert_eq!(format_rate(f64::INFINITY), "inf");
    }

    #[test]
    fn test_nan_renders_without_sign() {
        let empty = ratio(0, 0);
        assert_eq!(format_rate(empty), "nan");
        assert_eq!(format_rate(-f64::NAN), "nan");
    }

    #[test]
    fn test_from_counts_totals() {
        let result = GameResult::from_counts([3, 2, 4, 1], [3, 1, 2, 0]);
        assert_eq!(result.n, 10);
        assert_eq!(result.w, 6);
        assert_eq!(result.win_rate, 0.6);
        assert_eq!(result.win_rate_01, 0.5);
        assert_eq!(result.count(Bucket::B10), 4);
        assert_eq!(result.wins(Bucket::B10), 2);
    }

    #[test]
    fn test_empty_bucket_is_nan() {
        let result = GameResult::from_counts([0, 1, 1, 1], [0, 1, 1, 1]);
        assert!(result.win_rate_00.is_nan());
        assert_eq!(result.win_rate, 1.0);
    }

    #[test]
    fn test_serializes_interop_names() {
        let result = GameResult::from_counts([1, 1, 1, 1], [1, 1, 1, 0]);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["WinRate"], 0.75);
        assert_eq!(json["WinRate11"], 0.0);
        assert_eq!(json["n00"], 1);
        assert_eq!(json["w"], 3);
    }
}
