//! Cyclic time arithmetic on a 24-hour wheel.
//!
//! Wall-clock times are mapped onto a circle so that durations which
//! cross midnight come out as the forward angular distance between the
//! two times. "23:00" to "01:00" is 2 hours, not -22.

use std::f64::consts::TAU;
use std::num::ParseIntError;
use thiserror::Error;

/// Hours in one full turn of the wheel.
const HOURS_PER_CYCLE: f64 = 24.0;

/// Error raised for malformed "HH:MM" strings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClockError {
    /// The ':' separator is missing.
    #[error("invalid time {0:?}: expected HH:MM")]
    InvalidFormat(String),
    /// A component failed to parse as an integer.
    #[error("invalid time {input:?}: {source}")]
    InvalidComponent {
        input: String,
        #[source]
        source: ParseIntError,
    },
}

/// Convert an "HH:MM" time to an angle in radians.
///
/// The 24-hour day maps onto the full circle, so in-range times land in
/// [0, TAU). "24:00" is one full cycle and yields TAU rather than 0;
/// components are parsed but not range-checked, so out-of-range values
/// simply land past one turn.
pub fn time_to_angle(time: &str) -> Result<f64, ClockError> {
    let (hours, minutes) = time
        .split_once(':')
        .ok_or_else(|| ClockError::InvalidFormat(time.to_string()))?;

    let hours: u32 = parse_component(hours, time)?;
    let minutes: u32 = parse_component(minutes, time)?;

    let fractional_hours = f64::from(hours) + f64::from(minutes) / 60.0;
    Ok(TAU * fractional_hours / HOURS_PER_CYCLE)
}

fn parse_component(component: &str, input: &str) -> Result<u32, ClockError> {
    component
        .parse()
        .map_err(|source| ClockError::InvalidComponent {
            input: input.to_string(),
            source,
        })
}

/// Forward elapsed hours from `start` to `end` on the 24-hour wheel.
///
/// A negative angular difference wraps forward past midnight, so the
/// result is always in [0, 24] for in-range inputs. Equal times give
/// 0.0; ("00:00", "24:00") is already a full positive turn and gives
/// 24.0, the one-full-cycle case.
pub fn cyclic_time_difference(start: &str, end: &str) -> Result<f64, ClockError> {
    let start_angle = time_to_angle(start)?;
    let end_angle = time_to_angle(end)?;

    let mut diff = end_angle - start_angle;
    if diff < 0.0 {
        diff += TAU;
    }

    Ok(diff / TAU * HOURS_PER_CYCLE)
}
