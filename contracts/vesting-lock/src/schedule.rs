//! Countdown and vesting-rate arithmetic shared by every lock view.
//!
//! Everything here is pure: the caller supplies `now`, so recomputing on a
//! timer tick or on an input change with the same arguments always yields
//! the same value.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Decimal, Timestamp};

use crate::amount::{format_fixed, NATIVE_SYMBOL};
use crate::cadence::{
    ScheduleCadence, SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MONTH, SECONDS_PER_WEEK,
    SECONDS_PER_YEAR,
};

/// Shown wherever a value cannot be computed.
pub const PLACEHOLDER: &str = "-";

const NANOS_PER_MILLI: u64 = 1_000_000;
const MILLIS_PER_SECOND: u64 = 1_000;
const MILLIS_PER_MINUTE: u64 = 60_000;
const MILLIS_PER_HOUR: u64 = 3_600_000;
const MILLIS_PER_DAY: u64 = 86_400_000;

/// Time left until a target instant, in whole units.
#[cw_serde]
#[derive(Copy, Eq, Default)]
pub struct TimeRemaining {
    pub days: u64,
    /// 0..24
    pub hours: u64,
    /// 0..60
    pub minutes: u64,
    /// 0..60
    pub seconds: u64,
}

impl TimeRemaining {
    pub fn from_millis(millis: u64) -> Self {
        TimeRemaining {
            days: millis / MILLIS_PER_DAY,
            hours: millis % MILLIS_PER_DAY / MILLIS_PER_HOUR,
            minutes: millis % MILLIS_PER_HOUR / MILLIS_PER_MINUTE,
            seconds: millis % MILLIS_PER_MINUTE / MILLIS_PER_SECOND,
        }
    }

    pub fn from_seconds(seconds: u64) -> Self {
        TimeRemaining {
            days: seconds / SECONDS_PER_DAY,
            hours: seconds % SECONDS_PER_DAY / SECONDS_PER_HOUR,
            minutes: seconds % SECONDS_PER_HOUR / 60,
            seconds: seconds % 60,
        }
    }

    /// Saturates at `u64::MAX` for hand-built values too large to sum.
    pub fn total_seconds(&self) -> u64 {
        self.days
            .saturating_mul(SECONDS_PER_DAY)
            .saturating_add(self.hours.saturating_mul(SECONDS_PER_HOUR))
            .saturating_add(self.minutes.saturating_mul(60))
            .saturating_add(self.seconds)
    }
}

/// Countdown from `now` to `target`, at millisecond resolution.
///
/// Returns `None` once `target` is not after `now`: the lock is already
/// unlocked and there is nothing left to count down.
pub fn remaining(now: Timestamp, target: Timestamp) -> Option<TimeRemaining> {
    let now_ms = now.nanos() / NANOS_PER_MILLI;
    let target_ms = target.nanos() / NANOS_PER_MILLI;
    if target_ms <= now_ms {
        return None;
    }
    Some(TimeRemaining::from_millis(target_ms - now_ms))
}

/// Human readable release rate such as `"50.00 GAS/day"`.
///
/// When no more than one cadence unit is left the whole amount goes out in
/// that unit. `NoVesting` releases atomically and has no rate.
pub fn display_rate(
    amount: Option<Decimal>,
    cadence: Option<ScheduleCadence>,
    remaining: Option<TimeRemaining>,
) -> String {
    let (amount, cadence, remaining) = match (amount, cadence, remaining) {
        (Some(amount), Some(cadence), Some(remaining)) => (amount, cadence, remaining),
        _ => return PLACEHOLDER.to_string(),
    };
    let (unit_seconds, unit_name) = match (cadence.unit_seconds(), cadence.unit_name()) {
        (Some(seconds), Some(name)) => (seconds, name),
        _ => return PLACEHOLDER.to_string(),
    };

    let total = remaining.total_seconds();
    let rate = if total <= unit_seconds {
        amount
    } else {
        // amount / (total / unit) without leaving integer arithmetic
        Decimal::new(amount.atomics().multiply_ratio(unit_seconds, total))
    };
    format!("{} {}/{}", format_fixed(rate, 2), NATIVE_SYMBOL, unit_name)
}

/// Per-unit release rate over the full lock span, recorded alongside a
/// submitted lock. `None` for `NoVesting`, an empty span, or a rate too large
/// to represent.
pub fn unlock_rate(
    amount: Decimal,
    cadence: ScheduleCadence,
    lock_time: Timestamp,
    unlock_time: Timestamp,
) -> Option<Decimal> {
    let unit_seconds = cadence.unit_seconds()?;
    let span = unlock_time.seconds().checked_sub(lock_time.seconds())?;
    if span == 0 {
        return None;
    }
    amount
        .atomics()
        .checked_multiply_ratio(unit_seconds, span)
        .ok()
        .map(Decimal::new)
}

/// A duration expressed in each calendar-ish unit, two decimals each.
#[cw_serde]
pub struct TimeUnits {
    pub minutes: String,
    pub hours: String,
    pub days: String,
    pub weeks: String,
    pub months: String,
    pub years: String,
}

/// Months are 30 days and years 365 days, matching the cadence units.
pub fn convert(total_seconds: u64) -> TimeUnits {
    let per = |unit: u64| format_fixed(Decimal::from_ratio(total_seconds, unit), 2);
    TimeUnits {
        minutes: per(60),
        hours: per(SECONDS_PER_HOUR),
        days: per(SECONDS_PER_DAY),
        weeks: per(SECONDS_PER_WEEK),
        months: per(SECONDS_PER_MONTH),
        years: per(SECONDS_PER_YEAR),
    }
}
