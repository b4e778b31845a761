use std::fmt;
use std::str::FromStr;

use cosmwasm_schema::cw_serde;

use crate::error::LockError;

pub const SECONDS_PER_HOUR: u64 = 3_600;
pub const SECONDS_PER_DAY: u64 = 86_400;
pub const SECONDS_PER_WEEK: u64 = 604_800;
/// A month is a flat 30 days.
pub const SECONDS_PER_MONTH: u64 = 2_592_000;
/// A year is a flat 365 days.
pub const SECONDS_PER_YEAR: u64 = 31_536_000;

/// Vesting granularity of a lock, or atomic release at unlock.
#[cw_serde]
#[derive(Copy, Eq, Hash)]
pub enum ScheduleCadence {
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    NoVesting,
}

impl ScheduleCadence {
    pub const ALL: [ScheduleCadence; 6] = [
        ScheduleCadence::Hourly,
        ScheduleCadence::Daily,
        ScheduleCadence::Weekly,
        ScheduleCadence::Monthly,
        ScheduleCadence::Yearly,
        ScheduleCadence::NoVesting,
    ];

    /// Code understood by the lock contract.
    pub fn to_code(self) -> u8 {
        match self {
            ScheduleCadence::Hourly => 0,
            ScheduleCadence::Daily => 1,
            ScheduleCadence::Weekly => 2,
            ScheduleCadence::Monthly => 3,
            ScheduleCadence::Yearly => 4,
            ScheduleCadence::NoVesting => 5,
        }
    }

    pub fn from_code(code: u8) -> Result<Self, LockError> {
        match code {
            0 => Ok(ScheduleCadence::Hourly),
            1 => Ok(ScheduleCadence::Daily),
            2 => Ok(ScheduleCadence::Weekly),
            3 => Ok(ScheduleCadence::Monthly),
            4 => Ok(ScheduleCadence::Yearly),
            5 => Ok(ScheduleCadence::NoVesting),
            code => Err(LockError::UnknownCadence { code }),
        }
    }

    /// Length of one vesting unit. `NoVesting` releases everything at once
    /// and has no unit.
    pub fn unit_seconds(self) -> Option<u64> {
        match self {
            ScheduleCadence::Hourly => Some(SECONDS_PER_HOUR),
            ScheduleCadence::Daily => Some(SECONDS_PER_DAY),
            ScheduleCadence::Weekly => Some(SECONDS_PER_WEEK),
            ScheduleCadence::Monthly => Some(SECONDS_PER_MONTH),
            ScheduleCadence::Yearly => Some(SECONDS_PER_YEAR),
            ScheduleCadence::NoVesting => None,
        }
    }

    pub fn unit_name(self) -> Option<&'static str> {
        match self {
            ScheduleCadence::Hourly => Some("hour"),
            ScheduleCadence::Daily => Some("day"),
            ScheduleCadence::Weekly => Some("week"),
            ScheduleCadence::Monthly => Some("month"),
            ScheduleCadence::Yearly => Some("year"),
            ScheduleCadence::NoVesting => None,
        }
    }

    /// Label shown in the schedule selector.
    pub fn label(self) -> &'static str {
        match self {
            ScheduleCadence::Hourly => "Hourly",
            ScheduleCadence::Daily => "Daily",
            ScheduleCadence::Weekly => "Weekly",
            ScheduleCadence::Monthly => "Monthly",
            ScheduleCadence::Yearly => "Yearly",
            ScheduleCadence::NoVesting => "No Vesting",
        }
    }
}

impl Default for ScheduleCadence {
    fn default() -> Self {
        ScheduleCadence::NoVesting
    }
}

impl fmt::Display for ScheduleCadence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ScheduleCadence {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScheduleCadence::ALL
            .iter()
            .copied()
            .find(|cadence| cadence.label() == s.trim())
            .ok_or_else(|| format!("unknown schedule '{}'", s))
    }
}

impl TryFrom<u8> for ScheduleCadence {
    type Error = LockError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        ScheduleCadence::from_code(code)
    }
}

impl From<ScheduleCadence> for u8 {
    fn from(cadence: ScheduleCadence) -> u8 {
        cadence.to_code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for code in 0..=5u8 {
            let cadence = ScheduleCadence::from_code(code).unwrap();
            assert_eq!(code, cadence.to_code());
        }
        assert_eq!(5, ScheduleCadence::NoVesting.to_code());
        assert_eq!(ScheduleCadence::Weekly, ScheduleCadence::try_from(2).unwrap());
    }

    #[test]
    fn unknown_code_is_rejected() {
        match ScheduleCadence::from_code(6) {
            Err(LockError::UnknownCadence { code }) => assert_eq!(6, code),
            _ => panic!("Must return UnknownCadence error"),
        }
        match ScheduleCadence::try_from(255) {
            Err(LockError::UnknownCadence { code: 255 }) => {}
            _ => panic!("Must return UnknownCadence error"),
        }
    }

    #[test]
    fn no_vesting_has_no_unit() {
        assert_eq!(None, ScheduleCadence::NoVesting.unit_seconds());
        assert_eq!(None, ScheduleCadence::NoVesting.unit_name());
        assert_eq!(Some(SECONDS_PER_MONTH), ScheduleCadence::Monthly.unit_seconds());
        assert_eq!(Some(30 * SECONDS_PER_DAY), ScheduleCadence::Monthly.unit_seconds());
        assert_eq!(Some(365 * SECONDS_PER_DAY), ScheduleCadence::Yearly.unit_seconds());
    }

    #[test]
    fn labels_parse() {
        assert_eq!(
            ScheduleCadence::NoVesting,
            "No Vesting".parse::<ScheduleCadence>().unwrap()
        );
        assert_eq!(
            ScheduleCadence::Daily,
            " Daily".parse::<ScheduleCadence>().unwrap()
        );
        assert!("Fortnightly".parse::<ScheduleCadence>().is_err());
        assert_eq!("Yearly", ScheduleCadence::Yearly.to_string());
    }
}
