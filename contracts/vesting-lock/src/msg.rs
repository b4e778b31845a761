use std::str::FromStr;

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Decimal, Timestamp, Uint128};
use schemars::JsonSchema;
use serde::ser::SerializeTuple;
use serde::{Deserialize, Serialize, Serializer};

use crate::amount::{from_wei, to_wei};
use crate::cadence::ScheduleCadence;
use crate::error::LockError;
use crate::schedule::{self, TimeRemaining};

#[cw_serde]
pub enum ExecuteMsg {
    /// Lock the attached GAS until `unlock_time` (unix seconds), released per
    /// `schedule` code
    CreateLock {
        unlock_time: u64,
        schedule: u8,
        recipient: String,
    },
    /// Withdraw the releasable part of a lock
    Withdraw { lock_id: Uint128 },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Returns the lock record as a positional tuple
    #[returns(RawLockInfo)]
    GetLockInfo { lock_id: Uint128 },
    /// Returns how much of the lock can be withdrawn right now
    #[returns(WithdrawableResponse)]
    CalculateWithdrawableAmount { lock_id: Uint128 },
}

/// Lock record exactly as the contract returns it:
/// `(owner, recipient, total_amount, lock_time, unlock_time, schedule, remaining_amount)`.
/// Times are unix seconds and amounts are wei. An empty owner means the lock
/// does not exist.
#[derive(Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct RawLockInfo(
    pub String,
    pub String,
    pub Uint128,
    pub u64,
    pub u64,
    pub u8,
    pub Uint128,
);

// Encoded as a plain JSON array; the cosmwasm serializer has no tuple struct
// support.
impl Serialize for RawLockInfo {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(7)?;
        tuple.serialize_element(&self.0)?;
        tuple.serialize_element(&self.1)?;
        tuple.serialize_element(&self.2)?;
        tuple.serialize_element(&self.3)?;
        tuple.serialize_element(&self.4)?;
        tuple.serialize_element(&self.5)?;
        tuple.serialize_element(&self.6)?;
        tuple.end()
    }
}

impl RawLockInfo {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cw_serde]
pub struct WithdrawableResponse {
    pub amount: Uint128,
}

#[cw_serde]
pub struct LockInfo {
    pub owner: String,
    pub recipient: String,
    /// Wei
    pub total_amount: Uint128,
    pub lock_time: Timestamp,
    pub unlock_time: Timestamp,
    pub cadence: ScheduleCadence,
    /// Wei still held by the lock
    pub remaining_amount: Uint128,
}

impl TryFrom<RawLockInfo> for LockInfo {
    type Error = LockError;

    fn try_from(raw: RawLockInfo) -> Result<Self, Self::Error> {
        let RawLockInfo(owner, recipient, total_amount, lock_time, unlock_time, code, remaining) =
            raw;
        Ok(LockInfo {
            owner,
            recipient,
            total_amount,
            lock_time: Timestamp::from_seconds(lock_time),
            unlock_time: Timestamp::from_seconds(unlock_time),
            cadence: ScheduleCadence::from_code(code)?,
            remaining_amount: remaining,
        })
    }
}

impl LockInfo {
    /// An unlock time before the lock time counts as already unlocked.
    pub fn remaining(&self, now: Timestamp) -> Option<TimeRemaining> {
        if self.unlock_time < self.lock_time {
            return None;
        }
        schedule::remaining(now, self.unlock_time)
    }

    pub fn is_unlocked(&self, now: Timestamp) -> bool {
        self.remaining(now).is_none()
    }

    /// Release rate of the amount still held over the time still left.
    pub fn display_rate(&self, now: Timestamp) -> String {
        schedule::display_rate(
            Some(from_wei(self.remaining_amount)),
            Some(self.cadence),
            self.remaining(now),
        )
    }
}

/// A lock the connected wallet wants to create. Built by the form, handed to
/// the gateway, never stored.
#[cw_serde]
pub struct LockRequest {
    /// GAS, up to 18 decimals
    pub amount: Decimal,
    pub lock_time: Timestamp,
    pub unlock_time: Timestamp,
    pub cadence: ScheduleCadence,
    pub recipient: String,
}

impl LockRequest {
    /// Payable value attached to `create_lock`, in wei.
    pub fn value(&self) -> Uint128 {
        to_wei(self.amount)
    }

    pub fn unlock_rate(&self) -> Option<Decimal> {
        schedule::unlock_rate(self.amount, self.cadence, self.lock_time, self.unlock_time)
    }

    pub fn to_msg(&self) -> ExecuteMsg {
        ExecuteMsg::CreateLock {
            unlock_time: self.unlock_time.seconds(),
            schedule: self.cadence.to_code(),
            recipient: self.recipient.clone(),
        }
    }
}

pub fn parse_lock_id(input: &str) -> Result<Uint128, LockError> {
    Ok(Uint128::from_str(input.trim())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::{from_json, to_json_binary, to_json_string};

    const OWNER: &str = "0x1111111111111111111111111111111111111111";
    const RECIPIENT: &str = "0x2222222222222222222222222222222222222222";

    fn raw(code: u8) -> RawLockInfo {
        RawLockInfo(
            OWNER.to_string(),
            RECIPIENT.to_string(),
            Uint128::new(100_000_000_000_000_000_000),
            1_000,
            1_000 + 2 * 86_400,
            code,
            Uint128::new(100_000_000_000_000_000_000),
        )
    }

    #[test]
    fn execute_msg_shape() {
        let request = LockRequest {
            amount: Decimal::from_str("2.5").unwrap(),
            lock_time: Timestamp::from_seconds(1_000),
            unlock_time: Timestamp::from_nanos(1_700_000_000_500_000_000),
            cadence: ScheduleCadence::Weekly,
            recipient: RECIPIENT.to_string(),
        };
        assert_eq!(Uint128::new(2_500_000_000_000_000_000), request.value());

        let json = to_json_string(&request.to_msg()).unwrap();
        assert_eq!(
            format!(
                r#"{{"create_lock":{{"unlock_time":1700000000,"schedule":2,"recipient":"{}"}}}}"#,
                RECIPIENT
            ),
            json
        );

        let json = to_json_string(&ExecuteMsg::Withdraw {
            lock_id: Uint128::new(7),
        })
        .unwrap();
        assert_eq!(r#"{"withdraw":{"lock_id":"7"}}"#, json);
    }

    #[test]
    fn raw_lock_info_decodes_by_position() {
        let json = format!(
            r#"["{}","{}","1500000000000000000",100,200,1,"500000000000000000"]"#,
            OWNER, RECIPIENT
        );
        let raw: RawLockInfo = from_json(json.as_bytes()).unwrap();
        assert!(!raw.is_empty());

        let info = LockInfo::try_from(raw).unwrap();
        assert_eq!(OWNER, info.owner);
        assert_eq!(RECIPIENT, info.recipient);
        assert_eq!(Uint128::new(1_500_000_000_000_000_000), info.total_amount);
        assert_eq!(Timestamp::from_seconds(100), info.lock_time);
        assert_eq!(Timestamp::from_seconds(200), info.unlock_time);
        assert_eq!(ScheduleCadence::Daily, info.cadence);
        assert_eq!(Uint128::new(500_000_000_000_000_000), info.remaining_amount);
    }

    #[test]
    fn raw_lock_info_encodes_as_array() {
        let json = to_json_string(&raw(4)).unwrap();
        assert_eq!(
            format!(
                r#"["{}","{}","100000000000000000000",1000,173800,4,"100000000000000000000"]"#,
                OWNER, RECIPIENT
            ),
            json
        );

        let bin = to_json_binary(&raw(4)).unwrap();
        let decoded: RawLockInfo = from_json(&bin).unwrap();
        assert_eq!(raw(4), decoded);
        assert_eq!(ScheduleCadence::Yearly, LockInfo::try_from(decoded).unwrap().cadence);
    }

    #[test]
    fn unknown_cadence_fails_decode() {
        match LockInfo::try_from(raw(9)) {
            Err(LockError::UnknownCadence { code: 9 }) => {}
            _ => panic!("Must return UnknownCadence error"),
        }
    }

    #[test]
    fn lock_info_countdown_and_rate() {
        let info = LockInfo::try_from(raw(1)).unwrap();

        let now = Timestamp::from_seconds(1_000);
        assert_eq!(2, info.remaining(now).unwrap().days);
        assert_eq!("50.00 GAS/day", info.display_rate(now));
        assert!(!info.is_unlocked(now));

        let later = Timestamp::from_seconds(1_000 + 2 * 86_400);
        assert!(info.is_unlocked(later));
        assert_eq!("-", info.display_rate(later));
    }

    #[test]
    fn unlock_before_lock_counts_as_unlocked() {
        let mut raw = raw(1);
        raw.3 = 5_000;
        raw.4 = 4_000;
        let info = LockInfo::try_from(raw).unwrap();
        assert_eq!(None, info.remaining(Timestamp::from_seconds(0)));
    }

    #[test]
    fn lock_ids() {
        assert_eq!(Uint128::new(42), parse_lock_id(" 42 ").unwrap());
        match parse_lock_id("forty-two") {
            Err(LockError::Std(_)) => {}
            _ => panic!("Must return Std error"),
        }
    }

    #[test]
    fn query_response_schemas() {
        let schemas = QueryMsg::response_schemas().unwrap();
        assert!(schemas.contains_key("get_lock_info"));
        assert!(schemas.contains_key("calculate_withdrawable_amount"));
    }
}
