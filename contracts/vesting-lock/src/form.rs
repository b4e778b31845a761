use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Decimal, Timestamp};

use crate::amount::{format_fixed, parse_amount, NATIVE_SYMBOL};
use crate::cadence::ScheduleCadence;
use crate::config::validate_address;
use crate::error::LockError;
use crate::msg::LockRequest;
use crate::schedule::{display_rate, remaining, TimeRemaining, PLACEHOLDER};

/// Raw input of the create-lock form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LockForm {
    /// Free text label; shown with the summary, never sent to the contract
    pub title: String,
    /// GAS amount as typed
    pub amount: String,
    pub unlock_at: Option<Timestamp>,
    pub cadence: ScheduleCadence,
    pub recipient: String,
}

/// What the form shows under its inputs; recomputed on every input change
/// and every countdown tick.
#[cw_serde]
pub struct ScheduleSummary {
    pub title: Option<String>,
    pub calculated_amount: String,
    pub unlock_date: Option<Timestamp>,
    pub unlock_rate: String,
    pub remaining: Option<TimeRemaining>,
}

impl LockForm {
    fn amount(&self) -> Option<Decimal> {
        if self.amount.trim().is_empty() {
            return None;
        }
        parse_amount(&self.amount).ok()
    }

    pub fn summary(&self, now: Timestamp) -> ScheduleSummary {
        let amount = self.amount();
        let remaining = self.unlock_at.and_then(|target| remaining(now, target));

        let title = self.title.trim();
        ScheduleSummary {
            title: (!title.is_empty()).then(|| title.to_string()),
            calculated_amount: match amount {
                Some(amount) => format!("{} {}", format_fixed(amount, 2), NATIVE_SYMBOL),
                None => PLACEHOLDER.to_string(),
            },
            unlock_date: self
                .unlock_at
                .map(|target| Timestamp::from_seconds(target.seconds())),
            unlock_rate: display_rate(amount, Some(self.cadence), remaining),
            remaining,
        }
    }

    /// Validates the input and builds the request handed to the gateway.
    /// Times are truncated to whole seconds, the contract's resolution.
    pub fn submit(&self, now: Timestamp, account: Option<&str>) -> Result<LockRequest, LockError> {
        if account.is_none() {
            return Err(LockError::WalletNotConnected {});
        }

        if self.amount.trim().is_empty() {
            return Err(LockError::EmptyAmount {});
        }
        let amount = parse_amount(&self.amount)?;
        if amount.is_zero() {
            return Err(LockError::EmptyAmount {});
        }

        let lock_time = Timestamp::from_seconds(now.seconds());
        let unlock_time = match self.unlock_at {
            Some(target) if target.seconds() > lock_time.seconds() => {
                Timestamp::from_seconds(target.seconds())
            }
            _ => return Err(LockError::UnlockInPast {}),
        };

        let recipient = self.recipient.trim();
        validate_address(recipient)?;

        Ok(LockRequest {
            amount,
            lock_time,
            unlock_time,
            cadence: self.cadence,
            recipient: recipient.to_string(),
        })
    }
}
