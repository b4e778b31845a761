use std::time::Duration;

use cosmwasm_std::Timestamp;

use crate::msg::LockInfo;
use crate::schedule::{remaining, TimeRemaining};

/// How often a view should call [`Countdown::tick`].
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    Running(TimeRemaining),
    Elapsed,
}

/// Countdown state owned by a single view. Dropping it is what releases the
/// view's timer.
#[derive(Clone, Debug, PartialEq)]
pub struct Countdown {
    target: Timestamp,
    last: Option<TimeRemaining>,
    active: bool,
}

impl Countdown {
    pub fn new(target: Timestamp) -> Self {
        Countdown {
            target,
            last: None,
            active: true,
        }
    }

    pub fn target(&self) -> Timestamp {
        self.target
    }

    /// False once the target has passed; the owning view stops its timer.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Value computed by the latest running tick.
    pub fn last(&self) -> Option<TimeRemaining> {
        self.last
    }

    pub fn tick(&mut self, now: Timestamp) -> Tick {
        if !self.active {
            return Tick::Elapsed;
        }
        match remaining(now, self.target) {
            Some(left) => {
                self.last = Some(left);
                Tick::Running(left)
            }
            None => {
                self.active = false;
                self.last = None;
                Tick::Elapsed
            }
        }
    }

    /// A new target restarts the countdown from scratch.
    pub fn retarget(&mut self, target: Timestamp) {
        self.target = target;
        self.last = None;
        self.active = true;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecipientCheck {
    Correct,
    Wrong,
}

impl RecipientCheck {
    pub fn message(&self) -> &'static str {
        match self {
            RecipientCheck::Correct => "Correct address",
            RecipientCheck::Wrong => "Wrong address",
        }
    }
}

/// Whether the connected wallet is the one that can withdraw an unlocked
/// lock. Addresses compare case-insensitively.
pub fn check_recipient(lock: &LockInfo, account: Option<&str>) -> RecipientCheck {
    match account {
        Some(account) if account.eq_ignore_ascii_case(&lock.recipient) => RecipientCheck::Correct,
        _ => RecipientCheck::Wrong,
    }
}
