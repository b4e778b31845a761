pub mod amount;
pub mod cadence;
pub mod config;
pub mod countdown;
pub mod error;
pub mod form;
pub mod gateway;
pub mod msg;
pub mod schedule;

mod mock;

pub use crate::cadence::ScheduleCadence;
pub use crate::error::LockError;
pub use crate::gateway::{LockClient, LockGateway};
pub use crate::msg::{LockInfo, LockRequest};
pub use crate::schedule::{convert, display_rate, remaining, TimeRemaining, TimeUnits};
