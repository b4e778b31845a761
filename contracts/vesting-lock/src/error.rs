use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LockError {
    #[error("{0}")]
    Std(#[from] StdError),

    /// The contract returned a schedule code outside the known cadences.
    /// Points at a contract/interface mismatch, not at user input.
    #[error("Unknown cadence code {code}")]
    UnknownCadence { code: u8 },

    #[error("Invalid amount: {amount}")]
    InvalidAmount { amount: String },

    #[error("Send some GAS to lock funds")]
    EmptyAmount {},

    #[error("Invalid address: {address}")]
    InvalidAddress { address: String },

    #[error("Unlock time must be in the future")]
    UnlockInPast {},

    #[error("No wallet connected")]
    WalletNotConnected {},

    #[error("Lock {lock_id} not found")]
    LockNotFound { lock_id: Uint128 },

    #[error("Gateway error: {msg}")]
    Gateway { msg: String },
}
