//! Client side of the lock contract.
//!
//! Wallet connection, call encoding, broadcasting and receipt polling belong
//! to whatever implements [`LockGateway`]; [`LockClient`] only turns typed
//! requests into contract messages and decodes what comes back.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{from_json, Binary, Uint128};
use tracing::{debug, info, warn};

use crate::amount::format_gas;
use crate::config::GatewayConfig;
use crate::error::LockError;
use crate::msg::{ExecuteMsg, LockInfo, LockRequest, QueryMsg, RawLockInfo, WithdrawableResponse};

/// Places shown for balances and lock amounts.
pub const DISPLAY_PLACES: u32 = 4;

#[cw_serde]
pub enum TxStatus {
    Pending {},
    Confirmed { block: u64 },
    Failed { reason: String },
}

/// Wallet and chain access, provided by the host application.
pub trait LockGateway {
    /// Address of the connected wallet, if any.
    fn account(&self) -> Option<String>;

    /// Native balance in wei.
    fn balance(&self, address: &str) -> Result<Uint128, LockError>;

    /// Read-only contract call, answered with the JSON encoded response.
    fn query(&self, contract: &str, msg: &QueryMsg) -> Result<Binary, LockError>;

    /// Signs and broadcasts a contract call carrying `funds` wei. Returns the
    /// transaction hash without waiting for confirmation.
    fn execute(
        &mut self,
        contract: &str,
        msg: &ExecuteMsg,
        funds: Uint128,
    ) -> Result<String, LockError>;

    fn tx_status(&self, tx_hash: &str) -> Result<TxStatus, LockError>;
}

pub struct LockClient<G> {
    gateway: G,
    config: GatewayConfig,
}

impl<G: LockGateway> LockClient<G> {
    pub fn new(gateway: G, config: GatewayConfig) -> Result<Self, LockError> {
        config.validate()?;
        Ok(LockClient { gateway, config })
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn account(&self) -> Option<String> {
        self.gateway.account()
    }

    fn sender(&self) -> Result<String, LockError> {
        self.gateway.account().ok_or(LockError::WalletNotConnected {})
    }

    /// Connected wallet balance, e.g. `"12.5000 GAS"`.
    pub fn balance_display(&self) -> Result<String, LockError> {
        let account = self.sender()?;
        let wei = self.gateway.balance(&account)?;
        Ok(format_gas(wei, DISPLAY_PLACES, &self.config.symbol))
    }

    pub fn lock_info(&self, lock_id: Uint128) -> Result<LockInfo, LockError> {
        debug!(%lock_id, "querying lock info");
        let res = self
            .gateway
            .query(&self.config.contract_address, &QueryMsg::GetLockInfo { lock_id })?;
        let raw: RawLockInfo = from_json(&res)?;
        if raw.is_empty() {
            warn!(%lock_id, "lock not found");
            return Err(LockError::LockNotFound { lock_id });
        }

        LockInfo::try_from(raw).map_err(|err| {
            warn!(%lock_id, error = %err, "lock info did not decode");
            err
        })
    }

    /// Wei the lock releases right now, as computed by the contract.
    pub fn withdrawable(&self, lock_id: Uint128) -> Result<Uint128, LockError> {
        debug!(%lock_id, "querying withdrawable amount");
        let res = self.gateway.query(
            &self.config.contract_address,
            &QueryMsg::CalculateWithdrawableAmount { lock_id },
        )?;
        let res: WithdrawableResponse = from_json(&res)?;
        Ok(res.amount)
    }

    pub fn withdrawable_display(&self, lock_id: Uint128) -> Result<String, LockError> {
        let wei = self.withdrawable(lock_id)?;
        Ok(format_gas(wei, DISPLAY_PLACES, &self.config.symbol))
    }

    pub fn create_lock(&mut self, request: &LockRequest) -> Result<String, LockError> {
        let sender = self.sender()?;
        let value = request.value();
        let tx_hash =
            self.gateway
                .execute(&self.config.contract_address, &request.to_msg(), value)?;

        info!(
            %sender,
            recipient = %request.recipient,
            cadence = %request.cadence,
            %value,
            %tx_hash,
            "create_lock submitted"
        );
        Ok(tx_hash)
    }

    pub fn withdraw(&mut self, lock_id: Uint128) -> Result<String, LockError> {
        let sender = self.sender()?;
        let tx_hash = self.gateway.execute(
            &self.config.contract_address,
            &ExecuteMsg::Withdraw { lock_id },
            Uint128::zero(),
        )?;

        info!(%sender, %lock_id, %tx_hash, "withdraw submitted");
        Ok(tx_hash)
    }

    pub fn tx_status(&self, tx_hash: &str) -> Result<TxStatus, LockError> {
        self.gateway.tx_status(tx_hash)
    }
}
