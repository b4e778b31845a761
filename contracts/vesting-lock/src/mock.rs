#![cfg(test)]

use std::collections::HashMap;

use cosmwasm_std::{to_json_binary, Binary, Uint128};

use crate::error::LockError;
use crate::gateway::{LockGateway, TxStatus};
use crate::msg::{ExecuteMsg, QueryMsg, RawLockInfo, WithdrawableResponse};

pub const ALICE: &str = "0xA11ce00000000000000000000000000000000001";
pub const BOB: &str = "0xb0b0000000000000000000000000000000000002";

/// In-memory stand-in for a wallet connected to the lock contract.
#[derive(Default)]
pub struct MockGateway {
    pub account: Option<String>,
    pub balances: HashMap<String, Uint128>,
    pub locks: HashMap<u128, RawLockInfo>,
    pub withdrawable: HashMap<u128, Uint128>,
    pub submitted: Vec<(String, ExecuteMsg, Uint128)>,
    pub statuses: HashMap<String, TxStatus>,
}

impl MockGateway {
    pub fn connected(account: &str) -> Self {
        MockGateway {
            account: Some(account.to_string()),
            ..MockGateway::default()
        }
    }

    pub fn add_lock(
        &mut self,
        id: u128,
        owner: &str,
        recipient: &str,
        code: u8,
        unlock_time: u64,
        amount: u128,
    ) {
        let raw = RawLockInfo(
            owner.to_string(),
            recipient.to_string(),
            Uint128::new(amount),
            100,
            unlock_time,
            code,
            Uint128::new(amount),
        );
        self.locks.insert(id, raw);
    }

    pub fn set_withdrawable(&mut self, id: u128, amount: u128) {
        self.withdrawable.insert(id, Uint128::new(amount));
    }
}

impl LockGateway for MockGateway {
    fn account(&self) -> Option<String> {
        self.account.clone()
    }

    fn balance(&self, address: &str) -> Result<Uint128, LockError> {
        Ok(self.balances.get(address).copied().unwrap_or_default())
    }

    fn query(&self, _contract: &str, msg: &QueryMsg) -> Result<Binary, LockError> {
        match msg {
            QueryMsg::GetLockInfo { lock_id } => {
                // the contract answers unknown ids with a zeroed record
                let raw = self.locks.get(&lock_id.u128()).cloned().unwrap_or_else(|| {
                    RawLockInfo(
                        String::new(),
                        String::new(),
                        Uint128::zero(),
                        0,
                        0,
                        0,
                        Uint128::zero(),
                    )
                });
                Ok(to_json_binary(&raw)?)
            }
            QueryMsg::CalculateWithdrawableAmount { lock_id } => {
                let amount = self.withdrawable.get(&lock_id.u128()).copied().unwrap_or_default();
                Ok(to_json_binary(&WithdrawableResponse { amount })?)
            }
        }
    }

    fn execute(
        &mut self,
        contract: &str,
        msg: &ExecuteMsg,
        funds: Uint128,
    ) -> Result<String, LockError> {
        if self.account.is_none() {
            return Err(LockError::Gateway {
                msg: "wallet rejected the request".to_string(),
            });
        }
        self.submitted.push((contract.to_string(), msg.clone(), funds));
        let tx_hash = format!("0x{:064x}", self.submitted.len());
        self.statuses.insert(tx_hash.clone(), TxStatus::Pending {});
        Ok(tx_hash)
    }

    fn tx_status(&self, tx_hash: &str) -> Result<TxStatus, LockError> {
        self.statuses
            .get(tx_hash)
            .cloned()
            .ok_or_else(|| LockError::Gateway {
                msg: format!("unknown transaction {}", tx_hash),
            })
    }
}
