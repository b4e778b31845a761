use cosmwasm_schema::cw_serde;

use crate::amount::{GAS_DECIMALS, NATIVE_SYMBOL};
use crate::error::LockError;

pub const NEOX_CHAIN_ID: u64 = 47763;
pub const NEOX_RPC_URL: &str = "https://mainnet-1.rpc.banelabs.org";
pub const LOCK_CONTRACT_ADDRESS: &str = "0xa071891F15A4c76E3788cd373eB0B17621Eceb41";

/// Where the lock contract lives and how its native token is displayed.
#[cw_serde]
pub struct GatewayConfig {
    pub contract_address: String,
    pub chain_id: u64,
    pub rpc_url: String,
    pub symbol: String,
    pub decimals: u32,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        GatewayConfig {
            contract_address: LOCK_CONTRACT_ADDRESS.to_string(),
            chain_id: NEOX_CHAIN_ID,
            rpc_url: NEOX_RPC_URL.to_string(),
            symbol: NATIVE_SYMBOL.to_string(),
            decimals: GAS_DECIMALS,
        }
    }
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<(), LockError> {
        validate_address(&self.contract_address)?;
        if self.decimals != GAS_DECIMALS {
            return Err(LockError::Gateway {
                msg: format!("unsupported token decimals {}", self.decimals),
            });
        }
        Ok(())
    }
}

/// Checks the `0x` + 40 hex digits shape of an account address. Checksum
/// casing is not verified.
pub fn validate_address(address: &str) -> Result<(), LockError> {
    let valid = address
        .strip_prefix("0x")
        .map(|hex| hex.len() == 40 && hex.chars().all(|c| c.is_ascii_hexdigit()))
        .unwrap_or(false);
    if valid {
        Ok(())
    } else {
        Err(LockError::InvalidAddress {
            address: address.to_string(),
        })
    }
}
