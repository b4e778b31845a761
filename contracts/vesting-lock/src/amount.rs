use std::str::FromStr;

use cosmwasm_std::{Decimal, Uint128};

use crate::error::LockError;

/// GAS has 18 decimals, the same precision as `Decimal`, so a `Decimal`
/// amount's atomics are exactly its value in wei.
pub const GAS_DECIMALS: u32 = 18;
pub const NATIVE_SYMBOL: &str = "GAS";

/// Parse a user-entered GAS amount such as `"100"` or `"0.25"`.
pub fn parse_amount(input: &str) -> Result<Decimal, LockError> {
    Decimal::from_str(input.trim()).map_err(|_| LockError::InvalidAmount {
        amount: input.to_string(),
    })
}

pub fn to_wei(amount: Decimal) -> Uint128 {
    amount.atomics()
}

pub fn from_wei(wei: Uint128) -> Decimal {
    Decimal::new(wei)
}

/// Fixed-point rendering with exactly `places` fractional digits, rounding
/// half up. Always uses `.` and never groups digits.
pub fn format_fixed(value: Decimal, places: u32) -> String {
    let places = places.min(GAS_DECIMALS);
    let atomics = value.atomics().u128();
    let scale = 10u128.pow(GAS_DECIMALS - places);

    let mut units = atomics / scale;
    if (atomics % scale) * 2 >= scale {
        units += 1;
    }

    if places == 0 {
        return units.to_string();
    }
    let unit = 10u128.pow(places);
    format!(
        "{}.{:0width$}",
        units / unit,
        units % unit,
        width = places as usize
    )
}

/// `format_fixed` of a wei amount followed by the token symbol.
pub fn format_gas(wei: Uint128, places: u32, symbol: &str) -> String {
    format!("{} {}", format_fixed(from_wei(wei), places), symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn parse_amounts() {
        assert_eq!(dec("100"), parse_amount("100").unwrap());
        assert_eq!(dec("0.25"), parse_amount(" 0.25 ").unwrap());

        for bad in &["", "abc", "-1", "1e5", "0.1234567890123456789"] {
            match parse_amount(bad) {
                Err(LockError::InvalidAmount { amount }) => assert_eq!(*bad, amount),
                _ => panic!("Must return InvalidAmount error for {:?}", bad),
            }
        }
    }

    #[test]
    fn wei_conversion_is_exact() {
        let amount = dec("1.5");
        let wei = to_wei(amount);
        assert_eq!(Uint128::new(1_500_000_000_000_000_000), wei);
        assert_eq!(amount, from_wei(wei));
        assert_eq!(Uint128::new(1), to_wei(dec("0.000000000000000001")));
    }

    #[test]
    fn fixed_formatting() {
        assert_eq!("100.00", format_fixed(dec("100"), 2));
        assert_eq!("0.00", format_fixed(Decimal::zero(), 2));
        assert_eq!("1234567.89", format_fixed(dec("1234567.891"), 2));
        assert_eq!("0.01", format_fixed(dec("0.005"), 2));
        assert_eq!("0.00", format_fixed(dec("0.0049"), 2));
        assert_eq!("2.00", format_fixed(dec("1.999"), 2));
        assert_eq!("3", format_fixed(dec("2.5"), 0));
        assert_eq!("0.000000000000000001", format_fixed(dec("0.000000000000000001"), 18));
    }

    #[test]
    fn gas_formatting() {
        let wei = Uint128::new(1_500_000_000_000_000_000);
        assert_eq!("1.5000 GAS", format_gas(wei, 4, NATIVE_SYMBOL));
        assert_eq!("0.0000 GAS", format_gas(Uint128::zero(), 4, NATIVE_SYMBOL));
        assert_eq!("12.35 Gas", format_gas(Uint128::new(12_345_000_000_000_000_000), 2, "Gas"));
    }
}
