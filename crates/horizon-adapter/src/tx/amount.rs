/*
[INPUT]:  XLM amounts as decimals
[OUTPUT]: Validated stroop amounts for operations
[POS]:    Transaction layer - amount conversion
[UPDATE]: When amount validation rules change
*/

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::http::{HorizonError, Result};

/// Stroops per lumen
pub const STROOPS_PER_XLM: i64 = 10_000_000;

/// Minimum per-operation fee, in stroops
pub const BASE_FEE_STROOPS: u32 = 100;

/// Convert an XLM amount to stroops.
///
/// Rejects negative amounts, amounts with sub-stroop precision, and amounts
/// that do not fit the ledger's i64 representation.
pub fn xlm_to_stroops(amount: Decimal) -> Result<i64> {
    if amount.is_sign_negative() {
        return Err(HorizonError::Amount(format!(
            "amount must not be negative: {amount}"
        )));
    }

    let stroops = amount
        .checked_mul(Decimal::from(STROOPS_PER_XLM))
        .ok_or_else(|| HorizonError::Amount(format!("amount out of range: {amount}")))?;

    if stroops.fract() != Decimal::ZERO {
        return Err(HorizonError::Amount(format!(
            "amount has sub-stroop precision: {amount}"
        )));
    }

    stroops
        .to_i64()
        .ok_or_else(|| HorizonError::Amount(format!("amount does not fit in stroops: {amount}")))
}

/// Convert stroops back to an XLM amount
pub fn stroops_to_xlm(stroops: i64) -> Decimal {
    Decimal::from(stroops) / Decimal::from(STROOPS_PER_XLM)
}
