use crate::error::Error;
use crate::storage::BASIS_POINTS;

/// Check LTV ceiling and fee rate bounds
///
/// - ltv: (0, 10,000] basis points
/// - fee: [0, 10,000] basis points
pub fn validate_params(ltv_bps: i128, fee_bps: i128) -> Result<(), Error> {
    if ltv_bps <= 0 || ltv_bps > BASIS_POINTS {
        return Err(Error::InvalidParameters);
    }
    if fee_bps < 0 || fee_bps > BASIS_POINTS {
        return Err(Error::InvalidParameters);
    }
    Ok(())
}

pub fn require_positive(amount: i128) -> Result<(), Error> {
    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }
    Ok(())
}

/// Calculate usable collateral consumed by a borrow
///
/// Formula: ceil(principal × 10,000 / ltv)
///
/// Example:
/// - principal: 800,000
/// - ltv: 80% (8000 basis points)
/// - consumed: 800,000 / 0.8 = 1,000,000
pub fn calculate_collateral_required(principal: i128, ltv_bps: i128) -> Option<i128> {
    let scaled = principal.checked_mul(BASIS_POINTS)?;
    let quotient = scaled.checked_div(ltv_bps)?;
    if scaled.checked_rem(ltv_bps)? != 0 {
        quotient.checked_add(1)
    } else {
        Some(quotient)
    }
}

/// Calculate the fee charged on a newly borrowed principal
///
/// Formula: principal × fee / 10,000, rounded down
///
/// Example:
/// - principal: 800,000
/// - fee: 10% (1000 basis points)
/// - fee owed: 80,000
pub fn calculate_fee(principal: i128, fee_bps: i128) -> Option<i128> {
    principal.checked_mul(fee_bps)?.checked_div(BASIS_POINTS)
}

/// Subtract, rejecting results below zero as well as i128 overflow
pub fn checked_sub_non_negative(lhs: i128, rhs: i128) -> Result<i128, Error> {
    match lhs.checked_sub(rhs) {
        Some(result) if result >= 0 => Ok(result),
        _ => Err(Error::ArithmeticOverflow),
    }
}

pub fn checked_add(lhs: i128, rhs: i128) -> Result<i128, Error> {
    lhs.checked_add(rhs).ok_or(Error::ArithmeticOverflow)
}
