//! Amount parsing and pre-lock validation.

use crate::error::LockError;

/// Convert a human-entered amount such as `"100.5"` or `"100,5"` into raw
/// token units. Exact decimal arithmetic; no floating point.
pub fn parse_ui_amount(text: &str, decimals: u8) -> Result<u64, LockError> {
    let normalized = text.trim().replace(',', ".");
    if normalized.starts_with('-') {
        return Err(invalid("amount must be positive"));
    }

    let (whole, fraction) = normalized
        .split_once('.')
        .unwrap_or((normalized.as_str(), ""));
    if whole.is_empty() && fraction.is_empty() {
        return Err(invalid("amount is empty"));
    }
    if !is_digits(whole) || !is_digits(fraction) {
        return Err(LockError::InvalidAmount(format!(
            "not a number: {:?}",
            text.trim()
        )));
    }
    if fraction.len() > usize::from(decimals) {
        return Err(LockError::InvalidAmount(format!(
            "at most {decimals} decimal places allowed"
        )));
    }

    let overflow = || invalid("amount is too large");
    let scale = 10u64.checked_pow(u32::from(decimals)).ok_or_else(overflow)?;
    let whole_raw = parse_digits(whole).ok_or_else(overflow)?;
    let fraction_scale = 10u64
        .checked_pow(u32::from(decimals) - fraction.len() as u32)
        .ok_or_else(overflow)?;
    let fraction_raw = parse_digits(fraction)
        .and_then(|f| f.checked_mul(fraction_scale))
        .ok_or_else(overflow)?;

    let raw = whole_raw
        .checked_mul(scale)
        .and_then(|w| w.checked_add(fraction_raw))
        .ok_or_else(overflow)?;
    if raw == 0 {
        return Err(invalid("amount must be > 0"));
    }
    Ok(raw)
}

/// Check a `(balance, decimals)` lookup result against the amount to lock.
///
/// A missing token account and an empty one are reported differently so the
/// caller can tell the user which it is.
pub fn check_lockable(balance: (Option<u64>, u8), amount: u64) -> Result<(), LockError> {
    let available = balance.0.ok_or(LockError::NoTokenAccount)?;
    if amount == 0 {
        return Err(invalid("lock amount must be > 0"));
    }
    if available < amount {
        return Err(LockError::InsufficientFunds {
            requested: amount,
            available,
        });
    }
    Ok(())
}

fn invalid(reason: &str) -> LockError {
    LockError::InvalidAmount(reason.into())
}

fn is_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

fn parse_digits(s: &str) -> Option<u64> {
    if s.is_empty() {
        return Some(0);
    }
    s.parse().ok()
}
