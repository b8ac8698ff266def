use crate::core::registry::Registry;
use crate::domain::model::{BillingRates, Boat};
use crate::utils::error::{MarinaError, Result};

/// 單艘船的月費：船長（呎）× 該存放方式的每呎費率
pub fn monthly_charge(boat: &Boat, rates: &BillingRates) -> f64 {
    boat.length * rates.rate_for(&boat.placement)
}

/// 對清單內每艘船累加當月費用
pub fn accrue_monthly_charges(registry: &mut Registry, rates: &BillingRates) {
    for boat in registry.iter_mut() {
        let charge = monthly_charge(boat, rates);
        boat.amount_owed += charge;
    }
}

/// 收款：金額必須為正且不得超過欠款，成功時回傳新餘額
pub fn apply_payment(boat: &mut Boat, amount: f64) -> Result<f64> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(MarinaError::InvalidPaymentError { amount });
    }
    if amount > boat.amount_owed {
        return Err(MarinaError::PaymentExceedsBalanceError {
            amount,
            owed: boat.amount_owed,
        });
    }
    boat.amount_owed -= amount;
    Ok(boat.amount_owed)
}
