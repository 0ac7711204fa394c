//! Pricing arithmetic

use decimal_percentage::Percentage;
use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use rusty_money::{Money, MoneyError, iso::Currency};
use thiserror::Error;

/// Errors that can occur while pricing products or carts.
#[derive(Debug, Error, PartialEq)]
pub enum PricingError {
    /// Discount percentages must be within `0..=100`.
    #[error("discount percentage {0} is outside 0..=100")]
    InvalidDiscount(u8),

    /// Percentage calculation could not be safely converted.
    #[error("percentage conversion overflowed")]
    PercentConversion,

    /// Multiplying by a quantity overflowed the minor-unit range.
    #[error("amount overflowed while multiplying by quantity {0}")]
    Overflow(u32),

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Converts whole percentage points (`10` meaning 10%) into a [`Percentage`].
///
/// # Errors
///
/// Returns [`PricingError::InvalidDiscount`] when `points` is above 100.
pub fn percentage_from_points(points: u8) -> Result<Percentage, PricingError> {
    if points > 100 {
        return Err(PricingError::InvalidDiscount(points));
    }

    Ok(Percentage::from(Decimal::from(points) / Decimal::ONE_HUNDRED))
}

/// Calculates `percent` of `price`, rounded to the nearest minor unit.
///
/// # Errors
///
/// Returns [`PricingError::PercentConversion`] if the result cannot be represented in minor units.
pub fn percent_of<'a>(
    price: &Money<'a, Currency>,
    percent: Percentage,
) -> Result<Money<'a, Currency>, PricingError> {
    let minor = percent_of_minor(percent, price.to_minor_units())?;

    Ok(Money::from_minor(minor, price.currency()))
}

/// Multiplies a unit amount by a quantity.
///
/// # Errors
///
/// Returns [`PricingError::Overflow`] if the product exceeds the minor-unit range.
pub fn times<'a>(
    unit: &Money<'a, Currency>,
    quantity: u32,
) -> Result<Money<'a, Currency>, PricingError> {
    let minor = unit
        .to_minor_units()
        .checked_mul(i64::from(quantity))
        .ok_or(PricingError::Overflow(quantity))?;

    Ok(Money::from_minor(minor, unit.currency()))
}

/// Sums amounts, starting from zero in `currency`.
///
/// # Errors
///
/// Returns [`PricingError::Money`] on a currency mismatch or arithmetic failure.
pub fn sum<'a>(
    currency: &'a Currency,
    amounts: impl IntoIterator<Item = Result<Money<'a, Currency>, PricingError>>,
) -> Result<Money<'a, Currency>, PricingError> {
    amounts
        .into_iter()
        .try_fold(Money::from_minor(0, currency), |acc, amount| {
            Ok(acc.add(amount?)?)
        })
}

fn percent_of_minor(percent: Percentage, minor: i64) -> Result<i64, PricingError> {
    let fraction = percent * Decimal::ONE;

    let Some(applied) = fraction.checked_mul(Decimal::from(minor)) else {
        return Err(PricingError::PercentConversion);
    };

    applied
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or(PricingError::PercentConversion)
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::BRL;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn ten_percent_of_ten() -> TestResult {
        let price = Money::from_minor(10_00, BRL);

        let discount = percent_of(&price, percentage_from_points(10)?)?;

        assert_eq!(discount, Money::from_minor(1_00, BRL));

        Ok(())
    }

    #[test]
    fn rounds_half_cents_away_from_zero() -> TestResult {
        let price = Money::from_minor(15, BRL);

        let discount = percent_of(&price, percentage_from_points(50)?)?;

        assert_eq!(discount.to_minor_units(), 8);

        Ok(())
    }

    #[test]
    fn rejects_points_above_one_hundred() {
        assert!(matches!(
            percentage_from_points(101),
            Err(PricingError::InvalidDiscount(101))
        ));
    }

    #[test]
    fn times_multiplies_minor_units() -> TestResult {
        let unit = Money::from_minor(20_00, BRL);

        assert_eq!(times(&unit, 2)?, Money::from_minor(40_00, BRL));

        Ok(())
    }

    #[test]
    fn times_reports_overflow() {
        let unit = Money::from_minor(i64::MAX, BRL);

        assert!(matches!(times(&unit, 2), Err(PricingError::Overflow(2))));
    }

    #[test]
    fn sum_of_nothing_is_zero() -> TestResult {
        let total = sum(BRL, std::iter::empty())?;

        assert_eq!(total, Money::from_minor(0, BRL));

        Ok(())
    }
}
