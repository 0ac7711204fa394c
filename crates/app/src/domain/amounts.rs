//! Conversions between stored amounts and [`Money`].
//!
//! Amounts are stored as non-negative `BIGINT` minor units and carried as `u64` in
//! records.

use std::num::TryFromIntError;

use foodcart::currency::STORE_CURRENCY;
use rusty_money::{Money, iso::Currency};
use sqlx::{Decode, Postgres, Row, Type, postgres::PgRow};

/// Money in the store currency for a stored amount.
///
/// # Errors
///
/// Returns an error when the amount does not fit an `i64`.
pub fn to_money(amount: u64) -> Result<Money<'static, Currency>, TryFromIntError> {
    Ok(Money::from_minor(i64::try_from(amount)?, STORE_CURRENCY))
}

/// Stored amount for a money value.
///
/// # Errors
///
/// Returns an error when the amount is negative.
pub fn from_money(money: &Money<'_, Currency>) -> Result<u64, TryFromIntError> {
    u64::try_from(money.to_minor_units())
}

/// Read a signed column into its unsigned counterpart.
pub(crate) fn try_get_unsigned<'r, S, U>(row: &'r PgRow, column: &str) -> Result<U, sqlx::Error>
where
    S: Decode<'r, Postgres> + Type<Postgres>,
    U: TryFrom<S, Error = TryFromIntError>,
{
    let value: S = row.try_get(column)?;

    U::try_from(value).map_err(|e| sqlx::Error::ColumnDecode {
        index: column.to_string(),
        source: Box::new(e),
    })
}

/// Convert an unsigned value into the signed type of the column it is bound to.
pub(crate) fn bind_signed<U, S>(value: U, column: &str) -> Result<S, sqlx::Error>
where
    S: TryFrom<U>,
    S::Error: std::fmt::Display,
{
    S::try_from(value).map_err(|e| sqlx::Error::Encode(format!("{column}: {e}").into()))
}
