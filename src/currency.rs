//! Currency formatting

use rusty_money::{
    Money,
    iso::{self, Currency},
};

/// Currency every catalog price is stored in.
pub const STORE_CURRENCY: &Currency = iso::BRL;

/// Formats an amount using its currency's locale conventions, e.g. `R$10,00`.
pub fn format_currency(amount: &Money<'_, Currency>) -> String {
    format!("{amount}")
}

/// Formats an amount as a deduction, e.g. `-R$1,00`.
pub fn format_discount(amount: &Money<'_, Currency>) -> String {
    format!("-{}", format_currency(amount))
}

/// Formats a minor-unit amount in the store currency.
pub fn format_minor(minor: i64) -> String {
    format_currency(&Money::from_minor(minor, STORE_CURRENCY))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_store_symbol() {
        let formatted = format_minor(10_00);

        assert!(formatted.starts_with("R$"), "unexpected format: {formatted}");
        assert!(formatted.contains("10"), "unexpected format: {formatted}");
    }

    #[test]
    fn discount_is_prefixed_with_minus() {
        let amount = Money::from_minor(1_00, STORE_CURRENCY);

        assert_eq!(
            format_discount(&amount),
            format!("-{}", format_currency(&amount))
        );
    }

    #[test]
    fn zero_is_formatted() {
        let formatted = format_minor(0);

        assert!(formatted.contains('0'), "unexpected format: {formatted}");
    }
}
