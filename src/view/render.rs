//! Plain-text cart rendering

use std::io;

use tabled::{
    builder::Builder,
    grid::config::HorizontalLine,
    settings::{Alignment, Style, Theme, object::Columns},
};
use thiserror::Error;

use super::{CartItemView, CartSummary, CartTotals};

/// Message shown for an empty cart.
pub const EMPTY_CART_MESSAGE: &str = "Your bag is empty.";

/// Errors that can occur while writing a cart summary.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Writing to the output failed.
    #[error("failed to write cart summary")]
    Io(#[from] io::Error),
}

impl CartSummary {
    /// Writes the summary as a table of lines followed by the totals block.
    ///
    /// # Errors
    ///
    /// Returns a [`RenderError`] if the output cannot be written.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), RenderError> {
        match self {
            CartSummary::Empty => writeln!(out, "{EMPTY_CART_MESSAGE}")?,
            CartSummary::Filled {
                items,
                totals,
                loading,
            } => {
                writeln!(out, "{}", items_table(items))?;
                write_totals(&mut out, totals)?;

                if *loading {
                    writeln!(out, "Submitting order...")?;
                }
            }
        }

        Ok(())
    }
}

fn items_table(items: &[CartItemView]) -> String {
    let mut builder = Builder::default();

    builder.push_record(["", "Item", "Qty", "Unit Price", "Total", "Before Discount"]);

    for (idx, item) in items.iter().enumerate() {
        builder.push_record([
            format!("#{:<3}", idx + 1),
            item.name.clone(),
            item.quantity.to_string(),
            item.unit_price.clone(),
            item.total.clone(),
            item.original_total.clone().unwrap_or_default(),
        ]);
    }

    let mut table = builder.build();
    let mut theme = Theme::from(Style::modern_rounded());

    theme.remove_horizontal_lines();
    theme.insert_horizontal_line(
        1,
        HorizontalLine::new(Some('─'), Some('┼'), Some('├'), Some('┤')),
    );

    table.with(theme);
    table.modify(Columns::new(2..6), Alignment::right());

    table.to_string()
}

fn write_totals(out: &mut impl io::Write, totals: &CartTotals) -> Result<(), RenderError> {
    let shipping = totals.shipping.to_string();

    let rows = [
        ("Subtotal:", totals.subtotal.as_str()),
        ("Discounts:", totals.discounts.as_str()),
        ("Delivery:", shipping.as_str()),
        ("Total:", totals.total.as_str()),
    ];

    let label_width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    let value_width = rows
        .iter()
        .map(|(_, value)| value.chars().count())
        .max()
        .unwrap_or(0);

    for (label, value) in rows {
        writeln!(out, " {label:>label_width$}  {value:>value_width$}")?;
    }

    Ok(())
}
