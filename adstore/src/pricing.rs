//! Price labels shown on package cards.
//!
//! A price of zero is never shown as an amount: it reads "Free".

/// Formats an amount with integral values printed without a fractional part
/// (`499`, `149.5`). Unlike a browser, amounts of 1e21 and above still print
/// as plain digits rather than in exponent form.
pub fn format_amount(price: f64) -> String {
    format!("{}", price)
}

/// `Free` for zero, otherwise the currency-prefixed amount.
pub fn price_label(price: f64, currency: &str) -> String {
    if price == 0.0 {
        "Free".to_string()
    } else {
        format!("{}{}", currency, format_amount(price))
    }
}

/// Label of the card's action button.
pub fn action_label(price: f64, currency: &str) -> String {
    if price == 0.0 {
        "Choose (Free)".to_string()
    } else {
        format!("Choose for {}{}", currency, format_amount(price))
    }
}

/// The line under the package name, e.g. `30 days • ₹499`.
pub fn duration_line(duration: u32, price: f64, currency: &str) -> String {
    format!("{} days • {}", duration, price_label(price, currency))
}
