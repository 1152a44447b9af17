//! Price formatting for integer minor-unit amounts.

use serde::Serialize;

/// Display rules for one locale/currency pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceFormat {
    pub code: &'static str,
    pub symbol: &'static str,
    /// Fraction digits shown after dividing by 100; at most 2
    pub fraction_digits: u32,
    pub group_separator: char,
    pub decimal_separator: char,
}

impl PriceFormat {
    /// en-US dollars: `$1,234.50`
    pub const USD: PriceFormat = PriceFormat {
        code: "USD",
        symbol: "$",
        fraction_digits: 2,
        group_separator: ',',
        decimal_separator: '.',
    };

    /// es-CL pesos: `$12.000`
    pub const CLP: PriceFormat = PriceFormat {
        code: "CLP",
        symbol: "$",
        fraction_digits: 0,
        group_separator: '.',
        decimal_separator: ',',
    };

    pub fn from_code(code: &str) -> Option<PriceFormat> {
        match code.to_ascii_uppercase().as_str() {
            "USD" => Some(Self::USD),
            "CLP" => Some(Self::CLP),
            _ => None,
        }
    }

    /// Renders `minor_units / 100` as a currency string. Dropped fraction
    /// digits are rounded half away from zero.
    pub fn format(&self, minor_units: i64) -> String {
        let digits = self.fraction_digits.min(2);
        let step = 10u64.pow(2 - digits);
        let magnitude = minor_units.unsigned_abs();
        let scaled = (magnitude + step / 2) / step;

        let unit = 10u64.pow(digits);
        let whole = group_digits(scaled / unit, self.group_separator);
        let sign = if minor_units < 0 && scaled > 0 { "-" } else { "" };

        if digits == 0 {
            format!("{sign}{}{whole}", self.symbol)
        } else {
            format!(
                "{sign}{}{whole}{}{:0width$}",
                self.symbol,
                self.decimal_separator,
                scaled % unit,
                width = digits as usize
            )
        }
    }
}

impl Default for PriceFormat {
    fn default() -> Self {
        Self::USD
    }
}

fn group_digits(value: u64, separator: char) -> String {
    let raw = value.to_string();
    let mut out = String::with_capacity(raw.len() + raw.len() / 3);
    for (i, ch) in raw.chars().enumerate() {
        if i > 0 && (raw.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

/// Formats a product price given in minor units with the default format.
///
/// ```
/// use storefront_mock::currency::format_price;
///
/// assert_eq!(format_price(1000), "$10.00");
/// assert_eq!(format_price(1550), "$15.50");
/// ```
pub fn format_price(minor_units: i64) -> String {
    PriceFormat::default().format(minor_units)
}
