use crate::errors::SummaryError;

/// ISO 4217 currency representation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CurrencyCode(pub String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().to_uppercase())
    }

    /// Accepts three ASCII letters, case-insensitively.
    pub fn parse(raw: &str) -> Result<Self, SummaryError> {
        let trimmed = raw.trim();
        if trimmed.len() == 3 && trimmed.chars().all(|ch| ch.is_ascii_alphabetic()) {
            Ok(Self::new(trimmed))
        } else {
            Err(SummaryError::InvalidConfig(format!(
                "`{}` is not a three-letter currency code",
                raw
            )))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("USD")
    }
}

/// Locale-aware number formatting preferences.
#[derive(Debug, Clone, PartialEq)]
pub struct LocaleConfig {
    pub language_tag: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            language_tag: "en-US".into(),
            decimal_separator: '.',
            grouping_separator: ',',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormatOptions {
    pub currency_display: CurrencyDisplay,
    pub negative_style: NegativeStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NegativeStyle {
    #[default]
    Sign,
    Parentheses,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CurrencyDisplay {
    #[default]
    Symbol,
    Code,
}

pub fn symbol_for(code: &str) -> String {
    match code {
        "USD" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        "JPY" => "¥".into(),
        "AUD" => "A$".into(),
        _ => code.into(),
    }
}

pub fn minor_units_for(code: &str) -> u8 {
    match code {
        "JPY" => 0,
        "KWD" | "BHD" => 3,
        _ => 2,
    }
}

pub fn format_number(locale: &LocaleConfig, value: f64, precision: u8) -> String {
    let body = format!("{:.*}", precision as usize, value);
    let (int_part, frac_part) = match body.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (body.as_str(), None),
    };
    let grouped = match int_part.strip_prefix('-') {
        Some(digits) => format!("-{}", group_digits(digits, locale.grouping_separator)),
        None => group_digits(int_part, locale.grouping_separator),
    };
    match frac_part {
        Some(frac) => format!("{}{}{}", grouped, locale.decimal_separator, frac),
        None => grouped,
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::new();
    for (count, ch) in digits.chars().rev().enumerate() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
    }
    grouped
}

/// Renders `amount` the way the summary report shows money, e.g. `$1,234.50`.
pub fn format_currency_value(
    amount: f64,
    code: &CurrencyCode,
    locale: &LocaleConfig,
    options: &FormatOptions,
) -> String {
    let precision = minor_units_for(code.as_str());
    let body = format_number(locale, amount.abs(), precision);
    let prefixed = match options.currency_display {
        CurrencyDisplay::Symbol => format!("{}{}", symbol_for(code.as_str()), body),
        CurrencyDisplay::Code => format!("{} {}", code.as_str(), body),
    };
    // Rounding can turn a tiny negative into zero; never print "-$0.00".
    let is_negative = amount < 0.0 && body.chars().any(|ch| ch.is_ascii_digit() && ch != '0');
    if !is_negative {
        return prefixed;
    }
    match options.negative_style {
        NegativeStyle::Sign => format!("-{}", prefixed),
        NegativeStyle::Parentheses => format!("({})", prefixed),
    }
}

/// Bare numeric form written to the totals log: `150`, `100.5`, `0`.
pub fn format_plain_total(value: f64) -> String {
    if value == 0.0 {
        // Collapses -0.0.
        return "0".to_string();
    }
    value.to_string()
}
