//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`PHARMACY_*`)
//! 2. Defaults (this file)
//!
//! Configuration is read-only after initialization.

/// Application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigState {
    /// Shown in the header bar
    pub store_name: String,

    /// Currency symbol for the total stock value
    pub currency_symbol: String,

    /// Number of decimal places for money display
    pub currency_decimals: u8,
}

impl Default for ConfigState {
    fn default() -> Self {
        ConfigState {
            store_name: "Pharmacy Management System".to_string(),
            currency_symbol: "₹".to_string(),
            currency_decimals: 2,
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `PHARMACY_STORE_NAME`: Override the header title
    /// - `PHARMACY_CURRENCY_SYMBOL`: Override the currency symbol
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ConfigState::from_env`] with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = ConfigState::default();

        if let Some(store_name) = lookup("PHARMACY_STORE_NAME") {
            if !store_name.trim().is_empty() {
                config.store_name = store_name;
            }
        }

        if let Some(symbol) = lookup("PHARMACY_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        config
    }

    /// Formats an amount with the currency symbol.
    ///
    /// ## Example
    /// ```rust
    /// use pharmacy_desktop_lib::state::ConfigState;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(250.0), "₹250.00");
    /// ```
    pub fn format_currency(&self, amount: f64) -> String {
        let decimals = self.currency_decimals as usize;
        let sign = if amount < 0.0 { "-" } else { "" };
        format!(
            "{}{}{:.*}",
            sign,
            self.currency_symbol,
            decimals,
            amount.abs()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_positive() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(250.0), "₹250.00");
        assert_eq!(config.format_currency(5.0), "₹5.00");
        assert_eq!(config.format_currency(0.1 + 0.2), "₹0.30");
        assert_eq!(config.format_currency(0.0), "₹0.00");
    }

    #[test]
    fn test_format_currency_negative() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(-12.345), "-₹12.35");
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = ConfigState::from_lookup(|key| match key {
            "PHARMACY_STORE_NAME" => Some("City Chemist".to_string()),
            "PHARMACY_CURRENCY_SYMBOL" => Some("$".to_string()),
            _ => None,
        });
        assert_eq!(config.store_name, "City Chemist");
        assert_eq!(config.format_currency(1.5), "$1.50");
    }

    #[test]
    fn test_from_lookup_ignores_blank_store_name() {
        let config = ConfigState::from_lookup(|key| {
            (key == "PHARMACY_STORE_NAME").then(|| "   ".to_string())
        });
        assert_eq!(config, ConfigState::default());
    }
}
