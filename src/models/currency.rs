use super::error::AppError;
use serde::{Deserialize, Serialize};

/// Currencies served by the rates backend.
/// The backend only tracks EUR crosses for this fixed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Currency {
    /// Euro
    #[default]
    Eur,
    /// US Dollar
    Usd,
    /// Egyptian Pound
    Egp,
    /// Algerian Dinar
    Dzd,
}

impl Currency {
    /// Returns the ISO 4217 code used in API parameters.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Eur => "EUR",
            Currency::Usd => "USD",
            Currency::Egp => "EGP",
            Currency::Dzd => "DZD",
        }
    }

    /// Returns a human-readable currency name.
    pub fn name(&self) -> &'static str {
        match self {
            Currency::Eur => "Euro",
            Currency::Usd => "US Dollar",
            Currency::Egp => "Egyptian Pound",
            Currency::Dzd => "Algerian Dinar",
        }
    }

    /// All available currencies.
    pub fn all() -> &'static [Currency] {
        &[Currency::Eur, Currency::Usd, Currency::Egp, Currency::Dzd]
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.code(), self.name())
    }
}

impl std::str::FromStr for Currency {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "EUR" => Ok(Currency::Eur),
            "USD" => Ok(Currency::Usd),
            "EGP" => Ok(Currency::Egp),
            "DZD" => Ok(Currency::Dzd),
            _ => Err(AppError::ConfigError(format!("Unknown currency code: {s}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_parsing() {
        assert_eq!("USD".parse::<Currency>().unwrap(), Currency::Usd);
        assert_eq!("usd".parse::<Currency>().unwrap(), Currency::Usd);
        assert!("GBP".parse::<Currency>().is_err());
    }

    #[test]
    fn test_currency_code_round_trip() {
        for currency in Currency::all() {
            assert_eq!(currency.code().parse::<Currency>().unwrap(), *currency);
        }
    }

    #[test]
    fn test_default_is_eur() {
        assert_eq!(Currency::default(), Currency::Eur);
    }
}
