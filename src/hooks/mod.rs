pub mod use_base_currency;
pub mod use_currencies;
pub mod use_historical_rates;
pub mod use_latest_rates;
