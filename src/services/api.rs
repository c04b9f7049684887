use crate::models::{
    currency::Currency,
    error::AppError,
    rates::{ConversionResult, HistoricalQuery, HistoricalSeries, RateSnapshot},
};
use serde::{Deserialize, Serialize};

// CONSTANTS
const BASE_URL: &str = "http://localhost:8000/api";

/// Currency codes served when the backend cannot be reached.
const FALLBACK_CURRENCIES: [&str; 4] = ["EUR", "USD", "EGP", "DZD"];

// API CONFIGURATION
/// Configuration for the rates API client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    /// Constructs the URL for a conversion request.
    pub fn convert_url(&self, amount: f64, from: Currency, to: Currency) -> String {
        format!(
            "{}/convert?amount={amount}&from={}&to={}",
            self.base_url,
            from.code(),
            to.code()
        )
    }

    /// Constructs the URL for the latest rates of a base currency.
    pub fn latest_url(&self, base: Currency) -> String {
        format!("{}/latest?base={}", self.base_url, base.code())
    }

    /// Constructs the URL for a historical query at any granularity.
    pub fn historical_url(&self, query: &HistoricalQuery, base: Currency) -> String {
        match query {
            HistoricalQuery::Day { date } => {
                format!("{}/historical?date={date}&base={}", self.base_url, base.code())
            }
            HistoricalQuery::Month { year, month } => format!(
                "{}/historical/month?year={year}&month={month}&base={}",
                self.base_url,
                base.code()
            ),
            HistoricalQuery::Year { year } => format!(
                "{}/historical/year?year={year}&base={}",
                self.base_url,
                base.code()
            ),
        }
    }

    /// Constructs the URL for the currency list.
    pub fn currencies_url(&self) -> String {
        format!("{}/currencies", self.base_url)
    }

    /// Constructs the URL that triggers an ETL run.
    pub fn etl_run_url(&self) -> String {
        format!("{}/etl/run", self.base_url)
    }

    /// Constructs the URL reporting ETL status.
    pub fn etl_status_url(&self) -> String {
        format!("{}/etl/status", self.base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfigBuilder::default().build()
    }
}

// API CONFIGURATION BUILDER
/// Builder for constructing an `ApiConfig` with custom settings.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
}

impl ApiConfigBuilder {
    /// Sets a custom base URL (primarily for testing).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Builds the `ApiConfig`.
    pub fn build(self) -> ApiConfig {
        ApiConfig {
            base_url: self.base_url.unwrap_or_else(|| BASE_URL.to_string()),
        }
    }
}

// API RESPONSE TYPES
#[derive(Deserialize, Debug)]
struct CurrenciesResponse {
    currencies: Vec<String>,
}

/// Request body for triggering an ETL run over a date range.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct EtlRunRequest {
    pub start_date: String,
    pub end_date: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct EtlRunResponse {
    pub status: String,
    #[serde(default)]
    pub detail: Option<String>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct EtlStatus {
    pub state: String,
    #[serde(default)]
    pub last_run: Option<String>,
}

// RATES CLIENT
/// HTTP client for the currency rates backend.
///
/// Explicitly constructed and passed where needed; there is no module-level
/// singleton, so tests can point an instance at a stub server via
/// `ApiConfig::builder().base_url(..)`.
pub struct RatesClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl RatesClient {
    /// Creates a new client with default configuration.
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(ApiConfig::default())
    }

    /// Creates a new client with the specified configuration.
    pub fn with_config(config: ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Returns a reference to the client's configuration.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Converts an amount between two currencies.
    pub async fn convert(&self, amount: f64, from: Currency, to: Currency) -> Result<f64, AppError> {
        let url = self.config.convert_url(amount, from, to);
        let response: ConversionResult = self.get_json(&url).await?;
        Ok(response.result)
    }

    /// Fetches the latest rates for a base currency.
    pub async fn latest_rates(&self, base: Currency) -> Result<RateSnapshot, AppError> {
        let url = self.config.latest_url(base);
        self.get_json(&url).await
    }

    /// Fetches a historical series at the resolution carried by `query`.
    pub async fn historical_rates(
        &self,
        query: &HistoricalQuery,
        base: Currency,
    ) -> Result<HistoricalSeries, AppError> {
        let url = self.config.historical_url(query, base);
        self.get_json(&url).await
    }

    /// Fetches the available currency codes, falling back to the fixed set
    /// when the backend is unreachable or returns garbage.
    pub async fn currencies(&self) -> Vec<String> {
        let url = self.config.currencies_url();
        match self.get_json::<CurrenciesResponse>(&url).await {
            Ok(response) if !response.currencies.is_empty() => response.currencies,
            Ok(_) => FALLBACK_CURRENCIES.map(String::from).to_vec(),
            Err(e) => {
                gloo::console::warn!(&format!(
                    "Failed to fetch currencies, using default set: {e}"
                ));
                FALLBACK_CURRENCIES.map(String::from).to_vec()
            }
        }
    }

    /// Triggers an ETL run for the given date range.
    pub async fn trigger_etl(
        &self,
        start_date: &str,
        end_date: &str,
    ) -> Result<EtlRunResponse, AppError> {
        let url = self.config.etl_run_url();
        let body = EtlRunRequest {
            start_date: start_date.to_string(),
            end_date: end_date.to_string(),
        };

        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        self.decode(response).await
    }

    /// Fetches the current ETL job status.
    pub async fn etl_status(&self) -> Result<EtlStatus, AppError> {
        let url = self.config.etl_status_url();
        self.get_json(&url).await
    }

    /// Executes a single GET and decodes the JSON body.
    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, AppError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        self.decode(response).await
    }

    async fn decode<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, AppError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(self.error_for_status(status, &body));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to parse response: {e}")))
    }

    /// Converts a reqwest error into an appropriate `AppError`.
    fn classify_error(&self, error: reqwest::Error) -> AppError {
        if error.is_timeout() {
            AppError::ApiError(format!("Request timeout: {error}"))
        } else if error.is_request() {
            AppError::ApiError(format!("Request error: {error}"))
        } else {
            AppError::ApiError(format!("Network error: {error}"))
        }
    }

    /// Creates an error based on HTTP status code.
    fn error_for_status(&self, status: reqwest::StatusCode, body: &str) -> AppError {
        match status.as_u16() {
            429 => AppError::RateLimited,
            401 | 403 => AppError::AuthError(format!("Authentication failed: {status}")),
            404 => AppError::NotFound(format!("Resource not found: {body}")),
            400..=499 => AppError::ApiError(format!("Client error {status}: {body}")),
            500..=599 => AppError::ApiError(format!("Server error {status}: {body}")),
            _ => AppError::ApiError(format!("Unexpected status {status}: {body}")),
        }
    }
}

// CONVENIENCE FUNCTIONS
/// Converts an amount using default configuration.
pub async fn fetch_conversion(amount: f64, from: Currency, to: Currency) -> Result<f64, AppError> {
    RatesClient::new()?.convert(amount, from, to).await
}

/// Fetches the latest rates for a base currency using default configuration.
pub async fn fetch_latest_rates(base: Currency) -> Result<RateSnapshot, AppError> {
    RatesClient::new()?.latest_rates(base).await
}

/// Fetches a historical series using default configuration.
pub async fn fetch_historical_rates(
    query: &HistoricalQuery,
    base: Currency,
) -> Result<HistoricalSeries, AppError> {
    RatesClient::new()?.historical_rates(query, base).await
}

/// Fetches the currency list using default configuration.
pub async fn fetch_currencies() -> Vec<String> {
    match RatesClient::new() {
        Ok(client) => client.currencies().await,
        Err(_) => FALLBACK_CURRENCIES.map(String::from).to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder_defaults() {
        let config = ApiConfig::builder().build();
        assert_eq!(config.latest_url(Currency::Eur), format!("{BASE_URL}/latest?base=EUR"));
    }

    #[test]
    fn test_config_builder_custom_base_url() {
        let config = ApiConfig::builder().base_url("http://stub:9999/api").build();
        assert!(config.currencies_url().starts_with("http://stub:9999/api"));
    }

    #[test]
    fn test_convert_url_construction() {
        let config = ApiConfig::builder().build();
        let url = config.convert_url(100.0, Currency::Eur, Currency::Usd);
        assert!(url.contains("/convert?"));
        assert!(url.contains("amount=100"));
        assert!(url.contains("from=EUR"));
        assert!(url.contains("to=USD"));
    }

    #[test]
    fn test_historical_url_per_granularity() {
        let config = ApiConfig::builder().build();

        let day = config.historical_url(
            &HistoricalQuery::Day {
                date: "2024-03-15".to_string(),
            },
            Currency::Eur,
        );
        assert!(day.contains("/historical?date=2024-03-15&base=EUR"));

        let month = config.historical_url(
            &HistoricalQuery::Month {
                year: 2024,
                month: 3,
            },
            Currency::Eur,
        );
        assert!(month.contains("/historical/month?year=2024&month=3&base=EUR"));

        let year = config.historical_url(&HistoricalQuery::Year { year: 2024 }, Currency::Usd);
        assert!(year.contains("/historical/year?year=2024&base=USD"));
    }

    #[test]
    fn test_etl_request_serialization() {
        let body = EtlRunRequest {
            start_date: "2024-01-01".to_string(),
            end_date: "2024-01-31".to_string(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["start_date"], "2024-01-01");
        assert_eq!(json["end_date"], "2024-01-31");
    }

    #[test]
    fn test_etl_status_parsing() {
        let json = r#"{"state": "idle", "last_run": "2024-01-31T00:00:00Z"}"#;
        let status: EtlStatus = serde_json::from_str(json).unwrap();
        assert_eq!(status.state, "idle");
        assert!(status.last_run.is_some());

        let json = r#"{"state": "running"}"#;
        let status: EtlStatus = serde_json::from_str(json).unwrap();
        assert_eq!(status.last_run, None);
    }
}
