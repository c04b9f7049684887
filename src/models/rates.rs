use super::currency::Currency;
use super::error::AppError;
use crate::utils::format::format_epoch;
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Response body of the conversion endpoint.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ConversionResult {
    pub result: f64,
}

/// Latest rates for a single base currency, replaced wholesale on every fetch.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RateSnapshot {
    pub rates: BTreeMap<String, f64>,
    pub timestamp: i64,
}

impl RateSnapshot {
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Rate rows in code order.
    pub fn rows(&self) -> impl Iterator<Item = (&str, f64)> {
        self.rates.iter().map(|(code, rate)| (code.as_str(), *rate))
    }

    pub fn formatted_timestamp(&self) -> String {
        format_epoch(self.timestamp)
    }
}

/// Historical rates keyed by ISO date. A day query yields a single key,
/// month and year queries yield one key per stored day.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct HistoricalSeries {
    pub rates: BTreeMap<String, BTreeMap<String, f64>>,
    pub timestamp: i64,
}

/// One row of the date x currency matrix; `values` is parallel to the
/// selected currency list, `None` where the backend has no rate stored.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesRow {
    pub date: String,
    pub values: Vec<Option<f64>>,
}

impl HistoricalSeries {
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Projects the series onto the selected currencies, in date order.
    /// Pure view over the fetched data; never refetches or mutates.
    pub fn filtered_rows(&self, selected: &[Currency]) -> Vec<SeriesRow> {
        self.rates
            .iter()
            .map(|(date, rates)| SeriesRow {
                date: date.clone(),
                values: selected
                    .iter()
                    .map(|currency| rates.get(currency.code()).copied())
                    .collect(),
            })
            .collect()
    }

    /// Rate rows for the first (single) day in the series, filtered to the
    /// selected currencies. Used by the day-granularity table.
    pub fn day_rows(&self, selected: &[Currency]) -> Vec<(String, f64)> {
        self.rates
            .values()
            .next()
            .map(|rates| {
                rates
                    .iter()
                    .filter(|(code, _)| selected.iter().any(|c| c.code() == code.as_str()))
                    .map(|(code, rate)| (code.clone(), *rate))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn formatted_timestamp(&self) -> String {
        format_epoch(self.timestamp)
    }
}

/// Historical query resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Granularity {
    #[default]
    Day,
    Month,
    Year,
}

impl Granularity {
    pub fn label(&self) -> &'static str {
        match self {
            Granularity::Day => "Day",
            Granularity::Month => "Month",
            Granularity::Year => "Year",
        }
    }

    pub fn all() -> &'static [Granularity] {
        &[Granularity::Day, Granularity::Month, Granularity::Year]
    }

    /// Derives the backend query parameters from a `YYYY-MM-DD` date string.
    /// An unparseable date is an error before any request is issued.
    pub fn query_for(self, date: &str) -> Result<HistoricalQuery, AppError> {
        let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|e| AppError::DataError(format!("Invalid date '{date}': {e}")))?;

        use chrono::Datelike;
        Ok(match self {
            Granularity::Day => HistoricalQuery::Day {
                date: date.to_string(),
            },
            Granularity::Month => HistoricalQuery::Month {
                year: parsed.year(),
                month: parsed.month(),
            },
            Granularity::Year => HistoricalQuery::Year {
                year: parsed.year(),
            },
        })
    }
}

/// Fully derived parameters for one historical request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoricalQuery {
    Day { date: String },
    Month { year: i32, month: u32 },
    Year { year: i32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_query_derivation() {
        let query = Granularity::Month.query_for("2024-03-15").unwrap();
        assert_eq!(
            query,
            HistoricalQuery::Month {
                year: 2024,
                month: 3
            }
        );
    }

    #[test]
    fn test_year_query_derivation() {
        let query = Granularity::Year.query_for("2024-03-15").unwrap();
        assert_eq!(query, HistoricalQuery::Year { year: 2024 });
    }

    #[test]
    fn test_day_query_passes_date_through() {
        let query = Granularity::Day.query_for("2023-11-01").unwrap();
        assert_eq!(
            query,
            HistoricalQuery::Day {
                date: "2023-11-01".to_string()
            }
        );
    }

    #[test]
    fn test_invalid_date_is_an_error() {
        assert!(Granularity::Day.query_for("not-a-date").is_err());
        assert!(Granularity::Month.query_for("2024-13-01").is_err());
        assert!(Granularity::Year.query_for("").is_err());
    }
}
