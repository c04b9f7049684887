#[cfg(test)]
mod tests {
    use fx_dashboard::components::converter::{CompletedConversion, ConvertState};
    use fx_dashboard::hooks::use_historical_rates::{
        FETCH_ERROR_MESSAGE as HISTORICAL_ERROR_MESSAGE, HistoricalState,
    };
    use fx_dashboard::hooks::use_latest_rates::{
        FETCH_ERROR_MESSAGE as RATES_ERROR_MESSAGE, RatesState,
    };
    use fx_dashboard::models::{
        currency::Currency,
        error::AppError,
        rates::{ConversionResult, Granularity, HistoricalQuery, HistoricalSeries, RateSnapshot},
    };
    use fx_dashboard::services::api::ApiConfig;
    use fx_dashboard::utils::format::{format_converted, format_rate, parse_amount};
    use std::rc::Rc;

    // Helper function to build a latest-rates snapshot from JSON
    fn create_test_snapshot() -> RateSnapshot {
        serde_json::from_str(
            r#"{
                "rates": {"USD": 1.08, "EGP": 52.3},
                "timestamp": 1700000000
            }"#,
        )
        .unwrap()
    }

    // Helper function to build a two-day historical series
    fn create_test_series() -> HistoricalSeries {
        serde_json::from_str(
            r#"{
                "rates": {
                    "2024-03-14": {"USD": 1.09, "EGP": 51.8, "DZD": 145.2},
                    "2024-03-15": {"USD": 1.08, "EGP": 52.3}
                },
                "timestamp": 1710500000
            }"#,
        )
        .unwrap()
    }

    // ===== Error Type Tests =====

    #[test]
    fn test_app_error_api_display() {
        let error = AppError::ApiError("Connection refused".to_string());
        assert_eq!(error.to_string(), "API error: Connection refused");
    }

    #[test]
    fn test_app_error_not_found_display() {
        let error = AppError::NotFound("no rates for 2024-03-15".to_string());
        assert_eq!(error.to_string(), "Not found: no rates for 2024-03-15");
    }

    // ===== Currency Tests =====

    #[test]
    fn test_currency_set_is_fixed() {
        let all = Currency::all();
        assert_eq!(all.len(), 4);
        assert!(all.contains(&Currency::Eur));
        assert!(all.contains(&Currency::Usd));
        assert!(all.contains(&Currency::Egp));
        assert!(all.contains(&Currency::Dzd));
    }

    #[test]
    fn test_currency_display_includes_name() {
        assert_eq!(Currency::Egp.to_string(), "EGP (Egyptian Pound)");
    }

    #[test]
    fn test_selector_labels_carry_long_names() {
        // The dropdowns label each option "Name (CODE)"
        let labels: Vec<String> = Currency::all()
            .iter()
            .map(|c| format!("{} ({})", c.name(), c.code()))
            .collect();

        assert!(labels.contains(&"Euro (EUR)".to_string()));
        assert!(labels.contains(&"US Dollar (USD)".to_string()));
        assert!(labels.contains(&"Egyptian Pound (EGP)".to_string()));
        assert!(labels.contains(&"Algerian Dinar (DZD)".to_string()));
    }

    // ===== Conversion Tests =====

    #[test]
    fn test_conversion_result_deserialization() {
        let result: ConversionResult = serde_json::from_str(r#"{"result": 108.4321}"#).unwrap();
        assert_eq!(result.result, 108.4321);
        assert_eq!(format_converted(result.result), "108.4321");
    }

    #[test]
    fn test_invalid_amounts_never_reach_the_network() {
        // The converter only issues a request when parse_amount yields a value
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("twelve"), None);
        assert_eq!(parse_amount("-1"), None);
        assert!(parse_amount("250.75").is_some());
    }

    #[test]
    fn test_completed_conversion_keeps_its_inputs() {
        // The result line reads the captured submission, so later edits to
        // the form state cannot relabel it
        let state = ConvertState::Done(CompletedConversion {
            amount: "100".to_string(),
            from: Currency::Eur,
            to: Currency::Usd,
            result: 108.4321,
        });

        let ConvertState::Done(conversion) = &state else {
            panic!("expected a completed conversion");
        };
        assert_eq!(conversion.amount, "100");
        assert_eq!(conversion.from, Currency::Eur);
        assert_eq!(conversion.to, Currency::Usd);
        assert_eq!(format_converted(conversion.result), "108.4321");
    }

    // ===== Snapshot Model Tests =====

    #[test]
    fn test_snapshot_renders_two_six_decimal_rows() {
        let snapshot = create_test_snapshot();

        let rows: Vec<_> = snapshot.rows().collect();
        assert_eq!(rows.len(), 2);

        // BTreeMap keys give deterministic code ordering
        assert_eq!(rows[0].0, "EGP");
        assert_eq!(format_rate(rows[0].1), "52.300000");
        assert_eq!(rows[1].0, "USD");
        assert_eq!(format_rate(rows[1].1), "1.080000");
    }

    #[test]
    fn test_snapshot_timestamp_is_human_readable() {
        let snapshot = create_test_snapshot();
        assert_eq!(snapshot.formatted_timestamp(), "2023-11-14 22:13:20 UTC");
    }

    #[test]
    fn test_empty_snapshot() {
        let snapshot: RateSnapshot =
            serde_json::from_str(r#"{"rates": {}, "timestamp": 0}"#).unwrap();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.rows().count(), 0);
    }

    // ===== Historical Series Tests =====

    #[test]
    fn test_series_rows_follow_date_order() {
        let series = create_test_series();
        let rows = series.filtered_rows(&[Currency::Usd]);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].date, "2024-03-14");
        assert_eq!(rows[1].date, "2024-03-15");
    }

    #[test]
    fn test_filter_toggle_excludes_exactly_that_currency() {
        let series = create_test_series();

        let both = series.filtered_rows(&[Currency::Usd, Currency::Egp]);
        assert_eq!(both[0].values, vec![Some(1.09), Some(51.8)]);

        // Toggling EGP off drops only the EGP column
        let usd_only = series.filtered_rows(&[Currency::Usd]);
        assert_eq!(usd_only[0].values, vec![Some(1.09)]);
    }

    #[test]
    fn test_missing_rate_yields_gap_not_row_loss() {
        let series = create_test_series();
        let rows = series.filtered_rows(&[Currency::Dzd]);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].values, vec![Some(145.2)]);
        assert_eq!(rows[1].values, vec![None]); // rendered as N/A
    }

    #[test]
    fn test_day_rows_are_filtered_to_selection() {
        let series = create_test_series();

        let rows = series.day_rows(&[Currency::Usd, Currency::Egp]);
        assert_eq!(rows.len(), 2);

        let rows = series.day_rows(&[Currency::Usd]);
        assert_eq!(rows, vec![("USD".to_string(), 1.09)]);

        let rows = series.day_rows(&[]);
        assert!(rows.is_empty());
    }

    // ===== Granularity / URL Tests =====

    #[test]
    fn test_month_granularity_derives_year_and_month() {
        // Selecting "month" with date 2024-03-15 must request year=2024, month=3
        let query = Granularity::Month.query_for("2024-03-15").unwrap();
        let url = ApiConfig::builder()
            .build()
            .historical_url(&query, Currency::Eur);

        assert!(url.contains("/historical/month?"));
        assert!(url.contains("year=2024"));
        assert!(url.contains("month=3"));
    }

    #[test]
    fn test_year_granularity_derives_year_only() {
        let query = Granularity::Year.query_for("2024-03-15").unwrap();
        let url = ApiConfig::builder()
            .build()
            .historical_url(&query, Currency::Eur);

        assert!(url.contains("/historical/year?year=2024&base=EUR"));
        assert!(!url.contains("month="));
    }

    #[test]
    fn test_day_granularity_forwards_the_date() {
        let query = Granularity::Day.query_for("2024-03-15").unwrap();
        let url = ApiConfig::builder()
            .build()
            .historical_url(&query, Currency::Eur);

        assert!(url.contains("/historical?date=2024-03-15&base=EUR"));
    }

    #[test]
    fn test_malformed_date_fails_before_any_request() {
        assert!(Granularity::Month.query_for("2024-03").is_err());
        assert!(matches!(
            Granularity::Day.query_for("15/03/2024"),
            Err(AppError::DataError(_))
        ));
    }

    // ===== Fetch State Tests =====

    #[test]
    fn test_rates_state_data_extraction() {
        let snapshot = Rc::new(create_test_snapshot());
        let loaded = RatesState::Loaded(snapshot.clone());

        assert!(loaded.data().is_some());
        assert_eq!(loaded.data().unwrap(), &snapshot);
        assert!(!loaded.is_loading());
        assert!(loaded.error().is_none());

        let loading = RatesState::Loading;
        assert!(loading.is_loading());
        assert!(loading.data().is_none());

        // A failed fetch carries only the error text; there is no snapshot
        // left over to render alongside it
        let error = RatesState::Error(RATES_ERROR_MESSAGE.to_string());
        assert!(error.data().is_none());
        assert_eq!(error.error(), Some(RATES_ERROR_MESSAGE));
    }

    #[test]
    fn test_failed_fetches_surface_exactly_the_generic_text() {
        // The hooks map any failure to one fixed user-facing string; the
        // underlying error detail goes to the console, never into the state
        assert_eq!(
            RATES_ERROR_MESSAGE,
            "Failed to fetch exchange rates. Please try again."
        );
        assert_eq!(
            HISTORICAL_ERROR_MESSAGE,
            "Failed to fetch historical data. Please try again."
        );

        let state = RatesState::Error(RATES_ERROR_MESSAGE.to_string());
        assert_eq!(state.error(), Some(RATES_ERROR_MESSAGE));

        let state = HistoricalState::Error(HISTORICAL_ERROR_MESSAGE.to_string());
        assert!(state.data().is_none());
    }

    #[test]
    fn test_historical_state_data_extraction() {
        let series = Rc::new(create_test_series());
        let loaded = HistoricalState::Loaded(series.clone());

        assert_eq!(loaded.data().unwrap(), &series);
        assert!(HistoricalState::Loading.data().is_none());
        assert!(HistoricalState::Error("boom".to_string()).data().is_none());
    }

    #[test]
    fn test_state_equality() {
        assert_eq!(RatesState::Loading, RatesState::Loading);
        assert_eq!(
            RatesState::Error("x".to_string()),
            RatesState::Error("x".to_string())
        );

        let a = RatesState::Loaded(Rc::new(create_test_snapshot()));
        let b = RatesState::Loaded(Rc::new(create_test_snapshot()));
        assert_eq!(a, b);
    }
}
