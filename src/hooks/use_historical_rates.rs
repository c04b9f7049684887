use std::cell::Cell;
use std::rc::Rc;
use yew::prelude::*;

use crate::models::currency::Currency;
use crate::models::rates::{Granularity, HistoricalSeries};
use crate::services::api::fetch_historical_rates;
use wasm_bindgen_futures::spawn_local;

/// The one user-facing string any failed historical fetch maps to; the
/// underlying error goes to the console only.
pub const FETCH_ERROR_MESSAGE: &str = "Failed to fetch historical data. Please try again.";

#[derive(Clone, PartialEq, Debug)]
pub enum HistoricalState {
    Loading,
    Loaded(Rc<HistoricalSeries>),
    Error(String),
}

impl HistoricalState {
    /// Returns the series if it is loaded
    pub const fn data(&self) -> Option<&Rc<HistoricalSeries>> {
        match self {
            Self::Loaded(series) => Some(series),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Fetches a historical series whenever the granularity or date changes.
/// The currency filter is deliberately not a dependency; filtering happens
/// at render time over the already-fetched series.
#[hook]
pub fn use_historical_rates(
    granularity: Granularity,
    date: String,
    base: Currency,
) -> UseStateHandle<HistoricalState> {
    let state = use_state(|| HistoricalState::Loading);

    {
        let state = state.clone();

        use_effect_with((granularity, date, base), move |(granularity, date, base)| {
            let state = state.clone();
            let query = granularity.query_for(date);
            let base = *base;
            let aborted = Rc::new(Cell::new(false));
            let aborted_check = aborted.clone();

            state.set(HistoricalState::Loading);

            spawn_local(async move {
                let result = match query {
                    // A malformed date never reaches the network
                    Err(e) => Err(e),
                    Ok(query) => fetch_historical_rates(&query, base).await,
                };

                match result {
                    Ok(series) if !aborted_check.get() => {
                        state.set(HistoricalState::Loaded(Rc::new(series)));
                    }
                    Err(e) if !aborted_check.get() => {
                        gloo::console::error!(&format!("Failed to fetch historical rates: {e}"));
                        state.set(HistoricalState::Error(FETCH_ERROR_MESSAGE.to_string()));
                    }
                    _ => {} // Superseded by a newer fetch, discard the result
                }
            });

            move || {
                aborted.set(true);
            }
        });
    }

    state
}
