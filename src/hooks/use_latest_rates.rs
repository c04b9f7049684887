use std::cell::Cell;
use std::rc::Rc;
use yew::prelude::*;

use crate::models::currency::Currency;
use crate::models::rates::RateSnapshot;
use crate::services::api::fetch_latest_rates;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

/// The one user-facing string any failed rates fetch maps to; the
/// underlying error goes to the console only.
pub const FETCH_ERROR_MESSAGE: &str = "Failed to fetch exchange rates. Please try again.";

#[derive(Clone, PartialEq, Debug)]
pub enum RatesState {
    Loading,
    Loaded(Rc<RateSnapshot>),
    Error(String),
}

impl RatesState {
    /// Returns true if the state is loading
    pub fn is_loading(&self) -> bool {
        matches!(self, RatesState::Loading)
    }

    /// Returns the snapshot if it is loaded
    pub fn data(&self) -> Option<&Rc<RateSnapshot>> {
        match self {
            RatesState::Loaded(snapshot) => Some(snapshot),
            _ => None,
        }
    }

    /// Returns the error message if the fetch failed
    pub fn error(&self) -> Option<&str> {
        match self {
            RatesState::Error(msg) => Some(msg),
            _ => None,
        }
    }
}

#[hook]
pub fn use_latest_rates(base: Currency) -> UseStateHandle<RatesState> {
    let state = use_state(|| RatesState::Loading);
    let trigger = use_state(|| 0u32); // Polling trigger

    {
        let state = state.clone();
        let trigger_value = *trigger;

        use_effect_with((trigger_value, base), move |(_, base)| {
            let state = state.clone();
            let trigger = trigger.clone();
            let base = *base;
            let aborted = Rc::new(Cell::new(false));
            let aborted_check = aborted.clone();

            // Reset to loading when the base currency changes
            state.set(RatesState::Loading);

            spawn_local(async move {
                match fetch_latest_rates(base).await {
                    Ok(snapshot) if !aborted_check.get() => {
                        state.set(RatesState::Loaded(Rc::new(snapshot)));
                    }
                    Err(e) if !aborted_check.get() => {
                        gloo::console::error!(&format!("Failed to fetch latest rates: {e}"));
                        state.set(RatesState::Error(FETCH_ERROR_MESSAGE.to_string()));
                    }
                    _ => {} // Superseded by a newer fetch, discard the result
                }

                // Schedule next poll if enabled
                if crate::config::Config::ENABLE_AUTO_REFRESH && !aborted_check.get() {
                    TimeoutFuture::new(crate::config::Config::POLLING_INTERVAL_MS).await;
                    if !aborted_check.get() {
                        trigger.set(*trigger + 1); // Trigger next fetch
                    }
                }
            });

            move || {
                aborted.set(true);
            }
        });
    }

    state
}
