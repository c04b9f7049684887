use gloo_storage::Storage;
use yew::prelude::*;

use crate::models::currency::Currency;

/// Handle returned by `use_base_currency` hook
#[derive(Clone, PartialEq)]
pub struct BaseCurrencyHandle {
    pub base: Currency,
    pub set_base: Callback<Currency>,
}

/// Custom hook for the rates-table base currency with localStorage persistence
#[hook]
pub fn use_base_currency() -> BaseCurrencyHandle {
    // Load base from localStorage, fallback to default (EUR)
    let base = use_state(|| load_base_preference().unwrap_or_default());

    // Effect: Persist base currency to localStorage on change
    {
        let base_value = *base;
        use_effect_with(base_value, move |base| {
            save_base_preference(*base);
            || ()
        });
    }

    // Set base callback
    let set_base = {
        let base = base.clone();
        Callback::from(move |new_base| base.set(new_base))
    };

    BaseCurrencyHandle {
        base: *base,
        set_base,
    }
}

/// Load base currency preference from localStorage
fn load_base_preference() -> Option<Currency> {
    gloo_storage::LocalStorage::get("base_currency").ok()
}

/// Save base currency preference to localStorage
fn save_base_preference(base: Currency) {
    if let Err(e) = gloo_storage::LocalStorage::set("base_currency", base) {
        gloo::console::warn!(&format!("Failed to save base currency: {e:?}"));
    }
}
