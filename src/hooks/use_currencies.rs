use std::rc::Rc;
use yew::prelude::*;

use crate::models::currency::Currency;
use crate::services::api::fetch_currencies;
use wasm_bindgen_futures::spawn_local;

/// Fetches the available currency list once on mount. Unknown codes from the
/// backend are ignored; on any failure the fixed four-currency set stands.
#[hook]
pub fn use_currencies() -> UseStateHandle<Rc<Vec<Currency>>> {
    let currencies = use_state(|| Rc::new(Currency::all().to_vec()));

    {
        let currencies = currencies.clone();

        use_effect_with((), move |()| {
            spawn_local(async move {
                let codes = fetch_currencies().await;
                let known: Vec<Currency> = codes
                    .iter()
                    .filter_map(|code| code.parse::<Currency>().ok())
                    .collect();

                if !known.is_empty() {
                    currencies.set(Rc::new(known));
                }
            });

            || ()
        });
    }

    currencies
}
