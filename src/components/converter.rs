use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::currency_selector::CurrencySelector;
use crate::hooks::use_currencies::use_currencies;
use crate::models::currency::Currency;
use crate::services::api::fetch_conversion;
use crate::utils::format::{format_converted, parse_amount};
use wasm_bindgen_futures::spawn_local;

const VALIDATION_MESSAGE: &str = "Please enter a valid amount";
const CONVERSION_FAILED: &str = "Failed to convert currency. Please try again.";

/// A finished conversion, carrying the inputs it was submitted with.
/// Rendering reads these, not the live form state, so editing the amount or
/// selectors afterwards cannot relabel an old result.
#[derive(Clone, PartialEq, Debug)]
pub struct CompletedConversion {
    pub amount: String,
    pub from: Currency,
    pub to: Currency,
    pub result: f64,
}

/// Per-submission conversion state. A submit moves Idle/Done/Error into
/// Converting; the previous outcome is dropped at that point, so a result
/// and an error can never render together.
#[derive(Clone, PartialEq, Debug)]
pub enum ConvertState {
    Idle,
    Converting,
    Done(CompletedConversion),
    Error(String),
}

/// Conversion form: amount, from/to selectors, swap control, submit.
#[function_component(Converter)]
pub fn converter() -> Html {
    let amount = use_state(|| "1".to_string());
    let from = use_state(|| Currency::Eur);
    let to = use_state(|| Currency::Usd);
    let state = use_state(|| ConvertState::Idle);
    let currencies = use_currencies();

    let in_flight = matches!(*state, ConvertState::Converting);

    let on_amount_input = {
        let amount = amount.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            amount.set(target.value());
        })
    };

    let on_swap = {
        let from = from.clone();
        let to = to.clone();
        Callback::from(move |_: MouseEvent| {
            let previous_from = *from;
            from.set(*to);
            to.set(previous_from);
        })
    };

    let on_submit = {
        let amount = amount.clone();
        let from = from.clone();
        let to = to.clone();
        let state = state.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            // Invalid input never issues a request
            let Some(value) = parse_amount(&amount) else {
                state.set(ConvertState::Error(VALIDATION_MESSAGE.to_string()));
                return;
            };

            let amount_text = (*amount).clone();
            let from = *from;
            let to = *to;
            let state = state.clone();
            state.set(ConvertState::Converting);

            spawn_local(async move {
                match fetch_conversion(value, from, to).await {
                    Ok(converted) => {
                        state.set(ConvertState::Done(CompletedConversion {
                            amount: amount_text,
                            from,
                            to,
                            result: converted,
                        }));
                    }
                    Err(e) => {
                        gloo::console::error!(&format!("Conversion failed: {e}"));
                        state.set(ConvertState::Error(CONVERSION_FAILED.to_string()));
                    }
                }
            });
        })
    };

    html! {
        <div class="card converter-card">
            <div class="card-header">{"Currency Converter"}</div>
            <div class="card-body">
                <form onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="amount">{"Amount"}</label>
                        <input
                            type="number"
                            class="form-control"
                            id="amount"
                            value={(*amount).clone()}
                            oninput={on_amount_input}
                            min="0.01"
                            step="0.01"
                        />
                    </div>

                    <div class="currency-selectors">
                        <div class="form-group">
                            <label>{"From"}</label>
                            <CurrencySelector
                                selected={*from}
                                options={(*currencies).clone()}
                                on_change={Callback::from({
                                    let from = from.clone();
                                    move |c| from.set(c)
                                })}
                                label="Source currency"
                            />
                        </div>

                        <button
                            type="button"
                            class="swap-btn"
                            onclick={on_swap}
                            title="Swap currencies"
                        >
                            {"\u{21C4}"}
                        </button>

                        <div class="form-group">
                            <label>{"To"}</label>
                            <CurrencySelector
                                selected={*to}
                                options={(*currencies).clone()}
                                exclude={*from}
                                on_change={Callback::from({
                                    let to = to.clone();
                                    move |c| to.set(c)
                                })}
                                label="Target currency"
                            />
                        </div>
                    </div>

                    <button type="submit" class="btn btn-primary" disabled={in_flight}>
                        { if in_flight { "Converting..." } else { "Convert" } }
                    </button>
                </form>

                {
                    match &*state {
                        ConvertState::Done(conversion) => html! {
                            <div class="conversion-result">
                                <h3>{"Result"}</h3>
                                <p>
                                    <span class="amount">{conversion.amount.clone()}</span>
                                    {" "}
                                    <span class="currency">{conversion.from.code()}</span>
                                    {" = "}
                                    <span class="result-amount">{format_converted(conversion.result)}</span>
                                    {" "}
                                    <span class="currency">{conversion.to.code()}</span>
                                </p>
                            </div>
                        },
                        ConvertState::Error(msg) => html! {
                            <div class="alert alert-danger">{msg}</div>
                        },
                        ConvertState::Idle | ConvertState::Converting => html! {},
                    }
                }
            </div>
        </div>
    }
}
