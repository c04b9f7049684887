use yew::prelude::*;

use crate::components::currency_selector::CurrencySelector;
use crate::hooks::use_base_currency::use_base_currency;
use crate::hooks::use_currencies::use_currencies;
use crate::hooks::use_latest_rates::{RatesState, use_latest_rates};
use crate::utils::format::format_rate;

/// Latest exchange rates table with a selectable base currency.
/// Fetches on mount and whenever the base changes.
#[function_component(RatesTable)]
pub fn rates_table() -> Html {
    let base_handle = use_base_currency();
    let currencies = use_currencies();
    let state = use_latest_rates(base_handle.base);

    let base = base_handle.base;

    html! {
        <div class="card rates-card">
            <div class="card-header">
                <span>{"Exchange Rates"}</span>
                <div class="base-currency-selector">
                    <span>{"Base Currency: "}</span>
                    <CurrencySelector
                        selected={base}
                        options={(*currencies).clone()}
                        on_change={base_handle.set_base.clone()}
                        disabled={state.is_loading()}
                        label="Base currency"
                    />
                </div>
            </div>
            <div class="card-body">
                {
                    match &*state {
                        RatesState::Loading => html! {
                            <div class="status loading">
                                <div class="spinner"></div>
                                <p>{"Loading rates..."}</p>
                            </div>
                        },
                        RatesState::Error(msg) => html! {
                            <div class="alert alert-danger">{msg}</div>
                        },
                        RatesState::Loaded(snapshot) => html! {
                            <>
                                <table class="table rates-table">
                                    <thead>
                                        <tr>
                                            <th>{"Currency"}</th>
                                            <th class="text-right">{"Rate"}</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {
                                            snapshot.rows().map(|(code, rate)| {
                                                let formatted = format_rate(rate);
                                                html! {
                                                    <tr key={code.to_string()}>
                                                        <td>{code}</td>
                                                        <td class="text-right">
                                                            <span class="rate-value">{formatted.clone()}</span>
                                                            {" "}
                                                            <span class="text-muted">
                                                                {format!("(1 {} = {formatted} {code})", base.code())}
                                                            </span>
                                                        </td>
                                                    </tr>
                                                }
                                            }).collect::<Html>()
                                        }
                                    </tbody>
                                </table>
                                <div class="last-updated text-muted">
                                    <small>{format!("Last updated: {}", snapshot.formatted_timestamp())}</small>
                                </div>
                            </>
                        },
                    }
                }
            </div>
        </div>
    }
}
