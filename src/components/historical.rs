use chrono::{Datelike, Months, Utc};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_currencies::use_currencies;
use crate::hooks::use_historical_rates::{HistoricalState, use_historical_rates};
use crate::models::currency::Currency;
use crate::models::rates::{Granularity, HistoricalSeries};
use crate::utils::format::format_rate;

/// Rates in the historical store are EUR crosses; the viewer queries them
/// against that base.
const HISTORICAL_BASE: Currency = Currency::Eur;

const MIN_YEAR: &str = "1999";

fn default_date() -> String {
    let today = Utc::now().date_naive();
    today
        .checked_sub_months(Months::new(1))
        .unwrap_or(today)
        .format("%Y-%m-%d")
        .to_string()
}

/// Historical rates viewer: granularity buttons, a date widget per
/// granularity, and a client-side currency filter over the fetched series.
#[function_component(Historical)]
pub fn historical() -> Html {
    let granularity = use_state(Granularity::default);
    let date = use_state(default_date);
    let selected = use_state(|| vec![Currency::Usd, Currency::Egp]);
    let currencies = use_currencies();

    let state = use_historical_rates(*granularity, (*date).clone(), HISTORICAL_BASE);

    let on_toggle_currency = {
        let selected = selected.clone();
        Callback::from(move |currency: Currency| {
            let mut next = (*selected).clone();
            if let Some(index) = next.iter().position(|c| *c == currency) {
                next.remove(index);
            } else {
                next.push(currency);
            }
            selected.set(next);
        })
    };

    html! {
        <div class="card historical-card">
            <div class="card-header">
                <span>{"Historical Exchange Rates"}</span>
                <div class="time-range-selector">
                    {
                        Granularity::all().iter().map(|g| {
                            let active = *g == *granularity;
                            let class = if active { "btn btn-primary" } else { "btn btn-outline" };
                            let onclick = {
                                let granularity = granularity.clone();
                                let g = *g;
                                Callback::from(move |_: MouseEvent| granularity.set(g))
                            };
                            html! {
                                <button type="button" {class} {onclick}>{g.label()}</button>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </div>
            <div class="card-body">
                <div class="historical-controls">
                    <div class="form-group">
                        <label>
                            {
                                match *granularity {
                                    Granularity::Day => "Select Date",
                                    Granularity::Month => "Select Month",
                                    Granularity::Year => "Select Year",
                                }
                            }
                        </label>
                        { render_date_input(*granularity, &date) }
                    </div>
                    <div class="currency-filters">
                        {"Show: "}
                        {
                            currencies.iter().map(|c| {
                                let currency = *c;
                                let checked = selected.contains(&currency);
                                let onchange = {
                                    let on_toggle = on_toggle_currency.clone();
                                    Callback::from(move |_: Event| on_toggle.emit(currency))
                                };
                                html! {
                                    <label class="filter-check" key={currency.code()}>
                                        <input type="checkbox" {checked} {onchange} />
                                        {currency.code()}
                                    </label>
                                }
                            }).collect::<Html>()
                        }
                    </div>
                </div>

                {
                    match &*state {
                        HistoricalState::Loading => html! {
                            <div class="status loading">
                                <div class="spinner"></div>
                                <p>{"Loading historical data..."}</p>
                            </div>
                        },
                        HistoricalState::Error(msg) => html! {
                            <div class="alert alert-danger">{msg}</div>
                        },
                        HistoricalState::Loaded(series) => html! {
                            <>
                                { render_table(series, *granularity, &selected) }
                                <div class="last-updated text-muted">
                                    <small>{format!("Last updated: {}", series.formatted_timestamp())}</small>
                                </div>
                            </>
                        },
                    }
                }
            </div>
        </div>
    }
}

/// Day gets a date picker; month and year get coarser widgets that pad the
/// stored date back out to `YYYY-MM-DD`, so granularity switches keep the
/// same underlying date state.
fn render_date_input(granularity: Granularity, date: &UseStateHandle<String>) -> Html {
    let today = Utc::now().date_naive();

    match granularity {
        Granularity::Day => {
            let onchange = {
                let date = date.clone();
                Callback::from(move |e: Event| {
                    let target: HtmlInputElement = e.target_unchecked_into();
                    let value = target.value();
                    if !value.is_empty() {
                        date.set(value);
                    }
                })
            };
            html! {
                <input
                    type="date"
                    class="form-control"
                    value={(**date).clone()}
                    {onchange}
                    max={today.format("%Y-%m-%d").to_string()}
                />
            }
        }
        Granularity::Month => {
            let onchange = {
                let date = date.clone();
                Callback::from(move |e: Event| {
                    let target: HtmlInputElement = e.target_unchecked_into();
                    let value = target.value();
                    if !value.is_empty() {
                        date.set(format!("{value}-01"));
                    }
                })
            };
            let month_value = date.get(..7).unwrap_or_default().to_string();
            html! {
                <input
                    type="month"
                    class="form-control"
                    value={month_value}
                    {onchange}
                    max={today.format("%Y-%m").to_string()}
                />
            }
        }
        Granularity::Year => {
            let onchange = {
                let date = date.clone();
                Callback::from(move |e: Event| {
                    let target: HtmlInputElement = e.target_unchecked_into();
                    let value = target.value();
                    if !value.is_empty() {
                        date.set(format!("{value}-01-01"));
                    }
                })
            };
            let year_value = date.get(..4).unwrap_or_default().to_string();
            html! {
                <input
                    type="number"
                    class="form-control"
                    value={year_value}
                    {onchange}
                    min={MIN_YEAR}
                    max={today.year().to_string()}
                />
            }
        }
    }
}

fn render_table(series: &HistoricalSeries, granularity: Granularity, selected: &[Currency]) -> Html {
    if series.is_empty() {
        return html! { <p>{"No data available for the selected period."}</p> };
    }

    match granularity {
        Granularity::Day => render_day_table(series, selected),
        Granularity::Month | Granularity::Year => render_series_table(series, selected),
    }
}

/// Single-day view: one row per selected currency.
fn render_day_table(series: &HistoricalSeries, selected: &[Currency]) -> Html {
    let rows = series.day_rows(selected);
    if rows.is_empty() {
        return html! { <p>{"No data available for the selected period."}</p> };
    }

    let updated = series.formatted_timestamp();

    html! {
        <table class="table historical-table">
            <thead>
                <tr>
                    <th>{"Currency"}</th>
                    <th>{"Rate"}</th>
                    <th>{"Last Updated"}</th>
                </tr>
            </thead>
            <tbody>
                {
                    rows.into_iter().map(|(code, rate)| html! {
                        <tr key={code.clone()}>
                            <td>{code}</td>
                            <td>{format_rate(rate)}</td>
                            <td>{updated.clone()}</td>
                        </tr>
                    }).collect::<Html>()
                }
            </tbody>
        </table>
    }
}

/// Month/year view: date rows against a column per selected currency.
fn render_series_table(series: &HistoricalSeries, selected: &[Currency]) -> Html {
    html! {
        <table class="table historical-table">
            <thead>
                <tr>
                    <th>{"Date"}</th>
                    {
                        selected.iter().map(|c| html! {
                            <th key={c.code()}>{c.code()}</th>
                        }).collect::<Html>()
                    }
                </tr>
            </thead>
            <tbody>
                {
                    series.filtered_rows(selected).into_iter().map(|row| html! {
                        <tr key={row.date.clone()}>
                            <td>{row.date.clone()}</td>
                            {
                                row.values.iter().map(|value| html! {
                                    <td>
                                        {
                                            match value {
                                                Some(rate) => format_rate(*rate),
                                                None => "N/A".to_string(),
                                            }
                                        }
                                    </td>
                                }).collect::<Html>()
                            }
                        </tr>
                    }).collect::<Html>()
                }
            </tbody>
        </table>
    }
}
