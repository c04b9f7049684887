use std::rc::Rc;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::models::currency::Currency;

#[derive(Properties, PartialEq)]
pub struct CurrencySelectorProps {
    pub selected: Currency,
    pub options: Rc<Vec<Currency>>,
    pub on_change: Callback<Currency>,
    /// Currency left out of the options list (the converter's "to" selector
    /// excludes the current "from" value).
    #[prop_or_default]
    pub exclude: Option<Currency>,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or(AttrValue::Static("Select currency"))]
    pub label: AttrValue,
}

/// Currency dropdown shared by the converter and the rates table.
#[function_component(CurrencySelector)]
pub fn currency_selector(props: &CurrencySelectorProps) -> Html {
    let on_change = {
        let callback = props.on_change.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            let value = target.value();
            if let Ok(currency) = value.parse::<Currency>() {
                callback.emit(currency);
            }
        })
    };

    html! {
        <select
            class="currency-selector"
            onchange={on_change}
            disabled={props.disabled}
            aria-label={props.label.clone()}
            title={props.label.clone()}
        >
            {
                props.options.iter()
                    .filter(|c| Some(**c) != props.exclude)
                    .map(|c| {
                        let code = c.code();
                        let label = format!("{} ({})", c.name(), code);
                        let selected = *c == props.selected;
                        html! {
                            <option value={code} {selected}>{label}</option>
                        }
                    }).collect::<Html>()
            }
        </select>
    }
}
