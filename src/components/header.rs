use chrono::Local;
use yew::prelude::*;

/// Application header with the title and the render-time clock.
#[function_component(Header)]
pub fn header() -> Html {
    let now = Local::now().format("%H:%M:%S").to_string();

    html! {
        <header class="app-header">
            <div class="header-content">
                <h1 class="app-title">{"Currency Exchange Dashboard"}</h1>
                <div class="last-updated">
                    {"Last updated: "}<span>{now}</span>
                </div>
            </div>
        </header>
    }
}
