use yew::prelude::*;

use fx_dashboard::components::{Converter, Header, Historical, RatesTable};

#[function_component(App)]
fn app() -> Html {
    html! {
        <div class="app-container">
            <Header />

            <main class="app-main">
                <div class="dashboard-row">
                    <section class="converter-section">
                        <Converter />
                    </section>

                    <section class="rates-section">
                        <RatesTable />
                    </section>
                </div>

                <section class="historical-section">
                    <Historical />
                </section>
            </main>

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
