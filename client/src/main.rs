mod betslip;
mod home;
mod logger;

use home::{HomeMessage, HomeMessageIcon};
use log::LevelFilter;
use yew::prelude::*;

#[function_component]
fn App() -> Html {
    html! {
        <div class="page">
            <main class="main">
                <HomeMessageIcon />
                <HomeMessage />
            </main>
        </div>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    if let Err(err) = logger::init(level) {
        gloo::console::error!(err.to_string());
    }
    yew::Renderer::<App>::new().render();
}
