use yew::prelude::*;
use log::info;

mod config;
mod content;
mod nav {
    pub mod sections;
    pub mod state;
    pub mod viewport;
    pub mod controller;
    pub mod hook;
    #[cfg(test)]
    pub mod testing;
}
mod components {
    pub mod icons;
    pub mod cursor;
    pub mod header;
    pub mod section_heading;
    pub mod feature_list;
    pub mod whatsapp;
}
mod pages {
    pub mod hero;
    pub mod services;
    pub mod pricing;
    pub mod domain;
    pub mod about;
    pub mod footer;
}

use components::{cursor::Cursor, header::Header};
use nav::hook::use_navigation;
use pages::{
    about::About,
    domain::Domain,
    footer::Footer,
    hero::Hero,
    pricing::Pricing,
    services::Services,
};


#[function_component]
fn App() -> Html {
    let nav = use_navigation();
    let state = &nav.state;

    html! {
        <div class="app">
            <Cursor pointer={state.pointer} />
            <Header
                active={state.active}
                menu_open={state.menu_open}
                on_navigate={nav.callbacks.navigate.clone()}
                on_toggle_menu={nav.callbacks.toggle_menu.clone()}
            />
            <main class="page">
                <Hero on_navigate={nav.callbacks.navigate.clone()} />
                <Services />
                <Pricing />
                <Domain />
                <About />
            </main>
            <Footer on_navigate={nav.callbacks.navigate.clone()} />
        </div>
    }
}


fn main() {
    // Panics land in the browser console instead of an opaque wasm trap
    console_error_panic_hook::set_once();
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting {}", config::BRAND);
    yew::Renderer::<App>::new().render();
}
