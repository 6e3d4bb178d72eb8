use log::info;
use yew::prelude::*;

mod config;
mod content;
mod error;
mod components {
    pub mod chat_widget;
    pub mod disclosure;
    pub mod lead_form;
    pub mod logo;
    pub mod nav;
    pub mod notice;
}
mod pages {
    pub mod faq;
    pub mod landing;
    pub mod sections;
    pub mod solutions;
}

use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    html! {
        <>
            <a href="#main" class="skip-link">{"Skip to content"}</a>
            <main id="main">
                <Landing />
            </main>
            <style>
                {r#"
                .skip-link { position: absolute; left: -9999px; }
                .skip-link:focus {
                    left: 1rem;
                    top: 1rem;
                    z-index: 50;
                    border-radius: 0.375rem;
                    background: #fff;
                    color: #05070d;
                    padding: 0.5rem 0.75rem;
                }
                "#}
            </style>
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting {}", config::SITE.brand);
    yew::Renderer::<App>::new().render();
}
