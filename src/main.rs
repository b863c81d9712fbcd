use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod error;
mod enquiry {
    pub mod validate;
    pub mod message;
    pub mod submit;
    pub mod whatsapp;
}
mod components {
    pub mod notification;
    pub mod smooth_scroll;
    pub mod nav;
    pub mod quote;
    pub mod reveal;
    pub mod quote_form;
    pub mod footer;
}
mod pages {
    pub mod home;
    pub mod not_found;
}

use components::notification::Toaster;
use config::SiteConfig;
use pages::{home::Home, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    let config = use_memo(|_| config::load(), ());

    html! {
        <ContextProvider<SiteConfig> context={(*config).clone()}>
            <Toaster>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </Toaster>
        </ContextProvider<SiteConfig>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(Level::Info) {
        gloo_console::warn!(format!("logger already set: {}", e));
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
