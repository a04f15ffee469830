use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod countdown;
mod error;
mod events;
mod scroll;
mod session;
mod storage;
mod form {
    pub mod controller;
    pub mod effects;
    pub mod lead;
    pub mod phone;
    pub mod validation;
}
mod components {
    pub mod countdown_banner;
    pub mod faq;
    pub mod lead_form;
    pub mod nav;
    pub mod success_modal;
}
mod pages {
    pub mod landing;
    pub mod terms;
}

use pages::{landing::Landing, terms::Terms};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Landing,
    #[at("/termos")]
    Terms,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Landing | Route::NotFound => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        },
        Route::Terms => {
            info!("Rendering Terms page");
            html! { <Terms /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Landing Page \"Mulheres Emocionalmente Fortes\" inicializada");
    yew::Renderer::<App>::new().render();
}
