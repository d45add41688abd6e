use std::rc::Rc;

use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod config;
pub mod error;
pub mod interactions;
pub mod phone;
pub mod telemetry;
pub mod pages {
    pub mod landing;
    pub mod not_found;
}

use config::PageConfig;
use pages::{landing::Landing, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route, config: Rc<PageConfig>) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering landing page");
            html! { <Landing {config} /> }
        }
        Route::NotFound => {
            info!("Rendering not found page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
pub fn App() -> Html {
    let config = use_state(|| Rc::new(PageConfig::from_build_env()));
    let render = {
        let config = (*config).clone();
        Callback::from(move |routes: Route| switch(routes, config.clone()))
    };

    html! {
        <BrowserRouter>
            <Switch<Route> {render} />
        </BrowserRouter>
    }
}
