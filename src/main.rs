use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod signup;
mod components {
    pub mod animated_counter;
    pub mod benefit_card;
    pub mod fields;
    pub mod signup_form;
    pub mod student_form;
    pub mod vendor_form;
}
mod pages {
    pub mod landing;
}

use pages::landing::{ActiveForm, Landing};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/vendors")]
    Vendors,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering landing page");
            html! { <Landing initial_form={ActiveForm::Student} /> }
        },
        Route::Vendors => {
            info!("Rendering landing page with vendor form");
            html! { <Landing initial_form={ActiveForm::Vendor} /> }
        },
        Route::NotFound => {
            info!("Rendering not found page");
            html! {
                <div class="not-found">
                    <h1>{"Page not found"}</h1>
                    <Link<Route> to={Route::Home}>
                        {"Back to Cydex"}
                    </Link<Route>>
                </div>
            }
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
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
