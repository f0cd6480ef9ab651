use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod error;
mod auth {
    pub mod api;
    pub mod form;
    pub mod login;
    pub mod session;
}
mod components {
    pub mod loader;
    pub mod notification;
}
mod pages {
    pub mod dashboard;
    pub mod signup;
}

use auth::login::Login;
use pages::{dashboard::Dashboard, signup::Signup};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/dashboard")]
    Dashboard,
    #[at("/signup")]
    Signup,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home | Route::NotFound => {
            html! { <Redirect<Route> to={Route::Login} /> }
        }
        Route::Login => {
            info!("Rendering Login page");
            html! { <Login /> }
        }
        Route::Dashboard => {
            info!("Rendering Dashboard page");
            html! { <Dashboard /> }
        }
        Route::Signup => {
            info!("Rendering Signup page");
            html! { <Signup /> }
        }
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

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_match_expected_paths() {
        assert_eq!(Route::Dashboard.to_path(), "/dashboard");
        assert_eq!(Route::Signup.to_path(), "/signup");
        assert_eq!(Route::Login.to_path(), "/login");
        assert!(Route::recognize("/dashboard") == Some(Route::Dashboard));
    }
}
