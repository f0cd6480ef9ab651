use log::info;
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::auth::session::{is_logged_in, logout, BrowserStorage};
use crate::Route;

/// Landing route after sign in. Sends visitors without a token back to
/// the login view.
#[function_component]
pub fn Dashboard() -> Html {
    let navigator = use_navigator();
    let logged_in = is_logged_in();

    {
        let navigator = navigator.clone();
        use_mount(move || {
            if !logged_in {
                if let Some(navigator) = navigator {
                    navigator.replace(&Route::Login);
                }
            }
        });
    }

    let handle_logout = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            logout(&BrowserStorage);
            info!("Logged out");
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Login);
            }
        })
    };

    if !logged_in {
        return html! {};
    }

    html! {
        <div style="min-height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 1rem; font-family: Helvetica, Arial, sans-serif;">
            <h1>{"Dashboard"}</h1>
            <p style="color: #6b7280;">{"You are signed in."}</p>
            <button onclick={handle_logout} style="padding: 0.6rem 1.2rem; background: #000; color: #fff; border: none; border-radius: 6px; cursor: pointer;">
                {"Log out"}
            </button>
        </div>
    }
}
