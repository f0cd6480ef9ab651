use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component]
pub fn Signup() -> Html {
    html! {
        <div style="min-height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 1rem; font-family: Helvetica, Arial, sans-serif;">
            <h1>{"Create an account"}</h1>
            <p style="color: #6b7280;">{"Registration is coming soon."}</p>
            <div class="auth-redirect">
                {"Already have an account? "}
                <Link<Route> to={Route::Login}>
                    {"Sign in"}
                </Link<Route>>
            </div>
        </div>
    }
}
