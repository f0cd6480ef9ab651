use futures::future::{AbortHandle, Abortable};
use log::{debug, info, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::auth::api::{AuthService, HttpAuthService};
use crate::auth::form::{Credentials, Field, LoginAction, LoginForm};
use crate::auth::session::{bootstrap, BrowserStorage, MountDecision, TokenStore};
use crate::components::loader::PageLoader;
use crate::components::notification::Toast;
use crate::error::AuthError;
use crate::Route;

/// Sends the credentials and, on a 200, persists the returned token.
/// Any other status comes back as [`AuthError::Rejected`] carrying the
/// server payload.
pub async fn submit_login(
    service: &impl AuthService,
    store: &impl TokenStore,
    credentials: &Credentials,
) -> Result<(), AuthError> {
    info!("Attempting login for {}", credentials.email);
    let response = service.authenticate(credentials).await?;
    if !response.is_success() {
        warn!("Login rejected with status {}", response.status);
        return Err(AuthError::Rejected {
            status: response.status,
            message: response.data,
        });
    }
    store.store_token(&response.data)?;
    info!("Token stored successfully in localStorage");
    Ok(())
}

#[function_component]
pub fn Login() -> Html {
    let form = use_reducer(LoginForm::default);
    let toast = use_state(|| None::<String>);
    let in_flight = use_mut_ref(|| None::<AbortHandle>);
    let navigator = use_navigator();

    {
        let form = form.clone();
        let navigator = navigator.clone();
        use_mount(move || match bootstrap(&BrowserStorage) {
            MountDecision::RedirectToDashboard => {
                info!("Session token found, skipping login form");
                if let Some(navigator) = navigator {
                    navigator.push(&Route::Dashboard);
                }
            }
            MountDecision::ShowForm => form.dispatch(LoginAction::ShowForm),
        });
    }

    {
        let in_flight = in_flight.clone();
        use_unmount(move || {
            if let Some(handle) = in_flight.borrow_mut().take() {
                handle.abort();
            }
        });
    }

    let onsubmit = {
        let form = form.clone();
        let toast = toast.clone();
        let in_flight = in_flight.clone();
        let navigator = navigator.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(credentials) = (*form).clone().begin_submit() else {
                return;
            };
            form.dispatch(LoginAction::SubmitStarted);

            let (handle, registration) = AbortHandle::new_pair();
            *in_flight.borrow_mut() = Some(handle);

            let form = form.clone();
            let toast = toast.clone();
            let in_flight = in_flight.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                let attempt = async move {
                    submit_login(&HttpAuthService::default(), &BrowserStorage, &credentials).await
                };
                let result = Abortable::new(attempt, registration)
                    .await
                    .unwrap_or(Err(AuthError::Cancelled));
                in_flight.borrow_mut().take();

                match result {
                    Ok(()) => {
                        // Submitting stays set; the view is about to be replaced.
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Dashboard);
                        }
                    }
                    Err(AuthError::Cancelled) => debug!("Login request cancelled"),
                    Err(err) => {
                        warn!("Login failed: {}", err);
                        toast.set(Some(err.user_message()));
                        form.dispatch(LoginAction::SubmitFailed);
                    }
                }
            });
        })
    };

    let oninput = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            match input.name().parse::<Field>() {
                Ok(field) => form.dispatch(LoginAction::Update(field, input.value())),
                Err(err) => warn!("Ignoring input: {}", err),
            }
        })
    };

    let toggle_password = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| form.dispatch(LoginAction::TogglePasswordVisibility))
    };

    let dismiss_toast = {
        let toast = toast.clone();
        Callback::from(move |_: ()| toast.set(None))
    };

    if form.view.is_page_loading {
        return html! { <PageLoader /> };
    }

    html! {
        <div class="login-page">
            <style>
            {r#".login-page {
                min-height: 100vh;
                display: flex;
                align-items: center;
                justify-content: center;
                padding: 1rem;
                background: #f9fafb;
                font-family: Helvetica, Arial, sans-serif;
            }
            .login-card {
                width: 100%;
                max-width: 28rem;
                background: #fff;
                border-radius: 12px;
                padding: 2rem;
                box-shadow: 0 10px 25px rgba(0, 0, 0, 0.1);
            }
            .login-card h1 {
                font-size: 1.5rem;
                text-align: center;
                margin-bottom: 0.25rem;
            }
            .login-card .subtitle {
                text-align: center;
                color: #6b7280;
                margin-bottom: 1.5rem;
            }
            .login-field {
                display: flex;
                flex-direction: column;
                gap: 0.5rem;
                margin-bottom: 1rem;
            }
            .password-wrapper {
                position: relative;
            }
            .login-field input {
                width: 100%;
                padding: 0.6rem 0.75rem;
                border: 1px solid #d1d5db;
                border-radius: 6px;
                box-sizing: border-box;
            }
            .toggle-password {
                position: absolute;
                right: 0.75rem;
                top: 0.55rem;
                background: none;
                border: none;
                color: #9ca3af;
                cursor: pointer;
            }
            .login-submit {
                width: 100%;
                padding: 0.7rem;
                background: #000;
                color: #fff;
                border: none;
                border-radius: 6px;
                cursor: pointer;
            }
            .login-submit:disabled {
                opacity: 0.6;
                cursor: not-allowed;
            }
            .auth-redirect {
                margin-top: 1.5rem;
                text-align: center;
                font-size: 0.875rem;
                color: #4b5563;
            }"#}
            </style>
            <Toast message={(*toast).clone()} on_dismiss={dismiss_toast} />
            <div class="login-card">
                <h1>{"Welcome back"}</h1>
                <p class="subtitle">{"Enter your details to sign in to your account"}</p>
                <form onsubmit={onsubmit}>
                    <div class="login-field">
                        <label for="email">{"Email"}</label>
                        <input
                            id="email"
                            name="email"
                            type="email"
                            placeholder="Enter your email"
                            value={form.credentials.email.clone()}
                            oninput={oninput.clone()}
                            required=true
                        />
                    </div>
                    <div class="login-field">
                        <label for="password">{"Password"}</label>
                        <div class="password-wrapper">
                            <input
                                id="password"
                                name="password"
                                type={form.password_input_type()}
                                placeholder="Enter your password"
                                value={form.credentials.password.clone()}
                                oninput={oninput}
                                required=true
                            />
                            <button
                                type="button"
                                class="toggle-password"
                                aria-label={if form.view.is_password_visible { "Hide password" } else { "Show password" }}
                                onclick={toggle_password}
                            >
                                {if form.view.is_password_visible { "Hide" } else { "Show" }}
                            </button>
                        </div>
                    </div>
                    <button type="submit" class="login-submit" disabled={form.view.is_submitting}>
                        {form.submit_label()}
                    </button>
                </form>
                <div class="auth-redirect">
                    {"Don't have an account? "}
                    <Link<Route> to={Route::Signup}>
                        {"Sign up"}
                    </Link<Route>>
                </div>
            </div>
        </div>
    }
}
