use yew::prelude::*;
use gloo_timers::callback::Timeout;

use crate::config::TOAST_DURATION_MS;

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub message: Option<String>,
    pub on_dismiss: Callback<()>,
}

/// Error notification pinned to the top of the page. Dismisses itself
/// after [`TOAST_DURATION_MS`].
#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |message: &Option<String>| {
                let timeout = message.as_ref().map(|_| {
                    Timeout::new(TOAST_DURATION_MS, move || on_dismiss.emit(()))
                });
                move || drop(timeout) // dropping cancels a pending dismissal
            },
            props.message.clone(),
        );
    }

    let Some(message) = props.message.as_ref() else {
        return html! {};
    };

    let close = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    html! {
        <div class="toast toast-error" role="alert">
            <style>
                {r#"
                    .toast {
                        position: fixed;
                        top: 1rem;
                        left: 50%;
                        transform: translateX(-50%);
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        padding: 0.75rem 1rem;
                        border-radius: 8px;
                        background: #fff;
                        box-shadow: 0 8px 24px rgba(0, 0, 0, 0.15);
                        animation: slideIn 0.3s ease-out forwards;
                        z-index: 50;
                    }
                    .toast-error {
                        border-left: 4px solid #ef4444;
                        color: #111827;
                    }
                    .toast button {
                        background: none;
                        border: none;
                        color: #9ca3af;
                        cursor: pointer;
                    }
                    @keyframes slideIn {
                        from { transform: translate(-50%, -100%); opacity: 0; }
                        to { transform: translate(-50%, 0); opacity: 1; }
                    }
                "#}
            </style>
            <span>{message}</span>
            <button type="button" aria-label="Dismiss" onclick={close}>{"×"}</button>
        </div>
    }
}
