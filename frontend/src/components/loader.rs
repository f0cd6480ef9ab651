use yew::prelude::*;

#[function_component(PageLoader)]
pub fn page_loader() -> Html {
    html! {
        <div style="width: 100vw; height: 100vh; display: flex; justify-content: center; align-items: center;">
            <style>
            {r#".loading-spinner {
                display: inline-block;
                width: 64px;
                height: 64px;
                border: 6px solid rgba(0,0,0,.1);
                border-radius: 50%;
                border-top-color: #000;
                animation: spin 1s ease-in-out infinite;
            }
            @keyframes spin { to { transform: rotate(360deg); } }"#}
            </style>
            <span class="loading-spinner" aria-label="Loading"></span>
        </div>
    }
}
