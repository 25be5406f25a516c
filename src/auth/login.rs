use gloo_console::log;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config;

/// Simulated sign-in: both fields non-empty is the only requirement, and
/// after a short busy state it always succeeds. Nothing leaves the page.
#[function_component(Login)]
pub fn login() -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let is_submitting = use_state(|| false);
    let success = use_state(|| None::<String>);

    let on_email = {
        let email = email.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_password = {
        let password = password.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            password.set(input.value());
        })
    };

    let onsubmit = {
        let email = email.clone();
        let password = password.clone();
        let is_submitting = is_submitting.clone();
        let success = success.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if email.is_empty() || password.is_empty() || *is_submitting {
                return;
            }

            is_submitting.set(true);
            success.set(None);

            let address = (*email).clone();
            let email = email.clone();
            let password = password.clone();
            let is_submitting = is_submitting.clone();
            let success = success.clone();
            spawn_local(async move {
                log!("simulating sign-in for", address.clone());
                TimeoutFuture::new(config::LOGIN_DELAY_MS).await;

                success.set(Some(format!("Login successful! Signed in as {address}.")));
                is_submitting.set(false);
                email.set(String::new());
                password.set(String::new());
            });
        })
    };

    html! {
        <section id="login" class="page">
            <div class="login-container">
                <h1>{"Welcome back"}</h1>
                <p class="login-blurb">{"Sign in to pick up right where you left off."}</p>
                <form id="loginForm" onsubmit={onsubmit}>
                    <div class="form-group">
                        <label for="email">{"Email"}</label>
                        <input
                            id="email"
                            type="email"
                            placeholder="you@example.com"
                            value={(*email).clone()}
                            oninput={on_email}
                        />
                    </div>
                    <div class="form-group">
                        <label for="password">{"Password"}</label>
                        <input
                            id="password"
                            type="password"
                            placeholder="••••••••"
                            value={(*password).clone()}
                            oninput={on_password}
                        />
                    </div>
                    <button
                        type="submit"
                        class="btn btn-primary login-btn"
                        disabled={*is_submitting}
                        style={if *is_submitting { "background: #999;" } else { "" }}
                    >
                        { if *is_submitting { "Signing In..." } else { "Sign In" } }
                    </button>
                    {
                        if let Some(message) = (*success).as_ref() {
                            html! { <div class="success-message">{message}</div> }
                        } else {
                            html! {}
                        }
                    }
                </form>
            </div>
        </section>
    }
}
