//! Login page with the email/password form.

use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, Input};
use ui::use_session;

use crate::Route;

#[component]
pub fn Login() -> Element {
    let mut session = use_session();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Already signed in; straight to the dashboard.
    let state = session.get();
    if !state.loading && state.is_authenticated() {
        nav.replace(Route::Dashboard {});
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let e = email().trim().to_string();
            let p = password();

            if e.is_empty() || p.is_empty() {
                error.set(Some("Please enter both email and password".to_string()));
                return;
            }

            loading.set(true);
            if session.login(&e, &p).await {
                nav.replace(Route::Dashboard {});
            } else {
                loading.set(false);
                error.set(Some("Invalid email or password".to_string()));
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",

            div {
                class: "auth-card",

                h1 { class: "brand", "Track Craft" }
                p { class: "auth-subtitle", "Sign in to manage your expenses" }

                form {
                    class: "auth-form",
                    onsubmit: handle_login,

                    if let Some(err) = error() {
                        div { class: "form-error", "{err}" }
                    }

                    label { "Email" }
                    Input {
                        r#type: "email",
                        placeholder: "you@example.com",
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }

                    label { "Password" }
                    Input {
                        r#type: "password",
                        placeholder: "Password",
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }

                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Signing in..." } else { "Sign in" }
                    }
                }

                p {
                    class: "auth-switch",
                    "Don't have an account? "
                    Link { to: Route::Signup {}, "Sign up" }
                }
            }
        }
    }
}
