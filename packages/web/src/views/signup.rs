//! Signup page. A new account is created but not logged in; the user is
//! sent to the login view to sign in.

use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, Input};
use ui::use_session;

use crate::Route;

#[component]
pub fn Signup() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Already signed in; straight to the dashboard.
    let state = session.get();
    if !state.loading && state.is_authenticated() {
        nav.replace(Route::Dashboard {});
    }

    let handle_signup = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let n = name().trim().to_string();
            let e = email().trim().to_string();
            let p = password();
            let cp = confirm_password();

            if n.is_empty() {
                error.set(Some("Name is required".to_string()));
                return;
            }
            if e.is_empty() || !e.contains('@') {
                error.set(Some("Please enter a valid email".to_string()));
                return;
            }
            if p.len() < 8 {
                error.set(Some("Password must be at least 8 characters".to_string()));
                return;
            }
            if p != cp {
                error.set(Some("Passwords do not match".to_string()));
                return;
            }

            loading.set(true);
            if session.signup(&n, &e, &p).await {
                nav.replace(Route::Login {});
            } else {
                loading.set(false);
                error.set(Some(
                    "Could not create the account. The email may already be in use.".to_string(),
                ));
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",

            div {
                class: "auth-card",

                h1 { class: "brand", "Create Account" }
                p { class: "auth-subtitle", "Sign up for Track Craft" }

                form {
                    class: "auth-form",
                    onsubmit: handle_signup,

                    if let Some(err) = error() {
                        div { class: "form-error", "{err}" }
                    }

                    label { "Name" }
                    Input {
                        placeholder: "Name",
                        value: name(),
                        oninput: move |evt: FormEvent| name.set(evt.value()),
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
                        placeholder: "Password (min 8 characters)",
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }

                    label { "Confirm password" }
                    Input {
                        r#type: "password",
                        placeholder: "Confirm password",
                        value: confirm_password(),
                        oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                    }

                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Creating account..." } else { "Sign up" }
                    }
                }

                p {
                    class: "auth-switch",
                    "Already have an account? "
                    Link { to: Route::Login {}, "Sign in" }
                }
            }
        }
    }
}
