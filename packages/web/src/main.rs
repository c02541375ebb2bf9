use dioxus::prelude::*;

use ui::{use_session, ExpensesProvider, SessionProvider};
use views::{AddExpense, Dashboard, EditExpense, ExpenseList, Login, Signup};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/signup")]
    Signup {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/expenses")]
    ExpenseList {},
    #[route("/expenses/add")]
    AddExpense {},
    #[route("/expenses/:id/edit")]
    EditExpense { id: i64 },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            ExpensesProvider {
                Router::<Route> {}
            }
        }
    }
}

/// Redirect `/` to the dashboard or the login view, once the persisted
/// session has been restored.
#[component]
fn Root() -> Element {
    let session = use_session();
    let nav = use_navigator();

    let state = session.get();
    if !state.loading {
        if state.is_authenticated() {
            nav.replace(Route::Dashboard {});
        } else {
            nav.replace(Route::Login {});
        }
    }
    rsx! {}
}
