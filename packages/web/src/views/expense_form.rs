//! Add- and edit-expense pages sharing one validated form.
//!
//! Validation runs client-side before anything reaches the network, and
//! reports one error at a time; server failures from the submission itself
//! are shown separately.

use dioxus::prelude::*;
use store::{today, validate_expense, Category, ExpenseInput, NewExpense};
use ui::components::{Button, ButtonVariant, Input};
use ui::{use_expenses, use_session};

use crate::Route;

#[component]
pub fn AddExpense() -> Element {
    let session = use_session();
    let mut expenses = use_expenses();
    let nav = use_navigator();
    let mut server_error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    let state = session.get();
    if !state.loading && !state.is_authenticated() {
        nav.replace(Route::Login {});
    }

    let initial = ExpenseInput {
        date: today().to_string(),
        ..Default::default()
    };

    let handle_submit = move |expense: NewExpense| {
        spawn(async move {
            server_error.set(None);
            submitting.set(true);
            match expenses.add(expense).await {
                Ok(()) => {
                    nav.push(Route::Dashboard {});
                }
                Err(err) => {
                    tracing::error!("failed to add expense: {err}");
                    server_error.set(Some(err.to_string()));
                    submitting.set(false);
                }
            }
        });
    };

    rsx! {
        nav {
            class: "topbar",
            Link { class: "back-link", to: Route::Dashboard {}, "Back to Dashboard" }
        }

        div {
            class: "page narrow",
            div {
                class: "card",
                h2 { "Add New Expense" }
                p { class: "muted", "Track your spending" }

                ExpenseForm {
                    initial,
                    submit_label: "Add Expense",
                    error: server_error(),
                    busy: submitting(),
                    onsubmit: handle_submit,
                }
            }
        }
    }
}

#[component]
pub fn EditExpense(id: i64) -> Element {
    let session = use_session();
    let mut expenses = use_expenses();
    let nav = use_navigator();
    let mut server_error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    let state = session.get();
    if !state.loading && !state.is_authenticated() {
        nav.replace(Route::Login {});
    }

    let list = expenses.list();
    let found = list.iter().find(|e| e.id == id).cloned();
    let still_loading = found.is_none();

    // The collection may still be on its way in; only give up once it has
    // loaded and the id is genuinely absent.
    if found.is_none() && !list.is_empty() {
        nav.replace(Route::ExpenseList {});
    }

    let handle_submit = move |expense: NewExpense| {
        spawn(async move {
            server_error.set(None);
            submitting.set(true);
            match expenses.update(id, expense).await {
                Ok(()) => {
                    nav.push(Route::ExpenseList {});
                }
                Err(err) => {
                    tracing::error!("failed to update expense: {err}");
                    server_error.set(Some(err.to_string()));
                    submitting.set(false);
                }
            }
        });
    };

    rsx! {
        nav {
            class: "topbar",
            Link { class: "back-link", to: Route::ExpenseList {}, "Back to Expenses" }
        }

        div {
            class: "page narrow",
            div {
                class: "card",
                h2 { "Edit Expense" }
                p { class: "muted", "Update the details below" }

                if still_loading {
                    p { class: "muted empty", "Loading expense..." }
                }
                if let Some(expense) = found {
                    ExpenseForm {
                        key: "{expense.id}",
                        initial: ExpenseInput {
                            amount: expense.amount.to_string(),
                            description: expense.description.clone(),
                            category: expense.category.as_str().to_string(),
                            date: expense.date.to_string(),
                        },
                        submit_label: "Save Changes",
                        error: server_error(),
                        busy: submitting(),
                        onsubmit: handle_submit,
                    }
                }
            }
        }
    }
}

/// The shared expense form. Owns the raw field state and runs
/// [`validate_expense`] on submit; only a valid [`NewExpense`] reaches
/// `onsubmit`.
#[component]
fn ExpenseForm(
    initial: ExpenseInput,
    #[props(into)] submit_label: String,
    #[props(default)] error: Option<String>,
    #[props(default)] busy: bool,
    onsubmit: EventHandler<NewExpense>,
) -> Element {
    let ExpenseInput {
        amount: initial_amount,
        description: initial_description,
        category: initial_category,
        date: initial_date,
    } = initial;

    let mut amount = use_signal(move || initial_amount);
    let mut description = use_signal(move || initial_description);
    let mut category = use_signal(move || initial_category);
    let mut date = use_signal(move || initial_date);
    let mut validation = use_signal(|| Option::<String>::None);

    let typed_chars = description().chars().count();
    let max_date = today().to_string();

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        validation.set(None);

        let input = ExpenseInput {
            amount: amount(),
            description: description(),
            category: category(),
            date: date(),
        };
        match validate_expense(&input, today()) {
            Ok(expense) => onsubmit.call(expense),
            Err(err) => validation.set(Some(err.message)),
        }
    };

    let shown_error = validation().or(error);

    rsx! {
        form {
            class: "expense-form",
            onsubmit: handle_submit,

            if let Some(err) = shown_error {
                div { class: "form-error", "{err}" }
            }

            label { "Amount (PKR)" }
            input {
                class: "input",
                r#type: "number",
                step: "0.01",
                min: "0.01",
                max: "1000000000",
                placeholder: "0.00",
                value: amount(),
                oninput: move |evt| amount.set(evt.value()),
            }

            label { "Description" }
            Input {
                placeholder: "What did you spend on?",
                value: description(),
                oninput: move |evt: FormEvent| description.set(evt.value()),
            }
            p { class: "char-count", "{typed_chars}/200 characters" }

            label { "Category" }
            select {
                class: "input",
                value: category(),
                onchange: move |evt| category.set(evt.value()),
                option { value: "", disabled: true, "Select a category" }
                for cat in Category::ALL {
                    option { value: cat.as_str(), "{cat}" }
                }
            }

            label { "Date" }
            input {
                class: "input",
                r#type: "date",
                max: max_date,
                value: date(),
                oninput: move |evt| date.set(evt.value()),
            }

            Button {
                variant: ButtonVariant::Primary,
                class: "submit",
                r#type: "submit",
                disabled: busy,
                "{submit_label}"
            }
        }
    }
}
