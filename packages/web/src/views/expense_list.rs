//! All-expenses table with a display-only category filter and per-row
//! edit/delete actions.

use dioxus::prelude::*;
use store::{Category, Expense};
use ui::components::{Button, ButtonVariant};
use ui::{use_expenses, use_session};

use crate::Route;

#[component]
pub fn ExpenseList() -> Element {
    let session = use_session();
    let mut expenses = use_expenses();
    let nav = use_navigator();
    let mut filter = use_signal(|| "all".to_string());
    let mut error = use_signal(|| Option::<String>::None);
    let mut deleting = use_signal(|| Option::<i64>::None);

    let state = session.get();
    if !state.loading && !state.is_authenticated() {
        nav.replace(Route::Login {});
    }

    let list = expenses.list();
    let visible: Vec<Expense> = if filter() == "all" {
        list.clone()
    } else {
        list.iter()
            .filter(|e| e.category.as_str() == filter())
            .cloned()
            .collect()
    };

    let handle_delete = move |id: i64| {
        spawn(async move {
            error.set(None);
            deleting.set(Some(id));
            if let Err(err) = expenses.delete(id).await {
                tracing::error!("failed to delete expense: {err}");
                error.set(Some(err.to_string()));
            }
            deleting.set(None);
        });
    };

    rsx! {
        nav {
            class: "topbar",
            Link { class: "back-link", to: Route::Dashboard {}, "Back to Dashboard" }
        }

        div {
            class: "page",

            div {
                class: "page-heading",
                h2 { "All Expenses" }
                p { class: "muted", {format!("{} recorded", list.len())} }
            }

            if let Some(err) = error() {
                div { class: "form-error", "{err}" }
            }

            div {
                class: "card",

                div {
                    class: "filter-row",
                    label { "Filter by category" }
                    select {
                        class: "input filter",
                        value: filter(),
                        onchange: move |evt| filter.set(evt.value()),
                        option { value: "all", "All categories" }
                        for cat in Category::ALL {
                            option { value: cat.as_str(), "{cat}" }
                        }
                    }
                }

                if visible.is_empty() {
                    p {
                        class: "muted empty",
                        if list.is_empty() {
                            "No expenses recorded yet"
                        } else {
                            "No expenses in this category"
                        }
                    }
                } else {
                    table {
                        class: "expense-table",
                        thead {
                            tr {
                                th { "Date" }
                                th { "Description" }
                                th { "Category" }
                                th { class: "amount", "Amount" }
                                th { "" }
                            }
                        }
                        tbody {
                            for expense in visible {
                                tr {
                                    key: "{expense.id}",
                                    td { "{expense.date}" }
                                    td { "{expense.description}" }
                                    td {
                                        span { class: "category-tag", "{expense.category}" }
                                    }
                                    td {
                                        class: "amount",
                                        {format!("PKR {:.2}", expense.amount)}
                                    }
                                    td {
                                        class: "row-actions",
                                        Button {
                                            variant: ButtonVariant::Secondary,
                                            onclick: {
                                                let id = expense.id;
                                                move |_| { nav.push(Route::EditExpense { id }); }
                                            },
                                            "Edit"
                                        }
                                        Button {
                                            variant: ButtonVariant::Danger,
                                            disabled: deleting() == Some(expense.id),
                                            onclick: {
                                                let id = expense.id;
                                                move |_| handle_delete(id)
                                            },
                                            if deleting() == Some(expense.id) { "Deleting..." } else { "Delete" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            div {
                class: "actions",
                Button {
                    class: "action",
                    onclick: move |_| { nav.push(Route::AddExpense {}); },
                    "Add Expense"
                }
            }
        }
    }
}
