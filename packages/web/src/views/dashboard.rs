//! Dashboard: current-month totals, category breakdown, and the monthly
//! budget card.

use chrono::Datelike;
use dioxus::prelude::*;
use store::{budget_status, monthly_summary, today, Category};
use ui::components::{Button, ButtonVariant};
use ui::{use_expenses, use_session};

use crate::Route;

#[component]
pub fn Dashboard() -> Element {
    let mut session = use_session();
    let expenses = use_expenses();
    let nav = use_navigator();

    let state = session.get();
    if !state.loading && !state.is_authenticated() {
        nav.replace(Route::Login {});
    }

    let list = expenses.list();
    let now = today();
    let summary = monthly_summary(&list, now.year(), now.month());
    let month_label = now.format("%B %Y").to_string();
    let total_label = format!("PKR {:.2}", summary.total);

    // Largest categories first; the canonical list itself stays unsorted.
    let mut breakdown: Vec<(Category, f64)> = summary
        .by_category
        .iter()
        .map(|(category, total)| (*category, *total))
        .collect();
    breakdown.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    let handle_logout = move |_| {
        spawn(async move {
            session.logout().await;
            nav.replace(Route::Login {});
        });
    };

    rsx! {
        nav {
            class: "topbar",
            h1 { class: "brand", "Track Craft" }
            Button {
                variant: ButtonVariant::Ghost,
                onclick: handle_logout,
                "Logout"
            }
        }

        div {
            class: "page",

            div {
                class: "page-heading",
                h2 { "Dashboard" }
                p { class: "muted", "{month_label}" }
            }

            div {
                class: "card",
                h3 { "Total Spent This Month" }
                p { class: "muted", "Your monthly expense summary" }
                p { class: "total", "{total_label}" }
            }

            BudgetCard { total_spent: summary.total }

            div {
                class: "card",
                h3 { "By Category" }
                p { class: "muted", "Breakdown of expenses" }
                if breakdown.is_empty() {
                    p { class: "muted empty", "No expenses this month yet" }
                } else {
                    div {
                        class: "breakdown",
                        for (category, total) in breakdown {
                            div {
                                class: "breakdown-row",
                                span { "{category}" }
                                span { class: "amount", {format!("PKR {total:.2}")} }
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
                Button {
                    variant: ButtonVariant::Secondary,
                    class: "action",
                    onclick: move |_| { nav.push(Route::ExpenseList {}); },
                    "View All Expenses"
                }
            }
        }
    }
}

/// Monthly budget card: spending measured against the user's limit, with an
/// inline editor that PUTs the new limit and refreshes the cached profile.
#[component]
fn BudgetCard(total_spent: f64) -> Element {
    let mut session = use_session();
    let mut editing = use_signal(|| false);
    let mut limit_input = use_signal(String::new);
    let mut saving = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let state = session.get();
    let monthly_limit = state.user.as_ref().and_then(|u| u.monthly_limit);
    let status = budget_status(total_spent, monthly_limit);

    // The bar is clamped for display; the percentage text is not.
    let bar_width = status.percent_used.min(100.0);
    let spent_label = format!("PKR {total_spent:.2}");
    let percent_label = format!("{:.1}% used", status.percent_used);

    let open_editor = move |_| {
        let current = session.get().user.as_ref().and_then(|u| u.monthly_limit);
        limit_input.set(current.map(|l| l.to_string()).unwrap_or_default());
        error.set(None);
        editing.set(true);
    };

    let save_limit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);
            let Ok(limit) = limit_input().trim().parse::<f64>() else {
                error.set(Some("Please enter a valid amount".to_string()));
                return;
            };
            if limit < 0.0 {
                error.set(Some("The budget cannot be negative".to_string()));
                return;
            }
            let (Some(user), Some(token)) = (session.get().user, session.token()) else {
                return;
            };

            saving.set(true);
            match api::ApiClient::new()
                .update_monthly_limit(&token, user.id, limit)
                .await
            {
                Ok(_) => {
                    session.refresh_user().await;
                    editing.set(false);
                }
                Err(err) => {
                    tracing::error!("failed to update monthly limit: {err}");
                    if err.is_unauthorized() {
                        session.logout().await;
                    }
                    error.set(Some(err.to_string()));
                }
            }
            saving.set(false);
        });
    };

    rsx! {
        div {
            class: if status.over_budget { "card card-alert" } else { "card" },

            div {
                class: "card-header-row",
                div {
                    h3 { "Monthly Budget" }
                    p {
                        class: "muted",
                        if monthly_limit.is_some() {
                            "Track your spending against your budget"
                        } else {
                            "Set a budget to track your expenses"
                        }
                    }
                }
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: open_editor,
                    if monthly_limit.is_some() { "Edit" } else { "Set Budget" }
                }
            }

            if let Some(limit) = monthly_limit {
                div {
                    class: "budget-body",

                    div {
                        class: "budget-figures",
                        div {
                            p { class: "muted", "Spent" }
                            p {
                                class: if status.over_budget { "figure over" } else { "figure" },
                                "{spent_label}"
                            }
                        }
                        div {
                            class: "budget-limit",
                            p { class: "muted", "Budget" }
                            p { class: "figure secondary", {format!("PKR {limit:.2}")} }
                        }
                    }

                    div {
                        class: "budget-progress",
                        div {
                            class: "budget-progress-labels",
                            span { class: "muted", "{percent_label}" }
                            span {
                                class: if status.over_budget { "over" } else { "muted" },
                                {format!(
                                    "PKR {:.2} {}",
                                    (limit - total_spent).abs(),
                                    if status.over_budget { "over" } else { "remaining" }
                                )}
                            }
                        }
                        div {
                            class: "progress-track",
                            div {
                                class: if status.over_budget { "progress-fill over" } else { "progress-fill" },
                                style: "width: {bar_width}%",
                            }
                        }
                    }

                    if status.over_budget {
                        div {
                            class: "budget-warning",
                            p { "Budget Exceeded" }
                            p {
                                class: "muted",
                                {format!(
                                    "You've spent PKR {:.2} more than your monthly budget.",
                                    total_spent - limit
                                )}
                            }
                        }
                    }
                }
            }
            if monthly_limit.is_none() {
                p {
                    class: "muted empty",
                    "No budget set yet. Click \"Set Budget\" to start tracking your expenses."
                }
            }

            if editing() {
                form {
                    class: "budget-editor",
                    onsubmit: save_limit,

                    if let Some(err) = error() {
                        div { class: "form-error", "{err}" }
                    }

                    label { "Budget Amount (PKR)" }
                    input {
                        class: "input",
                        r#type: "number",
                        min: "0",
                        step: "100",
                        placeholder: "e.g. 20000",
                        value: limit_input(),
                        oninput: move |evt| limit_input.set(evt.value()),
                    }

                    div {
                        class: "form-actions",
                        Button {
                            variant: ButtonVariant::Ghost,
                            onclick: move |_| editing.set(false),
                            "Cancel"
                        }
                        Button {
                            r#type: "submit",
                            disabled: saving() || limit_input().is_empty(),
                            if saving() { "Saving..." } else { "Save Budget" }
                        }
                    }
                }
            }
        }
    }
}
