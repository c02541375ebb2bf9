//! Expense collection context: the client-side cache of the user's
//! expenses.
//!
//! The collection is server-authoritative. [`ExpensesProvider`] re-fetches
//! it whenever the session token changes, and every mutation (add, update,
//! delete) resynchronizes with a full re-fetch after the server confirms.
//! The order of the list is whatever the backend returns; views group or
//! filter for display only.

use api::{ApiClient, ApiError};
use dioxus::prelude::*;
use store::{Expense, NewExpense};

use crate::session::{use_session, SessionHandle};

/// Get the expenses handle provided by [`ExpensesProvider`].
pub fn use_expenses() -> ExpensesHandle {
    use_context::<ExpensesHandle>()
}

/// Copyable handle over the shared expense collection.
#[derive(Clone, Copy)]
pub struct ExpensesHandle {
    expenses: Signal<Vec<Expense>>,
    session: SessionHandle,
}

impl ExpensesHandle {
    /// Reactive read of the collection; subscribes the calling scope.
    pub fn list(&self) -> Vec<Expense> {
        (self.expenses)()
    }

    fn token(&self) -> Option<String> {
        self.session.token()
    }

    /// Replace the collection with the server's current list.
    ///
    /// Without a token the collection is cleared instead, so a logged-out
    /// client never shows another session's expenses.
    pub async fn refresh(&mut self) {
        let Some(token) = self.token() else {
            self.expenses.set(Vec::new());
            return;
        };
        match ApiClient::new().list_expenses(&token).await {
            Ok(list) => self.expenses.set(list),
            Err(err) => {
                tracing::error!("failed to fetch expenses: {err}");
                self.force_logout_if_unauthorized(&err).await;
            }
        }
    }

    /// Create an expense, then resynchronize.
    pub async fn add(&mut self, expense: NewExpense) -> Result<(), ApiError> {
        let token = self.token().ok_or_else(ApiError::unauthenticated)?;
        let result = ApiClient::new()
            .create_expense(&token, &expense)
            .await
            .map(|_| ());
        self.finish_mutation(result).await
    }

    /// Fully replace an expense, then resynchronize.
    pub async fn update(&mut self, id: i64, expense: NewExpense) -> Result<(), ApiError> {
        let token = self.token().ok_or_else(ApiError::unauthenticated)?;
        let result = ApiClient::new()
            .update_expense(&token, id, &expense)
            .await
            .map(|_| ());
        self.finish_mutation(result).await
    }

    /// Delete an expense, then resynchronize.
    pub async fn delete(&mut self, id: i64) -> Result<(), ApiError> {
        let token = self.token().ok_or_else(ApiError::unauthenticated)?;
        let result = ApiClient::new().delete_expense(&token, id).await;
        self.finish_mutation(result).await
    }

    /// On success re-fetch the list; on failure leave the collection
    /// untouched and hand the error back for the view to present.
    async fn finish_mutation(&mut self, result: Result<(), ApiError>) -> Result<(), ApiError> {
        match result {
            Ok(()) => {
                self.refresh().await;
                Ok(())
            }
            Err(err) => {
                self.force_logout_if_unauthorized(&err).await;
                Err(err)
            }
        }
    }

    /// A rejected bearer token invalidates the whole session; the route
    /// guards then redirect to the login view.
    async fn force_logout_if_unauthorized(&mut self, err: &ApiError) {
        if err.is_unauthorized() {
            let mut session = self.session;
            session.logout().await;
        }
    }
}

/// Provider component that owns the expense collection.
#[component]
pub fn ExpensesProvider(children: Element) -> Element {
    let session = use_session();
    let expenses = use_signal(Vec::<Expense>::new);
    let handle = ExpensesHandle { expenses, session };
    use_context_provider(|| handle);

    // Resynchronize whenever the session token changes: restore, login,
    // logout.
    let token = use_memo(move || session.get().token);
    use_effect(move || {
        let _ = token();
        let mut handle = handle;
        spawn(async move {
            handle.refresh().await;
        });
    });

    rsx! {
        {children}
    }
}
