//! This crate contains the shared client logic and UI for the workspace:
//! the session provider (auth context), the expense collection provider,
//! platform storage selection, and common form components.

pub mod components;

mod storage;
pub use storage::make_storage;

mod session;
pub use session::{use_session, SessionHandle, SessionProvider, SessionState};

mod expenses;
pub use expenses::{use_expenses, ExpensesHandle, ExpensesProvider};
