pub mod models;
pub mod session;
pub mod summary;
pub mod validate;

mod memory;
pub use memory::MemoryStorage;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileStorage;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorage;

pub use models::{Category, Expense, NewExpense, TokenResponse, User};
pub use session::{Session, SessionStorage, SessionVault};
pub use summary::{budget_status, monthly_summary, today, BudgetStatus, MonthlySummary};
pub use validate::{validate_expense, ExpenseInput, Field, ValidationError};
