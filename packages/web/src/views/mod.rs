mod login;
pub use login::Login;

mod signup;
pub use signup::Signup;

mod dashboard;
pub use dashboard::Dashboard;

mod expense_list;
pub use expense_list::ExpenseList;

mod expense_form;
pub use expense_form::{AddExpense, EditExpense};
