//! View screens
//!
//! Each screen is a self-contained form-plus-list widget that issues one
//! gateway call per user action and reports the outcome inline or via a
//! browser dialog.

pub mod budgets;
pub mod dashboard;
pub mod edit_transaction;
pub mod home;
pub mod login;
pub mod register;
pub mod transactions;

pub use budgets::Budgets;
pub use dashboard::Dashboard;
pub use edit_transaction::EditTransaction;
pub use home::Home;
pub use login::Login;
pub use register::Register;
pub use transactions::Transactions;
