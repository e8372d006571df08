pub mod core;
pub mod expense_shell;
pub mod forms;
pub mod io;
pub mod output;
pub mod system_clock;
pub mod todo_shell;

pub use expense_shell::run_expense_tracker;
pub use todo_shell::run_todo_list;
