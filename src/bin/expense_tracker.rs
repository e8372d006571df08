use std::process;

use pocketbook::{cli, init};

fn main() {
    init();

    if let Err(err) = cli::run_expense_tracker() {
        tracing::error!(%err, "expense tracker aborted");
        eprintln!("Error: {err}");
        process::exit(1);
    }
}
