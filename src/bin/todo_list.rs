use std::process;

use pocketbook::{cli, init};

fn main() {
    init();

    if let Err(err) = cli::run_todo_list() {
        tracing::error!(%err, "to-do list aborted");
        eprintln!("Error: {err}");
        process::exit(1);
    }
}
