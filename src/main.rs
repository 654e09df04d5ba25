//! Stylebook binary entry point.

use stylebook::cli;
use stylebook::ui::output;

fn main() {
    if let Err(err) = cli::run() {
        // {:#} prints the full context chain on one line
        output::error(format!("{:#}", err));
        std::process::exit(1);
    }
}
