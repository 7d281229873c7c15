//! daydial main entrypoint.

use daydial::run;
use daydial::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
