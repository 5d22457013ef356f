//! rdaylog main entrypoint.

use rdaylog::run;
use rdaylog::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
