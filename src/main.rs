//! eco2ve-timesheet main entrypoint.

use eco2ve_timesheet::run;
use eco2ve_timesheet::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(e);
        std::process::exit(1);
    }
}
