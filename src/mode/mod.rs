//! CLI mode implementations

mod consumption;
mod emissions;
mod gradient;
mod price;

pub use consumption::run_consumption;
pub use emissions::run_emissions;
pub use gradient::run_gradient;
pub use price::run_price;

use crate::output::print_error;

/// Report a fatal error and exit
fn fail(msg: &str) -> ! {
    print_error(msg);
    std::process::exit(1);
}

/// Report the result of a chart export
fn report_export(result: Result<(), String>, path: &str) {
    if let Err(e) = result {
        print_error(&e);
        std::process::exit(1);
    }
    eprintln!("Chart saved to: {}", path);
}
