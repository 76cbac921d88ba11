//! rWorkday main entrypoint.

use rworkday::errors::AppError;
use rworkday::run;
use rworkday::ui::messages::info;

fn main() {
    println!();
    match run() {
        Ok(()) => {}
        Err(AppError::Cancelled(msg)) => info(msg),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
