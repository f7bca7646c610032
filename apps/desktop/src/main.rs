//! # Pharmacy Stock Manager Entry Point
//!
//! The actual setup is in lib.rs so it can be tested.
//!
//! ## Startup Sequence
//! 1. Load configuration
//! 2. Initialize tracing (log file)
//! 3. Connect to database & run migrations
//! 4. Run the terminal UI

fn main() {
    if let Err(err) = pharmacy_desktop_lib::run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
