//! Daily Memo command-line client.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin daily-memo-client -- login alice --password password123
//! cargo run --bin daily-memo-client -- memo list
//! ```

use clap::Parser;
use daily_memo_client::{App, Cli};
use daily_memo_shared::logger::setup_logger;

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "warn");

    let cli = Cli::parse();
    let result = match App::from_cli(&cli) {
        Ok(app) => app.run(cli.command).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
