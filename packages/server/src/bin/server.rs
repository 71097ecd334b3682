//! Daily Memo REST server.
//!
//! Run with:
//! ```not_rust
//! JWT_SECRET=change-me cargo run --bin daily-memo-server
//! ```

use clap::Parser;
use daily_memo_server::ServerConfig;
use daily_memo_shared::logger::setup_logger;

#[tokio::main]
async fn main() {
    let config = ServerConfig::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &config.log_level);

    // Run the server
    if let Err(e) = daily_memo_server::run_server(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
