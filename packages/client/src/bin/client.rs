//! Interactive study room client.
//!
//! Browses the room list with infinite scrolling, opens rooms and runs the
//! study timer against a study room backend.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin studyroom-client -- --api-url http://localhost:8080
//! ```

use std::sync::Arc;

use clap::Parser;
use studyroom_client::{
    config::{ClientConfig, DEFAULT_CONTAINER_WIDTH},
    error::ClientError,
    infrastructure::HttpRoomGateway,
    ui::AppContext,
};
use studyroom_shared::logger::setup_logger;

#[derive(Debug, Parser)]
#[command(name = "studyroom-client", version, about = "Study room terminal client")]
struct Args {
    /// Base URL of the study room backend
    #[arg(long, env = "STUDYROOM_API_URL")]
    api_url: String,

    /// Width of the room list container in pixels
    #[arg(long, default_value_t = DEFAULT_CONTAINER_WIDTH)]
    width: u32,

    /// User id written to study records
    #[arg(long, env = "STUDYROOM_USER", default_value = "guest")]
    user: String,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = Args::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &args.log_level);

    // Run the client
    if let Err(e) = run(args).await {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), ClientError> {
    let config = ClientConfig::new(&args.api_url, args.width, &args.user)?;
    let gateway = Arc::new(HttpRoomGateway::new(config.api_url.clone()));

    studyroom_client::run_client(AppContext::new(config, gateway)).await
}
