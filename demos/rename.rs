//! Example: Rename a file or folder
//!
//! Usage:
//!   cargo run --example rename -- [--proxy PROXY] <PATH> <NEW_NAME>

mod cli;

use cli::{ArgParser, connect, init_tracing};

const USAGE: &str = "Usage: cargo run --example rename -- [--proxy PROXY] <PATH> <NEW_NAME>";

#[tokio::main]
async fn main() -> tbpan::Result<()> {
    init_tracing();
    let mut parser = ArgParser::new(USAGE);
    let session = connect(&mut parser).await;
    let args = parser.positionals(2);

    session.rename(&args[0], &args[1]).await?;
    println!("Renamed {} to {}", args[0], args[1]);

    Ok(())
}
