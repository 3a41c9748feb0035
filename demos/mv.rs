//! Example: Move a file or folder
//!
//! Usage:
//!   cargo run --example mv -- [--proxy PROXY] <SOURCE_PATH> <DEST_FOLDER>

mod cli;

use cli::{ArgParser, connect, init_tracing};

const USAGE: &str = "Usage: cargo run --example mv -- [--proxy PROXY] <SOURCE_PATH> <DEST_FOLDER>";

#[tokio::main]
async fn main() -> tbpan::Result<()> {
    init_tracing();
    let mut parser = ArgParser::new(USAGE);
    let session = connect(&mut parser).await;
    let args = parser.positionals(2);

    println!("Moving {} into {}...", args[0], args[1]);
    session.mv(&args[0], &args[1]).await?;
    println!("Moved.");

    Ok(())
}
