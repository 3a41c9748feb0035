//! Example: Remove (archive) a file or folder
//!
//! Usage:
//!   cargo run --example rm -- [--proxy PROXY] <PATH>

mod cli;

use cli::{ArgParser, connect, init_tracing};

const USAGE: &str = "Usage: cargo run --example rm -- [--proxy PROXY] <PATH>";

#[tokio::main]
async fn main() -> tbpan::Result<()> {
    init_tracing();
    let mut parser = ArgParser::new(USAGE);
    let session = connect(&mut parser).await;
    let path = parser.positionals(1).remove(0);

    session.rm(&path).await?;
    println!("Removed {}", path);

    Ok(())
}
