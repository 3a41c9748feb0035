//! Example: Create a folder and any missing parents
//!
//! Usage:
//!   cargo run --example mkdir -- [--proxy PROXY] <PATH>

mod cli;

use cli::{ArgParser, connect, init_tracing};

const USAGE: &str = "Usage: cargo run --example mkdir -- [--proxy PROXY] <PATH>";

#[tokio::main]
async fn main() -> tbpan::Result<()> {
    init_tracing();
    let mut parser = ArgParser::new(USAGE);
    let session = connect(&mut parser).await;
    let target = parser.positionals(1).remove(0);

    println!("Creating directory: {}", target);
    let node = session.ensure_folder(&target).await?;
    println!("Name: {}", node.name);
    println!("Node id: {}", node.id);

    Ok(())
}
