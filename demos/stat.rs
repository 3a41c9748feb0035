//! Example: Show details of a path
//!
//! Usage:
//!   cargo run --example stat -- [--proxy PROXY] <PATH>

mod cli;

use cli::{ArgParser, connect, format_size, init_tracing};

const USAGE: &str = "Usage: cargo run --example stat -- [--proxy PROXY] <PATH>";

#[tokio::main]
async fn main() -> tbpan::Result<()> {
    init_tracing();
    let mut parser = ArgParser::new(USAGE);
    let session = connect(&mut parser).await;
    let path = parser.positionals(1).remove(0);

    match session.stat(&path).await? {
        Some(node) => {
            println!("Name:    {}", node.name);
            println!("Kind:    {}", node.kind.as_str());
            println!("Node id: {}", node.id);
            if node.is_file() {
                println!("Size:    {}", format_size(node.size));
            }
            if !node.updated.is_empty() {
                println!("Updated: {}", node.updated);
            }
        }
        None => println!("{} does not exist", path),
    }

    Ok(())
}
