//! Example: List a folder
//!
//! Usage:
//!   cargo run --example ls -- [--proxy PROXY] [PATH]

mod cli;

use cli::{ArgParser, connect, format_size, init_tracing};

const USAGE: &str = "Usage: cargo run --example ls -- [--proxy PROXY] [PATH]";

#[tokio::main]
async fn main() -> tbpan::Result<()> {
    init_tracing();
    let mut parser = ArgParser::new(USAGE);
    let session = connect(&mut parser).await;
    let mut rest = parser.positionals_up_to(1);
    let path = rest.pop().unwrap_or_else(|| "/".to_string());

    println!("\n📁 Listing: {}\n", path);
    let nodes = session.list(&path).await?;
    if nodes.is_empty() {
        println!("  (empty)");
    }
    for node in nodes {
        let type_icon = if node.is_file() { "📄" } else { "📁" };
        let size_str = if node.is_file() {
            format_size(node.size)
        } else {
            String::new()
        };
        println!("  {} {} {}", type_icon, node.name, size_str);
    }

    Ok(())
}
