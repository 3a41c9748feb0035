//! Example: Download a file
//!
//! Usage:
//!   cargo run --example download -- [--proxy PROXY] <REMOTE_PATH> <LOCAL_PATH>

mod cli;

use cli::{ArgParser, connect, format_size, init_tracing};
use futures::TryStreamExt;
use tokio::io::AsyncWriteExt;

const USAGE: &str = "Usage: cargo run --example download -- [--proxy PROXY] <REMOTE_PATH> <LOCAL_PATH>";

#[tokio::main]
async fn main() -> tbpan::Result<()> {
    init_tracing();
    let mut parser = ArgParser::new(USAGE);
    let session = connect(&mut parser).await;
    let args = parser.positionals(2);
    let (remote_path, local_path) = (&args[0], &args[1]);

    let node = session.resolve(remote_path, tbpan::KindFilter::File).await?;
    println!("Found node: {} ({})", node.name, format_size(node.size));

    let mut body = session.open_node(&node).await?;
    let mut file = tokio::fs::File::create(local_path).await?;
    let mut written = 0u64;
    while let Some(chunk) = body.try_next().await? {
        file.write_all(&chunk).await?;
        written += chunk.len() as u64;
    }
    file.flush().await?;

    println!("Downloaded {} to {}", format_size(written), local_path);
    Ok(())
}
