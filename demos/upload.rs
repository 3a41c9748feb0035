//! Example: Upload a local file into a folder
//!
//! Usage:
//!   cargo run --example upload -- [--proxy PROXY] [--overwrite] <LOCAL_FILE> <REMOTE_FOLDER>

mod cli;

use cli::{ArgParser, connect, init_tracing};
use std::process;

const USAGE: &str =
    "Usage: cargo run --example upload -- [--proxy PROXY] [--overwrite] <LOCAL_FILE> <REMOTE_FOLDER>";

#[tokio::main]
async fn main() {
    init_tracing();
    let mut parser = ArgParser::new(USAGE);
    let overwrite = parser.take_flag(&["--overwrite"]);
    let session = connect(&mut parser).await;
    let args = parser.positionals(2);
    let (local_file, remote_folder) = (&args[0], &args[1]);

    println!("Uploading {} to {}...", local_file, remote_folder);
    match session.upload_file(local_file, remote_folder, overwrite).await {
        Ok(node) => {
            println!("Upload complete!");
            println!("Created node: {} ({} bytes)", node.name, node.size);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
