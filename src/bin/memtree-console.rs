//! Interactive console for an in-memory B-tree.
//!
//! Set `RUST_LOG=memtree=debug` to watch splits, borrows and merges.

use std::io;

use memtree::console::Console;
use memtree::BTree;
use tracing_subscriber::EnvFilter;

fn main() -> memtree::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(true)
        .compact()
        .init();

    let mut tree = BTree::new()?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());
    console.run(&mut tree)?;

    tracing::info!(stats = %tree.stats(), "session finished");
    tree.destroy();
    Ok(())
}
