//! One-shot migration: rewrites a legacy activities file (scalar tags,
//! `both`/`mix` sentinels) in canonical multi-valued form, after writing a
//! timestamped backup next to it.
//!
//! Usage: `migrate [path]` — defaults to `data/activities.json`.

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use playshelf_store::ActivityStore;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("playshelf=info".parse()?))
        .init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "data/activities.json".to_string());

    let store = ActivityStore::new(&path);
    let count = store
        .rewrite_canonical()
        .with_context(|| format!("migrating {path}"))?;

    info!(count, path, "Migration complete");
    Ok(())
}
