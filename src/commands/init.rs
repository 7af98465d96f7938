//! `folio init` command - initialize a new store

use std::path::Path;

use crate::cli::{Cli, OutputFormat};
use folio_core::error::Result;
use folio_core::store::Store;

/// Execute the init command
pub fn execute(cli: &Cli, root: &Path) -> Result<()> {
    let store = match &cli.store {
        Some(path) => Store::init_at(path)?,
        None => Store::init(root)?,
    };

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "root": store.root(),
                "config": store.config_path(),
            });
            println!("{}", output);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!("Initialized folio store at {}", store.root().display());
            }
        }
    }

    Ok(())
}
