use std::sync::Arc;

use anyhow::Result;
use holocron_catalog::{Catalog, Config, HttpCatalog, resolve_base_url};

use super::args::{Cli, Commands};
use super::handlers;
use crate::logging;

pub fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    let base_url = resolve_base_url(cli.api_url.as_deref(), &config);
    let catalog: Arc<dyn Catalog> = Arc::new(HttpCatalog::new(base_url));

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let command = cli.command.unwrap_or(Commands::Browse {
        path: "/".to_string(),
    });

    match command {
        Commands::Browse { path } => {
            // Keep the guard alive so buffered log lines are flushed on exit
            let _guard = logging::init_file(cli.log_level)?;
            handlers::browse::handle(&runtime, catalog, &path)
        }

        Commands::Films => {
            logging::init_console(cli.log_level);
            runtime.block_on(handlers::films::handle(catalog.as_ref(), cli.format))
        }

        Commands::Film { id } => {
            logging::init_console(cli.log_level);
            runtime.block_on(handlers::film::handle(catalog.as_ref(), &id, cli.format))
        }
    }
}
