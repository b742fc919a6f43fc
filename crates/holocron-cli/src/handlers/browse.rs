use std::sync::Arc;
use std::sync::mpsc;

use anyhow::Result;
use holocron_catalog::Catalog;
use tokio::runtime::Runtime;

use crate::app::{App, Dispatcher};
use crate::presentation::TuiRenderer;

pub fn handle(runtime: &Runtime, catalog: Arc<dyn Catalog>, location: &str) -> Result<()> {
    tracing::info!(location, "starting browser");

    let (tx, rx) = mpsc::channel();
    let dispatcher = Dispatcher::new(catalog, runtime.handle().clone(), tx);
    let app = App::new(location);

    TuiRenderer::new(app, dispatcher).run(rx)
}
