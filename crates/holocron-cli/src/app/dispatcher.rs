use std::sync::Arc;
use std::sync::mpsc::Sender;

use holocron_catalog::Catalog;
use tokio::runtime::Handle;

use super::{Effect, Message};

/// Run one effect against the catalog
pub async fn execute(catalog: &dyn Catalog, effect: Effect) -> Message {
    match effect {
        Effect::ListFilms => Message::FilmsLoaded(catalog.list_films().await),
        Effect::GetFilm(request) => Message::FilmLoaded {
            ticket: request.ticket,
            result: catalog.get_film(&request.id).await,
        },
    }
}

/// Runs effects on the tokio runtime and posts the outcomes to the UI loop.
///
/// Each effect becomes its own task; nothing is cancelled, de-duplicated or
/// retried.
pub struct Dispatcher {
    catalog: Arc<dyn Catalog>,
    runtime: Handle,
    tx: Sender<Message>,
}

impl Dispatcher {
    pub fn new(catalog: Arc<dyn Catalog>, runtime: Handle, tx: Sender<Message>) -> Self {
        Self {
            catalog,
            runtime,
            tx,
        }
    }

    pub fn dispatch(&self, effects: Vec<Effect>) {
        for effect in effects {
            let catalog = Arc::clone(&self.catalog);
            let tx = self.tx.clone();

            self.runtime.spawn(async move {
                let message = execute(catalog.as_ref(), effect).await;
                // The UI may already be gone
                let _ = tx.send(message);
            });
        }
    }
}
