pub mod domain;
pub mod error;
pub mod record;
mod util;

pub use domain::*;
pub use error::{Error, Result};
pub use record::{FilmListPage, FilmRecord};
pub use util::*;
