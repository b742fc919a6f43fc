pub mod numeral;
pub mod text;

pub use numeral::{episode_title, to_roman};
pub use text::crawl_lines;
