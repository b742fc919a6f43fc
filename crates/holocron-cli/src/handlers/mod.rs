pub mod browse;
pub mod film;
pub mod films;
