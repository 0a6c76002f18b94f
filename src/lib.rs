pub mod cli;
pub mod config;
pub mod fetch;
pub mod git;
pub mod model;

mod api;

pub use api::{Repofetch, RepofetchBuilder};
