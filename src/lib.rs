pub mod cli;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod import_map;
pub mod manage;
pub mod projection;
pub mod registry;
pub mod util;
pub mod validate;
