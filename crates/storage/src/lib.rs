#![warn(clippy::pedantic)]

mod config;
#[allow(clippy::module_name_repetitions)]
pub mod local_storage;
pub mod rest;


pub use config::*;
