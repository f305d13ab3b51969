#![warn(clippy::pedantic)]

pub mod log;
mod service;
mod trainer;

pub use service::Service;
pub use trainer::*;
