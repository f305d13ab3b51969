#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod cache;
pub mod catalog;
mod error;
mod exercise;
mod query;
mod service;

pub use cache::*;
pub use catalog::{
    DEFAULT_GROUP_LIMIT, DisabledFeature, ExerciseCatalogRepository, ExerciseService,
    FALLBACK_BODY_PARTS, PAGE_SIZE,
};
pub use error::*;
pub use exercise::*;
pub use query::*;
pub use service::*;
