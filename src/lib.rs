//! Typed async bindings for a GitHub-style source control hosting API.
//!
//! The domain model (deployments, deployment statuses, app installations,
//! repositories, commit statuses) is provider-agnostic; the [`client`]
//! module carries the provider-specific paths, media types, and wire field
//! mapping.
//!
//! https://developer.github.com/v3/

mod app;
pub mod client;
mod common;
mod deploy;
mod repo;

pub use app::*;
pub use client::{
    Client, ClientBuilder, Error, ListOptions, Pagination, Rate, Response, ResponseMeta, Result,
};
pub use common::*;
pub use deploy::*;
pub use repo::*;
