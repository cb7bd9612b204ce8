// Copyright (c) 2019 PETA Developers. All Rights Reserved.

//! PETA library top-level definitions go in this module.

pub mod api;
pub mod config;
pub mod error;
pub mod model;
pub mod types;
pub mod util;

// Re-export
pub use peta::api::client::Peta;
pub use peta::config::{Config, Environment};
pub use peta::error::{Error, ErrorKind};
pub use peta::types::{Future, Result};
