// Copyright (c) 2019 PETA Developers. All Rights Reserved.

#[macro_use]
extern crate error_chain;
extern crate futures;
extern crate hyper;
extern crate hyper_tls;
#[cfg(test)]
#[macro_use]
extern crate lazy_static;
extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate serde_json;
extern crate tokio;
extern crate url;

mod peta;

// Publicly re-export:
pub use peta::{api, error, model};
pub use peta::api::Peta;
pub use peta::config::{Config, Environment};
pub use peta::model::maf_to_yj;
pub use peta::types::{Future, Result};
