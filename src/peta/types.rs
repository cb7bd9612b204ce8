/// Library-wide type definitions.

use futures;

use std::result;

use peta::error;

/// A Result type parameterized by `peta::error::Error`
pub type Result<T> = result::Result<T, error::Error>;

/// A Future type parameterized by `peta::error::Error`
pub type Future<T> = Box<futures::Future<Item = T, Error = error::Error>>;
