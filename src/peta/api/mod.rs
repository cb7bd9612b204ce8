// Copyright (c) 2019 PETA Developers. All Rights Reserved.

//! The PETA portal API.

pub mod client;
pub mod request;
pub mod response;

// Re-export:
pub use self::client::Peta;
