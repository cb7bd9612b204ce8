// Copyright (c) 2019 PETA Developers. All Rights Reserved.

//! Library configuration options and environment definitions.

use std::env;
use std::time::Duration;

use url::Url;

/// Defines the server environment the library is interacting with.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq)]
pub enum Environment {
    #[allow(dead_code)]
    Local,
    #[allow(dead_code)]
    Production,
}

impl Environment {
    pub fn url(&self) -> Url {
        use self::Environment::*;
        match *self {
            Local => {
                let api_loc = env::var("PETA_API_LOC").expect("PETA_API_LOC must be defined");
                api_loc
                    .parse::<Url>()
                    .unwrap_or_else(|_| panic!("Not a valid url: {}", api_loc))
            }
            Production => "https://peta.bgi.com".parse::<Url>().unwrap(), // This should never fail
        }
    }
}

/// Configuration options for the PETA client.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Config {
    env: Environment,
    request_timeout: Option<Duration>,
}

impl Config {
    #[allow(dead_code)]
    pub fn new(env: Environment) -> Self {
        Self {
            env,
            request_timeout: None,
        }
    }

    /// Like `new`, but every outbound request is abandoned with a
    /// `RequestTimeout` error once the given duration elapses. Without it,
    /// an unresponsive server may block a fetch indefinitely.
    #[allow(dead_code)]
    pub fn with_request_timeout(env: Environment, timeout: Duration) -> Self {
        Self {
            env,
            request_timeout: Some(timeout),
        }
    }

    #[allow(dead_code)]
    pub fn env(&self) -> &Environment {
        &self.env
    }

    #[allow(dead_code)]
    pub fn api_url(&self) -> Url {
        self.env.url()
    }

    #[allow(dead_code)]
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout
    }
}
