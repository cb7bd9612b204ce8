/// This module contains types that serve as representations
/// of client requests to the PETA API.

pub mod login;
pub mod studies;

// Re-export
pub use self::login::Login;
pub use self::studies::StudyListing;
