/// This module contains types that serve as representations
/// of server responses from the PETA API.

pub mod clinical;
pub mod studies;

// Re-export
pub use self::clinical::{Clinical, ClinicalAttribute, SampleRecord};
pub use self::studies::Studies;
