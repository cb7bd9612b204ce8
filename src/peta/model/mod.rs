// Copyright (c) 2019 PETA Developers. All Rights Reserved.

/// Top-level model definitions and re-exports go here.

pub mod account;
pub mod maf;
pub mod restriction;
pub mod study;
pub mod table;

// Re-export
pub use self::account::{Session, SessionToken};
pub use self::maf::maf_to_yj;
pub use self::restriction::{
    AttributeEqualFilter, AttributeRangeFilter, DataRestriction, MutationFilter,
};
pub use self::study::StudyId;
pub use self::table::Table;
