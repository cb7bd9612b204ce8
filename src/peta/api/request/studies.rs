// Copyright (c) 2019 PETA Developers. All Rights Reserved.

/// The filter posted to the study-listing endpoint. The default (all
/// fields empty) lists every study visible to the current session.
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyListing {
    pub name: String,
    pub parent_type: Vec<String>,
    pub groups: Vec<String>,
    pub tags: Vec<String>,
}
