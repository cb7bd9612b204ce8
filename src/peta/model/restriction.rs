// Copyright (c) 2019 PETA Developers. All Rights Reserved.

//! The filter/restriction document posted with every fetch.

use std::fs;
use std::path::Path;

use serde_json;

use peta;
use peta::model::StudyId;

/// The study queried when no other selection has been made.
pub const DEFAULT_STUDY: &str = "chol_nus_2012";

const DEFAULT_PAGE_INDEX: u64 = 1;

// Large enough that a single page covers any study the portal serves.
const DEFAULT_PAGE_SIZE: u64 = 100_000;

/// An attribute range constraint, e.g. an age bracket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeRangeFilter {
    pub attribute_id: String,
    pub attribute_type: String,
    pub start: f64,
    pub end: f64,
}

/// An attribute equality constraint, e.g. `OS_STATUS in ["ALIVE"]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeEqualFilter {
    pub attribute_id: String,
    pub attribute_type: String,
    pub values: Vec<String>,
}

/// Constraints applied to somatic mutation records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationFilter {
    pub hugo_gene_symbols: Vec<String>,
    pub exac_start: f64,
    // The portal spells this key "exadEnd"; kept verbatim for wire parity.
    pub exad_end: f64,
    pub vabund_start: f64,
    pub vabund_end: f64,
    pub variant_source: Vec<String>,
    pub variant_type: Vec<String>,
    pub variant_class: Vec<String>,
    pub sequencer: Vec<String>,
    pub sequencer_source: Vec<String>,
}

impl Default for MutationFilter {
    fn default() -> Self {
        Self {
            hugo_gene_symbols: vec![],
            exac_start: 0.0,
            exad_end: 1.0,
            vabund_start: 0.0,
            vabund_end: 1.0,
            variant_source: vec![],
            variant_type: vec![],
            variant_class: vec![],
            sequencer: vec![],
            sequencer_source: vec![],
        }
    }
}

/// The full restriction document.
///
/// Exactly one document is active per client instance; every fetch
/// serializes the current document, so mutating it changes subsequent
/// results. `cnvFilter` and `svFilter` are opaque to this library and
/// currently unconstrained by the portal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataRestriction {
    pub study_ids: Vec<StudyId>,
    #[serde(default)]
    pub attributes_range_filters: Vec<AttributeRangeFilter>,
    #[serde(default)]
    pub attributes_equal_filters: Vec<AttributeEqualFilter>,
    #[serde(default)]
    pub mutation_filter: MutationFilter,
    #[serde(default = "empty_object")]
    pub cnv_filter: serde_json::Value,
    #[serde(default = "empty_object")]
    pub sv_filter: serde_json::Value,
    #[serde(default = "default_page_index")]
    pub page_index: u64,
    #[serde(default = "default_page_size")]
    pub page_size: u64,
}

fn empty_object() -> serde_json::Value {
    serde_json::Value::Object(Default::default())
}

fn default_page_index() -> u64 {
    DEFAULT_PAGE_INDEX
}

fn default_page_size() -> u64 {
    DEFAULT_PAGE_SIZE
}

impl Default for DataRestriction {
    fn default() -> Self {
        Self {
            study_ids: vec![StudyId::new(DEFAULT_STUDY)],
            attributes_range_filters: vec![],
            attributes_equal_filters: vec![AttributeEqualFilter {
                attribute_id: "OS_STATUS".to_string(),
                attribute_type: "PATIENT".to_string(),
                values: vec!["ALIVE".to_string()],
            }],
            mutation_filter: Default::default(),
            cnv_filter: empty_object(),
            sv_filter: empty_object(),
            page_index: DEFAULT_PAGE_INDEX,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl DataRestriction {
    /// Replaces the study selection, returning the updated document.
    pub fn with_studies(mut self, study_ids: Vec<StudyId>) -> Self {
        self.study_ids = study_ids;
        self
    }

    /// Parses a document from JSON text. No schema validation is performed
    /// beyond what deserialization itself imposes.
    pub fn from_json_str(text: &str) -> peta::Result<Self> {
        serde_json::from_str(text).map_err(Into::into)
    }

    /// Parses a document from a JSON file on disk.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> peta::Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::{self, Value};

    #[test]
    fn default_document_matches_the_portal_wire_format() {
        let value = serde_json::to_value(DataRestriction::default()).unwrap();
        assert_eq!(value["studyIds"], Value::from(vec![DEFAULT_STUDY]));
        assert_eq!(value["attributesRangeFilters"], Value::from(Vec::<Value>::new()));
        assert_eq!(
            value["attributesEqualFilters"][0]["attributeId"],
            Value::from("OS_STATUS")
        );
        assert_eq!(
            value["attributesEqualFilters"][0]["values"],
            Value::from(vec!["ALIVE"])
        );
        // The portal's misspelled key must survive serialization as-is:
        assert_eq!(value["mutationFilter"]["exadEnd"], Value::from(1.0));
        assert_eq!(value["mutationFilter"]["exacStart"], Value::from(0.0));
        assert!(value["cnvFilter"].as_object().unwrap().is_empty());
        assert!(value["svFilter"].as_object().unwrap().is_empty());
        assert_eq!(value["pageIndex"], Value::from(1));
    }

    #[test]
    fn json_round_trip_is_structurally_lossless() {
        let text = r#"{
            "studyIds": ["a", "b"],
            "attributesRangeFilters": [
                { "attributeId": "AGE", "attributeType": "PATIENT", "start": 30.0, "end": 60.0 }
            ],
            "attributesEqualFilters": [],
            "mutationFilter": {
                "hugoGeneSymbols": ["TP53"],
                "exacStart": 0.1, "exadEnd": 0.9,
                "vabundStart": 0.0, "vabundEnd": 1.0,
                "variantSource": [], "variantType": ["SNP"], "variantClass": [],
                "sequencer": [], "sequencerSource": []
            },
            "cnvFilter": {},
            "svFilter": {},
            "pageIndex": 2,
            "pageSize": 500
        }"#;

        let parsed = DataRestriction::from_json_str(text).unwrap();
        let reserialized = serde_json::to_value(&parsed).unwrap();
        let original: Value = serde_json::from_str(text).unwrap();
        assert_eq!(reserialized, original);
    }

    #[test]
    fn missing_optional_fields_fall_back_to_defaults() {
        let parsed = DataRestriction::from_json_str(r#"{ "studyIds": ["x"] }"#).unwrap();
        assert_eq!(parsed.study_ids, vec![StudyId::new("x")]);
        assert_eq!(parsed.page_index, 1);
        assert_eq!(parsed.mutation_filter, MutationFilter::default());
        assert!(parsed.attributes_equal_filters.is_empty());
    }

    #[test]
    fn with_studies_replaces_the_selection() {
        let doc = DataRestriction::default().with_studies(vec!["a".into(), "b".into()]);
        assert_eq!(doc.study_ids, vec![StudyId::new("a"), StudyId::new("b")]);
    }
}
