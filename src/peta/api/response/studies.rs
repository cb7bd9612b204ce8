// Copyright (c) 2019 PETA Developers. All Rights Reserved.

use std::collections::{BTreeMap, BTreeSet};

use serde_json::{Map, Value};

use peta::model::Table;

/// The column injected with the outer grouping key.
pub const CANCER_TYPE_COLUMN: &str = "cancerType";

/// The column injected with the inner grouping key.
pub const CANCER_TYPE_DETAIL_COLUMN: &str = "cancerTypeDetail";

/// One detail group: a list of opaque per-study records.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StudyGroup {
    #[serde(default)]
    pub data: Vec<Map<String, Value>>,
}

/// One cancer type: detail key -> study group.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CancerType {
    #[serde(default)]
    pub studies: BTreeMap<String, StudyGroup>,
}

/// The study-listing response envelope: cancer-type key -> nested groups.
///
/// `BTreeMap`s keep the flattened row and column order deterministic.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Studies {
    #[serde(default)]
    pub data: BTreeMap<String, CancerType>,
}

impl Studies {
    /// Flattens the nesting into one table, injecting `cancerType` and
    /// `cancerTypeDetail` into every row. The column set is the sorted
    /// union of all record keys plus the two injected columns.
    pub fn into_table(self) -> Table {
        let mut names: BTreeSet<String> = BTreeSet::new();
        names.insert(CANCER_TYPE_COLUMN.to_string());
        names.insert(CANCER_TYPE_DETAIL_COLUMN.to_string());
        for cancer_type in self.data.values() {
            for group in cancer_type.studies.values() {
                for record in &group.data {
                    for key in record.keys() {
                        names.insert(key.clone());
                    }
                }
            }
        }

        let mut table = Table::new(names.into_iter().collect());
        for (cancer_type, groups) in self.data {
            for (detail, group) in groups.studies {
                for mut record in group.data {
                    record.insert(
                        CANCER_TYPE_COLUMN.to_string(),
                        Value::String(cancer_type.clone()),
                    );
                    record.insert(
                        CANCER_TYPE_DETAIL_COLUMN.to_string(),
                        Value::String(detail.clone()),
                    );
                    let row: Vec<Value> = table
                        .columns()
                        .iter()
                        .map(|c| record.remove(c).unwrap_or(Value::Null))
                        .collect();
                    table.push_row(row);
                }
            }
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json;

    const FIXTURE: &str = r#"{
        "data": {
            "Cholangiocarcinoma": {
                "studies": {
                    "Intrahepatic": {
                        "data": [
                            { "studyId": "chol_nus_2012", "sampleCount": 40 },
                            { "studyId": "chol_tcga_2017", "sampleCount": 51 }
                        ]
                    }
                }
            },
            "Breast Cancer": {
                "studies": {
                    "Ductal": {
                        "data": [
                            { "studyId": "brca_x_2019", "reference": "PMID:1" }
                        ]
                    }
                }
            }
        }
    }"#;

    #[test]
    fn rows_are_concatenated_across_cancer_types_and_details() {
        let studies: Studies = serde_json::from_str(FIXTURE).unwrap();
        let table = studies.into_table();

        assert_eq!(table.num_rows(), 3);
        // Sorted union of record keys plus the two injected columns:
        assert_eq!(
            table.columns(),
            [
                "cancerType",
                "cancerTypeDetail",
                "reference",
                "sampleCount",
                "studyId",
            ]
        );
        // Cancer types iterate in sorted order, so "Breast Cancer" first:
        assert_eq!(table.get(0, "cancerType"), Some(&Value::from("Breast Cancer")));
        assert_eq!(table.get(0, "cancerTypeDetail"), Some(&Value::from("Ductal")));
        assert_eq!(table.get(0, "studyId"), Some(&Value::from("brca_x_2019")));
        assert_eq!(table.get(0, "sampleCount"), Some(&Value::Null));
        assert_eq!(
            table.get(1, "cancerType"),
            Some(&Value::from("Cholangiocarcinoma"))
        );
        assert_eq!(table.get(1, "studyId"), Some(&Value::from("chol_nus_2012")));
        assert_eq!(table.get(2, "sampleCount"), Some(&Value::from(51)));
    }

    #[test]
    fn empty_listing_flattens_to_the_injected_columns_only() {
        let studies: Studies = serde_json::from_str(r#"{ "data": {} }"#).unwrap();
        let table = studies.into_table();
        assert!(table.is_empty());
        assert_eq!(table.columns(), ["cancerType", "cancerTypeDetail"]);
    }
}
