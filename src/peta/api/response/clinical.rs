// Copyright (c) 2019 PETA Developers. All Rights Reserved.

use serde_json::Value;

use peta::model::Table;

/// One `{attrId, attrValue}` pair carried by a sample record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClinicalAttribute {
    pub attr_id: String,
    pub attr_value: Value,
}

/// One per-sample record from the clinical endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleRecord {
    pub sample_id: String,
    pub patient_id: String,
    #[serde(default)]
    pub clinical_data: Vec<ClinicalAttribute>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClinicalData {
    // Per-study attribute metadata; not needed for the flat table.
    #[serde(default)]
    pub attributes: Value,
    #[serde(default)]
    pub samples: Vec<SampleRecord>,
}

/// The clinical endpoint's response envelope.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Clinical {
    pub data: ClinicalData,
}

impl Clinical {
    /// Flattens each sample's attribute list into one row keyed by
    /// attribute id, with `patientId` and `sampleId` as extra columns.
    /// Attribute columns appear in first-seen order; when a sample repeats
    /// an attribute id, the first value wins.
    pub fn into_table(self) -> Table {
        let samples = self.data.samples;

        let mut columns: Vec<String> = vec![];
        for sample in &samples {
            for attribute in &sample.clinical_data {
                if !columns.iter().any(|c| c == &attribute.attr_id) {
                    columns.push(attribute.attr_id.clone());
                }
            }
        }
        let patient_index = columns.len();
        let sample_index = columns.len() + 1;
        columns.push("patientId".to_string());
        columns.push("sampleId".to_string());

        let mut table = Table::new(columns);
        for sample in samples {
            let mut row = vec![Value::Null; table.num_columns()];
            for attribute in sample.clinical_data {
                if let Some(index) = table.column_index(&attribute.attr_id) {
                    if row[index].is_null() {
                        row[index] = attribute.attr_value;
                    }
                }
            }
            row[patient_index] = Value::String(sample.patient_id);
            row[sample_index] = Value::String(sample.sample_id);
            table.push_row(row);
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
            "attributes": [],
            "samples": [
                {
                    "sampleId": "S-001",
                    "patientId": "P-001",
                    "clinicalData": [
                        { "attrId": "OS_STATUS", "attrValue": "ALIVE" },
                        { "attrId": "AGE", "attrValue": 54 },
                        { "attrId": "SEX", "attrValue": "F" }
                    ]
                },
                {
                    "sampleId": "S-002",
                    "patientId": "P-002",
                    "clinicalData": [
                        { "attrId": "OS_STATUS", "attrValue": "DECEASED" },
                        { "attrId": "AGE", "attrValue": 61 },
                        { "attrId": "SEX", "attrValue": "M" }
                    ]
                }
            ]
        }
    }"#;

    #[test]
    fn two_samples_with_three_attributes_flatten_to_two_rows() {
        let clinical: Clinical = serde_json::from_str(FIXTURE).unwrap();
        let table = clinical.into_table();

        assert_eq!(table.num_rows(), 2);
        assert_eq!(
            table.columns(),
            ["OS_STATUS", "AGE", "SEX", "patientId", "sampleId"]
        );
        assert_eq!(table.get(0, "OS_STATUS"), Some(&Value::from("ALIVE")));
        assert_eq!(table.get(0, "AGE"), Some(&Value::from(54)));
        assert_eq!(table.get(0, "patientId"), Some(&Value::from("P-001")));
        assert_eq!(table.get(0, "sampleId"), Some(&Value::from("S-001")));
        assert_eq!(table.get(1, "OS_STATUS"), Some(&Value::from("DECEASED")));
        assert_eq!(table.get(1, "SEX"), Some(&Value::from("M")));
        assert_eq!(table.get(1, "sampleId"), Some(&Value::from("S-002")));
    }

    #[test]
    fn first_value_wins_for_a_repeated_attribute_id() {
        let clinical: Clinical = serde_json::from_str(
            r#"{
                "data": {
                    "samples": [{
                        "sampleId": "S-001",
                        "patientId": "P-001",
                        "clinicalData": [
                            { "attrId": "AGE", "attrValue": 54 },
                            { "attrId": "AGE", "attrValue": 99 }
                        ]
                    }]
                }
            }"#,
        )
        .unwrap();
        let table = clinical.into_table();
        assert_eq!(table.get(0, "AGE"), Some(&Value::from(54)));
    }

    #[test]
    fn attribute_missing_from_one_sample_is_null_there() {
        let clinical: Clinical = serde_json::from_str(
            r#"{
                "data": {
                    "samples": [
                        { "sampleId": "S-001", "patientId": "P-001",
                          "clinicalData": [{ "attrId": "AGE", "attrValue": 54 }] },
                        { "sampleId": "S-002", "patientId": "P-002",
                          "clinicalData": [{ "attrId": "SEX", "attrValue": "M" }] }
                    ]
                }
            }"#,
        )
        .unwrap();
        let table = clinical.into_table();
        assert_eq!(table.get(1, "AGE"), Some(&Value::Null));
        assert_eq!(table.get(0, "SEX"), Some(&Value::Null));
    }

    #[test]
    fn no_samples_yields_an_empty_table_with_id_columns() {
        let clinical: Clinical =
            serde_json::from_str(r#"{ "data": { "samples": [] } }"#).unwrap();
        let table = clinical.into_table();
        assert!(table.is_empty());
        assert_eq!(table.columns(), ["patientId", "sampleId"]);
    }
}
