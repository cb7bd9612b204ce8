// Copyright (c) 2019 PETA Developers. All Rights Reserved.

//! MAF column schema and the reshape into the YJ variant-sheet layout.

use serde_json::Value;

use peta;
use peta::model::Table;

// Columns of the portal's mutation-record (MAF) export:
pub const TUMOR_SAMPLE_BARCODE: &str = "Tumor_Sample_Barcode";
pub const HUGO_SYMBOL: &str = "Hugo_Symbol";
pub const CHROMOSOME: &str = "Chromosome";
pub const START_POSITION: &str = "Start_Position";
pub const END_POSITION: &str = "End_Position";
pub const REFERENCE_ALLELE: &str = "Reference_Allele";
pub const TUMOR_SEQ_ALLELE2: &str = "Tumor_Seq_Allele2";

// Fixed layout of the YJ variant sheet.
const YJ_COLUMNS: [&str; 10] = [
    "sampleId",
    "gene",
    "chromosome",
    "startPosition",
    "endPosition",
    "referenceAllele",
    "alternateAllele",
    "hgvsP",
    "depth",
    "variantFrequency",
];

// Source columns, in the order their values land in the YJ layout.
const YJ_SOURCES: [&str; 7] = [
    TUMOR_SAMPLE_BARCODE,
    HUGO_SYMBOL,
    CHROMOSOME,
    START_POSITION,
    END_POSITION,
    REFERENCE_ALLELE,
    TUMOR_SEQ_ALLELE2,
];

/// Reshapes a mutation table into the YJ variant-sheet layout.
///
/// Selects and renames the fixed MAF subset, leaves `hgvsP` null (the
/// portal export does not carry protein notation), and fills the `depth`
/// and `variantFrequency` placeholders with 1. Pure data reshaping, no
/// network I/O. A non-empty input missing any source column is an error.
pub fn maf_to_yj(maf: &Table) -> peta::Result<Table> {
    let mut yj = Table::new(YJ_COLUMNS.iter().map(|c| c.to_string()).collect());
    if maf.is_empty() {
        return Ok(yj);
    }

    let mut indices = Vec::with_capacity(YJ_SOURCES.len());
    for name in YJ_SOURCES.iter() {
        match maf.column_index(name) {
            Some(index) => indices.push(index),
            None => bail!("MAF table is missing required column '{}'", name),
        }
    }

    for row in maf.rows() {
        let mut out: Vec<Value> = indices.iter().map(|&i| row[i].clone()).collect();
        out.push(Value::Null); // hgvsP
        out.push(Value::from(1)); // depth
        out.push(Value::from(1)); // variantFrequency
        yj.push_row(out);
    }
    Ok(yj)
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::{self, Map};

    fn maf_fixture() -> Table {
        let records: Vec<Map<String, Value>> = serde_json::from_str(
            r#"[{
                "Tumor_Sample_Barcode": "S-001",
                "Hugo_Symbol": "TP53",
                "Chromosome": "17",
                "Start_Position": 7577120,
                "End_Position": 7577121,
                "Reference_Allele": "C",
                "Tumor_Seq_Allele2": "T",
                "Variant_Classification": "Missense_Mutation"
            }]"#,
        )
        .unwrap();
        Table::from_records(&records)
    }

    #[test]
    fn yj_layout_is_fixed_and_values_are_renamed() {
        let yj = maf_to_yj(&maf_fixture()).unwrap();
        assert_eq!(
            yj.columns(),
            [
                "sampleId",
                "gene",
                "chromosome",
                "startPosition",
                "endPosition",
                "referenceAllele",
                "alternateAllele",
                "hgvsP",
                "depth",
                "variantFrequency",
            ]
        );
        assert_eq!(yj.num_rows(), 1);
        assert_eq!(yj.get(0, "sampleId"), Some(&Value::from("S-001")));
        assert_eq!(yj.get(0, "gene"), Some(&Value::from("TP53")));
        assert_eq!(yj.get(0, "chromosome"), Some(&Value::from("17")));
        assert_eq!(yj.get(0, "startPosition"), Some(&Value::from(7577120)));
        assert_eq!(yj.get(0, "endPosition"), Some(&Value::from(7577121)));
        assert_eq!(yj.get(0, "referenceAllele"), Some(&Value::from("C")));
        assert_eq!(yj.get(0, "alternateAllele"), Some(&Value::from("T")));
        // Extra source columns are dropped:
        assert_eq!(yj.get(0, "Variant_Classification"), None);
    }

    #[test]
    fn placeholder_columns_are_constant() {
        let yj = maf_to_yj(&maf_fixture()).unwrap();
        assert_eq!(yj.get(0, "hgvsP"), Some(&Value::Null));
        assert_eq!(yj.get(0, "depth"), Some(&Value::from(1)));
        assert_eq!(yj.get(0, "variantFrequency"), Some(&Value::from(1)));
    }

    #[test]
    fn empty_input_yields_empty_target_layout() {
        let yj = maf_to_yj(&Table::empty()).unwrap();
        assert!(yj.is_empty());
        assert_eq!(yj.num_columns(), 10);
    }

    #[test]
    fn missing_source_column_is_an_error() {
        let records: Vec<Map<String, Value>> =
            serde_json::from_str(r#"[{"Hugo_Symbol": "TP53"}]"#).unwrap();
        let result = maf_to_yj(&Table::from_records(&records));
        assert!(result.is_err());
    }
}
