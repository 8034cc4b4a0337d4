// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::{Serialize, Serializer};

// Tag -> value, one entry per distinct tag in column 9.
pub type Attributes = HashMap<String, String>;

// For our purposes, a GFF3 file is just a Vec of feature records, in input order.
//

pub type Gff3File = Vec<FeatureRecord>;

/// Column 6. Which variant is produced depends on the `ScoreMode` used when decoding.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Score {
    /// The column text as-is, including the `.` placeholder.
    Raw(String),
    Value(f64),
}

impl Score {
    pub fn as_raw(&self) -> Option<&str> {
        match self {
            Score::Raw(s) => Some(s),
            Score::Value(_) => None,
        }
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Score::Raw(_) => None,
            Score::Value(v) => Some(*v),
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::Raw(s) => write!(f, "{}", s),
            Score::Value(v) => write!(f, "{}", v),
        }
    }
}

// One GFF3 data line. Coordinates are 1-based and inclusive; start <= end is not checked. Strand
// and phase are kept verbatim.

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureRecord {
    pub seqid: String,
    pub source: String,
    #[serde(rename = "type")]
    pub feature_type: String,
    pub start: u64,
    pub end: u64,
    pub score: Score,
    pub strand: String,
    pub phase: String,
    #[serde(serialize_with = "sorted_attributes")]
    pub attributes: Attributes,
}

impl FeatureRecord {
    pub fn attribute(&self, tag: &str) -> Option<&str> {
        self.attributes.get(tag).map(String::as_str)
    }
}

// HashMap iteration order is arbitrary; emit tags sorted so output is reproducible.
fn sorted_attributes<S: Serializer>(
    attributes: &Attributes,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let sorted: BTreeMap<&String, &String> = attributes.iter().collect();
    sorted.serialize(serializer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gene() -> FeatureRecord {
        FeatureRecord {
            seqid: String::from("chr1"),
            source: String::from("test"),
            feature_type: String::from("gene"),
            start: 1,
            end: 100,
            score: Score::Raw(String::from(".")),
            strand: String::from("+"),
            phase: String::from("."),
            attributes: Attributes::from([
                (String::from("Name"), String::from("abc")),
                (String::from("ID"), String::from("gene1")),
            ]),
        }
    }

    #[test]
    fn test_attribute_lookup() {
        let rec = gene();
        assert_eq!(rec.attribute("ID"), Some("gene1"));
        assert_eq!(rec.attribute("Parent"), None);
    }

    #[test]
    fn test_score_accessors() {
        assert_eq!(Score::Raw(String::from(".")).as_raw(), Some("."));
        assert_eq!(Score::Raw(String::from(".")).value(), None);
        assert_eq!(Score::Value(0.5).value(), Some(0.5));
        assert_eq!(Score::Value(0.5).to_string(), "0.5");
    }

    #[test]
    fn test_json_has_sorted_attributes() {
        let json = serde_json::to_string(&gene()).unwrap();
        insta::assert_snapshot!(
            json,
            @r#"{"seqid":"chr1","source":"test","type":"gene","start":1,"end":100,"score":".","strand":"+","phase":".","attributes":{"ID":"gene1","Name":"abc"}}"#
        );
    }

    #[test]
    fn test_json_numeric_score() {
        let mut rec = gene();
        rec.score = Score::Value(12.5);
        let value = serde_json::to_value(&rec).unwrap();
        assert_eq!(value["score"], serde_json::json!(12.5));
    }
}
