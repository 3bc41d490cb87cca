//! GSTR-style B2B return: nested document model and loader.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top of the return document. Only the `b2b` section is modelled;
/// unknown sections and keys are ignored on deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct GstReturn {
    pub b2b: Vec<Party>,
}

/// One counterparty, keyed by GSTIN, holding its invoices.
#[derive(Debug, Clone, Deserialize)]
pub struct Party {
    pub ctin: String,
    #[serde(default)]
    pub inv: Vec<Invoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Invoice {
    pub inum: String,
    pub idt: String,
    pub val: Option<f64>,
    pub pos: Option<String>,
    pub rchrg: Option<String>,
    pub inv_typ: Option<String>,
    #[serde(default)]
    pub itms: Vec<LineItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LineItem {
    pub num: Option<i64>,
    pub itm_det: ItemDetail,
}

/// Tax breakup of one line item.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemDetail {
    pub rt: Option<f64>,
    pub txval: Option<f64>,
    pub iamt: Option<f64>,
    pub camt: Option<f64>,
    pub samt: Option<f64>,
    pub csamt: Option<f64>,
}

/// Parses the nested return document into a tree.
///
/// Fails fast with context on open or syntax errors; nothing downstream
/// runs, and no output file is produced, unless this yields a tree.
pub fn load_return(path: &Path) -> Result<GstReturn> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let parsed = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(parsed)
}

#[cfg(test)]
pub(crate) const SAMPLE_RETURN: &str = r#"{
  "gstin": "01AABCE2207R1Z5",
  "fp": "112016",
  "b2b": [
    {
      "ctin": "27AHQPA7588L1ZJ",
      "inv": [
        {
          "inum": "S008400",
          "idt": "24-11-2016",
          "val": 729248.16,
          "pos": "06",
          "rchrg": "N",
          "inv_typ": "R",
          "itms": [
            {
              "num": 1,
              "itm_det": {
                "rt": 5.0,
                "txval": 10000.0,
                "iamt": 325.0,
                "camt": 0.0,
                "samt": 0.0,
                "csamt": 500.0
              }
            }
          ]
        }
      ]
    },
    {
      "ctin": "29AABCR1718E1ZL",
      "inv": [
        {
          "inum": "S008401",
          "idt": "19-12-2016",
          "val": 81542.05,
          "pos": "29",
          "rchrg": "N",
          "inv_typ": "R",
          "itms": [
            {
              "num": 1,
              "itm_det": {
                "rt": 18.0,
                "txval": 69103.43,
                "iamt": 12438.62,
                "camt": 0.0,
                "samt": 0.0,
                "csamt": 0.0
              }
            }
          ]
        }
      ]
    }
  ]
}"#;
