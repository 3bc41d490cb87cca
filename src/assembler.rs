//! Row-by-row assembly of the synthetic account dataset.
//!
//! Fields are drawn in fixed column order. Two kinds of correlation are
//! threaded through the loop: cross-field (risk codes, SMA skew, balances
//! derived from the sanctioned limit) and cross-record (the duplicate
//! customer identity injected on a fixed stride).

use anyhow::Result;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::GenConfig;
use crate::generators::{pick, round2, FieldSampler, ZERO_DATE};

/// Trailing variations a duplicated customer shows up under.
const DUP_NAME_SUFFIXES: [&str; 4] = ["", " LTD", " INC", " GROUP"];

/// One CC/OD account row. Field order is the output column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountRecord {
    #[serde(rename = "ACCTNO")]
    pub acctno: u64,
    #[serde(rename = "ACCTDESC")]
    pub acctdesc: String,
    #[serde(rename = "CUSTNUMBER")]
    pub custnumber: u64,
    #[serde(rename = "CUSTNAME")]
    pub custname: String,
    #[serde(rename = "INTRATE")]
    pub intrate: f64,
    #[serde(rename = "LIMIT")]
    pub limit: u64,
    #[serde(rename = "DP")]
    pub dp: u64,
    #[serde(rename = "LMTEXPDT")]
    pub lmtexpdt: String,
    #[serde(rename = "ACCTBAL")]
    pub acctbal: f64,
    #[serde(rename = "UNCLRBAL")]
    pub unclrbal: u64,
    #[serde(rename = "IRREGAMT")]
    pub irregamt: f64,
    #[serde(rename = "NEWIRAC")]
    pub newirac: u8,
    #[serde(rename = "OLDIRAC")]
    pub oldirac: u8,
    #[serde(rename = "SANC_RENDT")]
    pub sanc_rendt: String,
    #[serde(rename = "ARRCOND")]
    pub arrcond: u32,
    #[serde(rename = "CURRENCY")]
    pub currency: String,
    #[serde(rename = "MAINTBR")]
    pub maintbr: u32,
    #[serde(rename = "IRRGDT")]
    pub irrgdt: String,
    #[serde(rename = "UNREALINT")]
    pub unrealint: f64,
    #[serde(rename = "ACCRINT")]
    pub accrint: f64,
    #[serde(rename = "STRESS")]
    pub stress: String,
    #[serde(rename = "SMA_CODE")]
    pub sma_code: String,
    #[serde(rename = "RA")]
    pub ra: String,
    #[serde(rename = "RA_DATE")]
    pub ra_date: String,
    #[serde(rename = "WRITE_OFF_FLAG")]
    pub write_off_flag: String,
    #[serde(rename = "WRITE_OFF_AMT")]
    pub write_off_amt: u64,
    #[serde(rename = "WRITE_OFF_DATE")]
    pub write_off_date: String,
    #[serde(rename = "NULL2")]
    pub null2: String,
    #[serde(rename = "Column1")]
    pub column1: String,
    #[serde(rename = "_1")]
    pub col_1: String,
}

/// Builds `cfg.records` fully populated rows.
pub fn assemble_dataset(cfg: &GenConfig, rng: &mut impl Rng) -> Result<Vec<AccountRecord>> {
    let sampler = FieldSampler::new()?;
    let mut records: Vec<AccountRecord> = Vec::with_capacity(cfg.records);

    for i in 0..cfg.records {
        let mut custnumber = sampler.customer_number(rng);
        let mut custname = sampler.customer_name(rng);
        // Duplicate-customer defect: on the stride, reuse the previous
        // row's identity under a slightly varied trading name.
        if cfg.dup_stride > 0 && i > 0 && i % cfg.dup_stride == 0 {
            let prev = &records[i - 1];
            custnumber = prev.custnumber;
            custname = duplicated_name(&prev.custname, rng);
        }

        let intrate = if rng.random_bool(0.3) {
            0.0
        } else {
            round2(rng.random_range(8.0..12.0))
        };

        let limit: u64 = rng.random_range(10_000_000..=100_000_000);
        // Drawing power usually mirrors the limit, a known upstream defect.
        let dp = if rng.random_bool(0.8) { limit } else { 0 };

        // Utilization deliberately overshoots the limit; the sign flip
        // models credit balances parked on an overdraft account.
        let utilization: f64 = rng.random_range(0.5..1.2);
        let sign = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        let acctbal = round2(limit as f64 * utilization * sign);

        let irregamt = if rng.random_bool(0.7) {
            0.0
        } else {
            round2(rng.random_range(10_000.0..500_000.0))
        };

        let newirac = sampler.risk_code(rng);
        let oldirac = if rng.random_bool(0.6) {
            newirac
        } else {
            sampler.risk_code(rng)
        };

        let arrcond = if rng.random_bool(0.7) {
            0
        } else {
            rng.random_range(602..=902)
        };

        let unrealint = if rng.random_bool(0.8) {
            0.0
        } else {
            round2(rng.random_range(10_000.0..100_000.0))
        };
        let accrint = if rng.random_bool(0.8) {
            0.0
        } else {
            round2(rng.random_range(10_000.0..200_000.0))
        };

        let ra = if rng.random_bool(0.5) {
            String::new()
        } else {
            rng.random_range(1..=9).to_string()
        };
        let ra_date = if rng.random_bool(0.3) {
            ZERO_DATE.to_string()
        } else {
            sampler.date_within(rng).format("%Y-%m-%d").to_string()
        };

        records.push(AccountRecord {
            acctno: sampler.account_number(rng),
            acctdesc: sampler.account_description(rng),
            custnumber,
            custname,
            intrate,
            limit,
            dp,
            lmtexpdt: sampler.date_or_sentinel(rng),
            acctbal,
            unclrbal: 0,
            irregamt,
            newirac,
            oldirac,
            sanc_rendt: sampler.date_within(rng).format("%d/%m/%Y").to_string(),
            arrcond,
            currency: "INR".to_string(),
            maintbr: sampler.branch_code(rng),
            irrgdt: sampler.date_or_sentinel(rng),
            unrealint,
            accrint,
            stress: sampler.stress_flag(rng),
            sma_code: sampler.sma_code(rng, newirac > 3),
            ra,
            ra_date,
            write_off_flag: "N".to_string(),
            write_off_amt: 0,
            write_off_date: ZERO_DATE.to_string(),
            null2: String::new(),
            column1: if rng.random_bool(0.9) {
                String::new()
            } else {
                "STD".to_string()
            },
            col_1: if rng.random_bool(0.9) {
                String::new()
            } else {
                "0.0".to_string()
            },
        });
    }

    Ok(records)
}

fn duplicated_name(prev: &str, rng: &mut impl Rng) -> String {
    let mut words = prev.split_whitespace();
    let first = words.next().unwrap_or(prev);
    let last = words.next().unwrap_or("");
    format!("{first} {last}{}", pick(rng, &DUP_NAME_SUFFIXES))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn dataset(cfg: &GenConfig) -> Vec<AccountRecord> {
        let mut rng = StdRng::seed_from_u64(cfg.seed);
        assemble_dataset(cfg, &mut rng).unwrap()
    }

    #[test]
    fn produces_the_configured_record_count() {
        let records = dataset(&GenConfig::default());
        assert_eq!(records.len(), 500);
    }

    #[test]
    fn same_seed_means_identical_datasets() {
        let cfg = GenConfig::default();
        assert_eq!(dataset(&cfg), dataset(&cfg));
    }

    #[test]
    fn stride_rows_duplicate_the_previous_customer() {
        let cfg = GenConfig {
            records: 120,
            ..GenConfig::default()
        };
        let records = dataset(&cfg);
        for i in [50, 100] {
            assert_eq!(records[i].custnumber, records[i - 1].custnumber);
            let mut prev_words = records[i - 1].custname.split_whitespace();
            let stem = format!(
                "{} {}",
                prev_words.next().unwrap(),
                prev_words.next().unwrap()
            );
            assert!(
                records[i].custname.starts_with(&stem),
                "row {i}: {:?} does not carry over {:?}",
                records[i].custname,
                stem
            );
        }
    }

    #[test]
    fn numeric_fields_respect_their_ranges() {
        for record in dataset(&GenConfig::default()) {
            assert!(record.intrate == 0.0 || (8.0..=12.0).contains(&record.intrate));
            assert!((10_000_000..=100_000_000).contains(&record.limit));
            assert!(record.dp == 0 || record.dp == record.limit);
            let magnitude = record.acctbal.abs();
            let limit = record.limit as f64;
            assert!(magnitude >= 0.5 * limit - 0.01 && magnitude <= 1.2 * limit + 0.01);
            assert!(record.irregamt == 0.0 || (10_000.0..=500_000.0).contains(&record.irregamt));
            assert!(record.newirac <= 8 && record.oldirac <= 8);
            assert!(record.arrcond == 0 || (602..=902).contains(&record.arrcond));
            assert!(record.maintbr == 0 || (10_000..=20_000).contains(&record.maintbr));
        }
    }

    #[test]
    fn constant_columns_hold_their_sentinels() {
        for record in dataset(&GenConfig::default()) {
            assert_eq!(record.currency, "INR");
            assert_eq!(record.unclrbal, 0);
            assert_eq!(record.write_off_flag, "N");
            assert_eq!(record.write_off_amt, 0);
            assert_eq!(record.write_off_date, ZERO_DATE);
            assert_eq!(record.null2, "");
        }
    }

    #[test]
    fn risk_and_flag_fields_come_from_their_vocabularies() {
        for record in dataset(&GenConfig::default()) {
            assert!(["", "N", "SMA1", "SMA2", "NPA"].contains(&record.sma_code.as_str()));
            assert!(["", "N", "Y"].contains(&record.stress.as_str()));
            assert!(record.ra.is_empty() || record.ra.parse::<u8>().map(|v| (1..=9).contains(&v)).unwrap_or(false));
        }
    }
}
