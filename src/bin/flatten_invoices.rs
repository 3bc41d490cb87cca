//! Reads the B2B section of a GSTR return from `new.json`, flattens
//! invoices and line items into two tables, merges them column-wise, and
//! writes the result to a spreadsheet, echoing the merged table to stdout.

use std::path::Path;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use findata_tools::flattener::{invoice_table, item_table};
use findata_tools::gst::load_return;
use findata_tools::spreadsheet::write_xlsx;

const INPUT: &str = "new.json";
const OUTPUT: &str = "b2b_invoices.xlsx";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let ret = load_return(Path::new(INPUT))?;
    let invoices = invoice_table(&ret);
    let items = item_table(&ret);
    info!(
        invoices = invoices.row_count(),
        items = items.row_count(),
        "flattened b2b section of {INPUT}"
    );

    let merged = invoices.hcat(items)?;
    write_xlsx(&merged, Path::new(OUTPUT))?;
    println!("{merged}");

    info!("merged table saved as {OUTPUT}");
    Ok(())
}
