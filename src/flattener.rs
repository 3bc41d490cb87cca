//! Flattening passes over the parsed return.
//!
//! Two record paths are extracted from the same tree: one row per invoice
//! (`b2b[].inv[]`) and one row per line item (`b2b[].inv[].itms[]`). In
//! both passes the parent loop stamps the ancestor GSTIN onto each child
//! row, so every flat row is self-contained. Row order follows the
//! document's depth-first order.

use crate::gst::{GstReturn, Invoice, LineItem, Party};
use crate::merger::{Cell, Table};

pub const INVOICE_COLUMNS: [&str; 7] = [
    "party_ctin",
    "inv_inum",
    "inv_idt",
    "inv_val",
    "inv_pos",
    "inv_rchrg",
    "inv_typ",
];

pub const ITEM_COLUMNS: [&str; 8] = [
    "party_ctin",
    "item_num",
    "item_rt",
    "item_txval",
    "item_iamt",
    "item_camt",
    "item_samt",
    "item_csamt",
];

/// One invoice-level row with its ancestor GSTIN merged in.
#[derive(Debug, Clone, Default)]
pub struct InvoiceRow {
    pub party_ctin: String,
    pub inum: String,
    pub idt: String,
    pub val: Option<f64>,
    pub pos: Option<String>,
    pub rchrg: Option<String>,
    pub inv_typ: Option<String>,
}

impl InvoiceRow {
    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::Text(self.party_ctin.clone()),
            Cell::Text(self.inum.clone()),
            Cell::Text(self.idt.clone()),
            Cell::from_num(self.val),
            Cell::from_text(self.pos.as_deref()),
            Cell::from_text(self.rchrg.as_deref()),
            Cell::from_text(self.inv_typ.as_deref()),
        ]
    }
}

/// One item-level row with its ancestor GSTIN merged in.
#[derive(Debug, Clone, Default)]
pub struct ItemRow {
    pub party_ctin: String,
    pub num: Option<i64>,
    pub rt: Option<f64>,
    pub txval: Option<f64>,
    pub iamt: Option<f64>,
    pub camt: Option<f64>,
    pub samt: Option<f64>,
    pub csamt: Option<f64>,
}

impl ItemRow {
    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::Text(self.party_ctin.clone()),
            Cell::from_int(self.num),
            Cell::from_num(self.rt),
            Cell::from_num(self.txval),
            Cell::from_num(self.iamt),
            Cell::from_num(self.camt),
            Cell::from_num(self.samt),
            Cell::from_num(self.csamt),
        ]
    }
}

impl LineItem {
    // Leaf flatten: scalar fields only, ancestor columns left for the
    // caller to fill.
    fn flatten(&self) -> ItemRow {
        ItemRow {
            num: self.num,
            rt: self.itm_det.rt,
            txval: self.itm_det.txval,
            iamt: self.itm_det.iamt,
            camt: self.itm_det.camt,
            samt: self.itm_det.samt,
            csamt: self.itm_det.csamt,
            ..Default::default()
        }
    }
}

impl Invoice {
    /// Partial row holding only invoice-scoped fields.
    fn flatten(&self) -> InvoiceRow {
        InvoiceRow {
            inum: self.inum.clone(),
            idt: self.idt.clone(),
            val: self.val,
            pos: self.pos.clone(),
            rchrg: self.rchrg.clone(),
            inv_typ: self.inv_typ.clone(),
            ..Default::default()
        }
    }

    fn item_rows(&self) -> Vec<ItemRow> {
        self.itms.iter().map(LineItem::flatten).collect()
    }
}

impl Party {
    /// Invoice pass: one row per invoice, each inheriting this party's
    /// GSTIN.
    pub fn invoice_rows(&self) -> Vec<InvoiceRow> {
        let mut out = Vec::new();
        for invoice in &self.inv {
            let mut row = invoice.flatten();
            row.party_ctin = self.ctin.clone();
            out.push(row);
        }
        out
    }

    /// Item pass: one row per line item, one nesting level deeper than the
    /// invoice pass, same ancestor stamping.
    pub fn item_rows(&self) -> Vec<ItemRow> {
        let mut out = Vec::new();
        for invoice in &self.inv {
            for item_row in invoice.item_rows() {
                let mut row = item_row;
                row.party_ctin = self.ctin.clone();
                out.push(row);
            }
        }
        out
    }
}

/// Table 1: every invoice reachable under `b2b[].inv[]`.
pub fn invoice_table(ret: &GstReturn) -> Table {
    let rows = ret
        .b2b
        .iter()
        .flat_map(Party::invoice_rows)
        .map(|row| row.cells())
        .collect();
    Table::new(&INVOICE_COLUMNS, rows)
}

/// Table 2: every line item reachable under `b2b[].inv[].itms[]`.
pub fn item_table(ret: &GstReturn) -> Table {
    let rows = ret
        .b2b
        .iter()
        .flat_map(Party::item_rows)
        .map(|row| row.cells())
        .collect();
    Table::new(&ITEM_COLUMNS, rows)
}
