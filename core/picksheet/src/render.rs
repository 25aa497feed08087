//! FILENAME: core/picksheet/src/render.rs
// PURPOSE: Lays out a PickSheet with genpdf and writes it to disk.
// CONTEXT: Labels stay German; the sheet is handed to the carrier's driver in Germany.

use crate::{PickSheet, SheetError};
use genpdf::elements::{Break, FrameCellDecorator, PageBreak, Paragraph, TableLayout};
use genpdf::{Document, SimplePageDecorator};
use std::path::{Path, PathBuf};

pub const DEFAULT_FONT_FAMILY: &str = "Roboto";

const DOCUMENT_TITLE: &str = "Pickup and Picksheet";
const PICKUP_DATE_LINE: &str = "Abholung am ____._____.202__";
const PICK_SHEET_HEADING: &str = "Pick Sheet";
const PAGE_MARGIN_MM: u16 = 10;
const SECTION_GAP_LINES: i32 = 3;

const PICKUP_COLUMNS: [&str; 2] = ["Order Nummer", "Tracking Nummer"];
const PICK_COLUMNS: [&str; 5] = ["Name", "SKU", "Size", "Condition", "Number"];
const PICK_COLUMN_WEIGHTS: [usize; 5] = [3, 2, 1, 1, 1];

/// Where to find the TrueType files of a family: `<dir>/<family>-Regular.ttf`,
/// `-Bold`, `-Italic` and `-BoldItalic`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontSpec {
    pub dir: PathBuf,
    pub family: String,
}

impl FontSpec {
    pub fn new(dir: impl Into<PathBuf>, family: impl Into<String>) -> Self {
        FontSpec {
            dir: dir.into(),
            family: family.into(),
        }
    }
}

fn load_document(fonts: &FontSpec) -> Result<Document, SheetError> {
    let family = genpdf::fonts::from_files(&fonts.dir, &fonts.family, None).map_err(|source| {
        SheetError::FontLoad {
            dir: fonts.dir.clone(),
            family: fonts.family.clone(),
            source,
        }
    })?;
    Ok(Document::new(family))
}

fn framed_table(weights: Vec<usize>) -> TableLayout {
    let mut table = TableLayout::new(weights);
    table.set_cell_decorator(FrameCellDecorator::new(true, true, false));
    table
}

fn push_row(table: &mut TableLayout, cells: Vec<String>) -> Result<(), SheetError> {
    let mut row = table.row();
    for cell in cells {
        row.push_element(Paragraph::new(cell));
    }
    row.push()?;
    Ok(())
}

fn pickup_table(sheet: &PickSheet) -> Result<TableLayout, SheetError> {
    let mut table = framed_table(vec![1; PICKUP_COLUMNS.len()]);
    push_row(&mut table, PICKUP_COLUMNS.iter().map(|c| c.to_string()).collect())?;
    for row in &sheet.pickup_rows {
        push_row(
            &mut table,
            vec![row.order_number.clone(), row.tracking_number.clone()],
        )?;
    }
    Ok(table)
}

fn pick_table(sheet: &PickSheet) -> Result<TableLayout, SheetError> {
    let mut table = framed_table(PICK_COLUMN_WEIGHTS.to_vec());
    push_row(&mut table, PICK_COLUMNS.iter().map(|c| c.to_string()).collect())?;
    for row in &sheet.pick_rows {
        push_row(
            &mut table,
            vec![
                row.name.clone(),
                row.sku.clone(),
                row.size.clone(),
                row.condition.clone(),
                row.count.to_string(),
            ],
        )?;
    }
    Ok(table)
}

/// Build the full document for a sheet without writing it.
pub fn build_document(sheet: &PickSheet, fonts: &FontSpec) -> Result<Document, SheetError> {
    let mut doc = load_document(fonts)?;
    doc.set_title(DOCUMENT_TITLE);

    let mut decorator = SimplePageDecorator::new();
    decorator.set_margins(PAGE_MARGIN_MM);
    doc.set_page_decorator(decorator);

    // Page 1: carrier pickup
    doc.push(Paragraph::new(PICKUP_DATE_LINE));
    doc.push(Paragraph::new(format!("{} Pakete", sheet.package_count())));
    doc.push(Break::new(SECTION_GAP_LINES));
    doc.push(pickup_table(sheet)?);
    doc.push(Paragraph::new(format!("Unterschrift Fahrer {}", sheet.carrier)));

    doc.push(PageBreak::new());

    // Page 2: picking
    doc.push(Paragraph::new(PICK_SHEET_HEADING));
    doc.push(Break::new(SECTION_GAP_LINES));
    doc.push(pick_table(sheet)?);

    Ok(doc)
}

/// Render the sheet to `out_path`.
pub fn render(sheet: &PickSheet, fonts: &FontSpec, out_path: &Path) -> Result<(), SheetError> {
    let doc = build_document(sheet, fonts)?;
    log::info!(target: "PDF", "Beginning to write pdf to {}", out_path.display());
    doc.render_to_file(out_path)?;
    log::info!(target: "PDF", "Printed PDF ({} packages)", sheet.package_count());
    Ok(())
}
