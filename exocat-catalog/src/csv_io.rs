//! CSV boundary of the catalog.
//!
//! The first record is the header. Empty cells are undefined. A column is
//! numeric when every non-empty cell parses as `f64` and text otherwise;
//! `star_name` and `star_sp_type` are always text so that names such as
//! `"55"` survive.

use crate::catalog::{Catalog, Column, STAR_NAME, STAR_SP_TYPE};
use crate::error::Result;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

const TEXT_COLUMNS: [&str; 2] = [STAR_NAME, STAR_SP_TYPE];

pub fn read_csv<R: Read>(reader: R) -> Result<Catalog> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let headers: Vec<String> = csv_reader.headers()?.iter().map(str::to_string).collect();

    let mut raw: Vec<Vec<Option<String>>> = vec![Vec::new(); headers.len()];
    for record in csv_reader.records() {
        let record = record?;
        for (col, cells) in raw.iter_mut().enumerate() {
            let cell = record.get(col).filter(|c| !c.is_empty()).map(str::to_string);
            cells.push(cell);
        }
    }

    let rows = raw.first().map_or(0, Vec::len);
    let mut catalog = Catalog::with_rows(rows);
    for (name, cells) in headers.into_iter().zip(raw) {
        let column = if TEXT_COLUMNS.contains(&name.as_str()) {
            Column::Text(cells)
        } else {
            infer_column(cells)
        };
        catalog.set_column(name, column)?;
    }
    Ok(catalog)
}

pub fn read_csv_path(path: impl AsRef<Path>) -> Result<Catalog> {
    let file = File::open(path)?;
    read_csv(BufReader::new(file))
}

pub fn write_csv<W: Write>(catalog: &Catalog, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(catalog.column_names())?;

    let columns: Vec<&Column> = catalog
        .column_names()
        .iter()
        .filter_map(|name| catalog.column(name))
        .collect();
    for row in 0..catalog.len() {
        let record: Vec<String> = columns
            .iter()
            .map(|column| column.cell(row).unwrap_or_default())
            .collect();
        csv_writer.write_record(&record)?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn write_csv_path(catalog: &Catalog, path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(path)?;
    write_csv(catalog, BufWriter::new(file))
}

fn infer_column(cells: Vec<Option<String>>) -> Column {
    let parsed: Option<Vec<Option<f64>>> = cells
        .iter()
        .map(|cell| match cell {
            Some(text) => parse_cell(text),
            None => Some(None),
        })
        .collect();
    match parsed {
        Some(values) => Column::Numeric(values),
        None => Column::Text(cells),
    }
}

/// `None` when `text` is not a number; `Some(None)` for `nan`, which reads
/// as undefined.
fn parse_cell(text: &str) -> Option<Option<f64>> {
    let val = text.parse::<f64>().ok()?;
    Some((!val.is_nan()).then_some(val))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
star_name,star_sp_type,mass,mass_error_min,note
55 Cnc,G8V,0.0263,0.001,
55 Cnc,G8V,0.83,,hot
Kepler-1,,nan,,
";

    #[test]
    fn reads_columns_and_types() {
        let catalog = read_csv(SAMPLE.as_bytes()).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(
            catalog.column_names(),
            &["star_name", "star_sp_type", "mass", "mass_error_min", "note"]
        );
        assert_eq!(
            catalog.text(STAR_NAME).unwrap()[0].as_deref(),
            Some("55 Cnc")
        );
        assert_eq!(catalog.text(STAR_SP_TYPE).unwrap()[2], None);
        assert_eq!(catalog.numeric("mass").unwrap()[1], Some(0.83));
        assert_eq!(catalog.numeric("mass_error_min").unwrap()[1], None);
        assert!(catalog.text("note").is_ok());
    }

    #[test]
    fn nan_cell_is_undefined() {
        let catalog = read_csv(SAMPLE.as_bytes()).unwrap();
        let mass = catalog.numeric("mass").unwrap();
        assert!(mass[2].is_none());
    }

    #[test]
    fn numeric_names_stay_text() {
        let csv = "star_name,mass\n55,1.0\n";
        let catalog = read_csv(csv.as_bytes()).unwrap();
        assert!(catalog.text(STAR_NAME).is_ok());
    }

    #[test]
    fn writes_empty_cells_for_undefined() {
        let catalog = read_csv(SAMPLE.as_bytes()).unwrap();
        let mut out = Vec::new();
        write_csv(&catalog, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "star_name,star_sp_type,mass,mass_error_min,note");
        assert_eq!(lines[1], "55 Cnc,G8V,0.0263,0.001,");
        assert_eq!(lines[3], "Kepler-1,,,,");
    }

    #[test]
    fn header_only() {
        let catalog = read_csv("star_name,mass\n".as_bytes()).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.column_names().len(), 2);
    }
}
