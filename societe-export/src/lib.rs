//! Spreadsheet export of scraped company records.
//!
//! A run produces one workbook, `<prefix>_<dd_MM_yyyy_HH_mm>.xlsx`, holding a
//! single sheet of the same name: a header row of column titles, then one
//! row per record in scrape order.
use chrono::NaiveDateTime;
use rust_xlsxwriter::{ColNum, Format, RowNum, Workbook, XlsxError};
use societe_scrape::CompanyRecord;
use societe_scrape::schema::column_titles;
use std::path::{Path, PathBuf};
use tracing::info;

pub const DEFAULT_PREFIX: &str = "Output";

#[derive(thiserror::Error, Debug)]
pub enum ExportError {
    #[error("cannot create output directory {path}: {source}")]
    Directory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Xlsx(#[from] XlsxError),
}

/// Sheet and file stem for an export taken at `now`.
///
/// ```
/// use chrono::NaiveDate;
/// use societe_export::output_stem;
///
/// let now = NaiveDate::from_ymd_opt(2024, 3, 7)
///     .unwrap()
///     .and_hms_opt(9, 5, 0)
///     .unwrap();
/// assert_eq!(output_stem("Output", now), "Output_07_03_2024_09_05");
/// ```
pub fn output_stem(prefix: &str, now: NaiveDateTime) -> String {
    format!("{prefix}_{}", now.format("%d_%m_%Y_%H_%M"))
}

/// Write `records` to a one-sheet workbook at `path`.
///
/// Required fields that were not found are written as their not-found
/// marker; absent optional fields are left as empty cells.
pub fn write_records(
    records: &[CompanyRecord],
    sheet_name: &str,
    path: &Path,
) -> Result<(), ExportError> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name)?;

    for (col, title) in column_titles().enumerate() {
        worksheet.write_string_with_format(0, col as ColNum, title, &header)?;
    }
    for (i, record) in records.iter().enumerate() {
        let row = (i + 1) as RowNum;
        for (col, (_, value)) in record.columns().into_iter().enumerate() {
            if let Some(text) = value {
                worksheet.write_string(row, col as ColNum, text.as_ref())?;
            }
        }
    }
    worksheet.autofit();

    workbook.save(path)?;
    Ok(())
}

/// Export `records` into `directory` as `<prefix>_<timestamp>.xlsx`.
///
/// Returns the path of the written workbook.
pub fn export(
    records: &[CompanyRecord],
    directory: &Path,
    prefix: &str,
    now: NaiveDateTime,
) -> Result<PathBuf, ExportError> {
    std::fs::create_dir_all(directory).map_err(|source| ExportError::Directory {
        path: directory.to_path_buf(),
        source,
    })?;

    let stem = output_stem(prefix, now);
    let path = directory.join(format!("{stem}.xlsx"));
    write_records(records, &stem, &path)?;

    info!(
        target: "societe.export",
        path = %path.display(),
        rows = records.len(),
        "workbook written"
    );
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn stem_pads_every_component() {
        let now = NaiveDate::from_ymd_opt(2023, 12, 31)
            .unwrap()
            .and_hms_opt(23, 59, 59)
            .unwrap();
        assert_eq!(output_stem(DEFAULT_PREFIX, now), "Output_31_12_2023_23_59");
        assert_eq!(output_stem("Run", now), "Run_31_12_2023_23_59");
    }

    #[test]
    fn rejects_invalid_sheet_name() {
        let dir = tempfile::tempdir().unwrap();
        let err = write_records(&[], "bad[name]", &dir.path().join("x.xlsx")).unwrap_err();
        assert!(matches!(err, ExportError::Xlsx(_)));
    }
}
