#![allow(dead_code)]

use calamine::{Reader, Xlsx, open_workbook};
use societe_drivers::societe_browser::fixture::StaticPage;
use societe_scrape::assemble::assemble;
use societe_scrape::{CompanyRecord, FieldExtractor};
use std::path::Path;
use std::time::Duration;

pub async fn record_from(page: StaticPage, profile: &str) -> CompanyRecord {
    assemble(&page, profile, &FieldExtractor::new(Duration::from_millis(5))).await
}

pub fn orange_page() -> StaticPage {
    StaticPage::new()
        .with_text(
            r#"//*[@id="rensjur"]/tbody/tr[1]/td[2]/div/span[1]"#,
            "Date création entreprise 01-03-1991",
        )
        .with_text("#catjur-histo-description", "SA à conseil d'administration")
        .with_text("#siren_number > span.copyNumber__copy", "380129866")
        .with_text("#tva_number > span.copyNumber__copy", "FR89380129866")
        .with_text("#capital-histo-description", "10 640 226 396,00 €")
}

/// Sheet names and the cell text of the first sheet, row by row.
pub fn read_back(path: &Path) -> anyhow::Result<(Vec<String>, Vec<Vec<String>>)> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;
    let names = workbook.sheet_names();
    let range = workbook.worksheet_range(&names[0])?;
    let rows = range
        .rows()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect();
    Ok((names, rows))
}
