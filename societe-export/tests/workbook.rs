mod common;

use chrono::NaiveDate;
use common::{orange_page, read_back, record_from};
use societe_drivers::societe_browser::fixture::StaticPage;
use societe_export::{DEFAULT_PREFIX, export, write_records};
use societe_scrape::schema::column_titles;

fn noon() -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 2)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

#[tokio::test]
async fn export_writes_header_and_one_row_per_record() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let records = vec![
        record_from(orange_page(), "orange-380129866").await,
        record_from(StaticPage::new(), "free-421938861").await,
    ];

    let path = export(&records, dir.path(), DEFAULT_PREFIX, noon())?;
    assert_eq!(
        path.file_name().and_then(|n| n.to_str()),
        Some("Output_02_05_2024_12_00.xlsx")
    );

    let (sheets, rows) = read_back(&path)?;
    assert_eq!(sheets, vec!["Output_02_05_2024_12_00".to_string()]);
    assert_eq!(rows.len(), 3);

    let titles: Vec<String> = column_titles().map(String::from).collect();
    assert_eq!(rows[0], titles);

    let orange = &rows[1];
    assert_eq!(orange[0], "orange-380129866");
    assert_eq!(orange[1], "01-03-1991");
    assert_eq!(orange[5], "380129866");
    assert_eq!(orange[7], "FR89380129866");
    assert_eq!(orange[17], "10 640 226 396,00 €");
    assert_eq!(orange[11], "", "absent optional value is an empty cell");

    let free = &rows[2];
    assert_eq!(free[0], "free-421938861");
    assert_eq!(free[6], "Data not found for selector: #siret_number");
    assert_eq!(free[7], "");
    Ok(())
}

#[tokio::test]
async fn record_order_is_kept() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let mut records = Vec::new();
    for profile in ["bouygues-telecom-397480930", "orange-380129866", "free-421938861"] {
        records.push(record_from(StaticPage::new(), profile).await);
    }

    let path = dir.path().join("ordered.xlsx");
    write_records(&records, "Output", &path)?;

    let (_, rows) = read_back(&path)?;
    let profiles: Vec<&str> = rows[1..].iter().map(|r| r[0].as_str()).collect();
    assert_eq!(
        profiles,
        vec!["bouygues-telecom-397480930", "orange-380129866", "free-421938861"]
    );
    Ok(())
}

#[test]
fn empty_run_still_writes_the_header() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let out = dir.path().join("nested").join("exports");

    let path = export(&[], &out, "Run", noon())?;

    assert!(path.starts_with(&out));
    let (_, rows) = read_back(&path)?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][0], "Societe URL");
    Ok(())
}
