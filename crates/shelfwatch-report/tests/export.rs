//! Export contract and round-trip behavior.

use chrono::NaiveDate;
use shelfwatch_model::{
    AlertPolicy, CellValue, Dataset, FieldId, FillStyle, ReagentRecord, ResolvedFields,
    ShelfwatchError,
};
use shelfwatch_report::{ExportSchema, classify, export_csv};

fn reference() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 10).expect("valid date")
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn sample_dataset() -> Dataset {
    let mut fields = ResolvedFields::default();
    fields.insert(FieldId::Name, 0);
    fields.insert(FieldId::ExpiryDate, 1);
    let mut dataset = Dataset::new(
        vec!["시약이름".to_string(), "유통기한".to_string()],
        fields,
    );
    let rows = [
        ("NaCl", Some(date(2024, 6, 20))),
        ("Ethanol", Some(date(2024, 6, 1))),
        ("Acetone", None),
    ];
    for (name, expiry) in rows {
        let expiry_text = expiry
            .map(|value| CellValue::Text(value.to_string()))
            .unwrap_or(CellValue::Missing);
        dataset.push_record(ReagentRecord {
            cells: vec![CellValue::Text(name.to_string()), expiry_text],
            expiry,
        });
    }
    dataset
}

#[test]
fn export_writes_remaining_days_under_schema_header() {
    let dir = tempfile::tempdir().expect("tempdir");
    let destination = dir.path().join("colored.csv");
    let dataset = sample_dataset();
    let classified = classify(&dataset, reference(), &AlertPolicy::default());

    let outcome =
        export_csv(&classified, &ExportSchema::default(), &destination).expect("export");
    assert_eq!(outcome.rows, 3);
    // Fill plan is row-aligned with the written order: Ethanol (expired)
    // first, then NaCl (imminent), then dateless Acetone.
    assert_eq!(
        outcome.fills,
        vec![FillStyle::Expired, FillStyle::Attention, FillStyle::None]
    );

    let written = std::fs::read_to_string(&destination).expect("read export");
    let mut lines = written.lines();
    assert_eq!(
        lines.next(),
        Some("시약이름,유통기한,남은일수")
    );
    assert_eq!(lines.next(), Some("Ethanol,2024-06-01,-9"));
    assert_eq!(lines.next(), Some("NaCl,2024-06-20,10"));
    assert_eq!(lines.next(), Some("Acetone,,"));
}

#[test]
fn export_round_trips_through_the_loader() {
    let dir = tempfile::tempdir().expect("tempdir");
    let destination = dir.path().join("colored.csv");
    let dataset = sample_dataset();
    let classified = classify(&dataset, reference(), &AlertPolicy::default());
    let outcome =
        export_csv(&classified, &ExportSchema::default(), &destination).expect("export");

    let reloaded = shelfwatch_ingest::load_dataset(
        &destination,
        &shelfwatch_model::FieldMap::default(),
    )
    .expect("reload export");
    assert_eq!(reloaded.len(), outcome.rows);

    // Remaining-days values survive the round trip numerically when
    // classified against the same reference date.
    let reclassified = classify(&reloaded, reference(), &AlertPolicy::default());
    let original: Vec<Option<i64>> = classified
        .rows
        .iter()
        .map(|row| row.remaining_days)
        .collect();
    let round: Vec<Option<i64>> = reclassified
        .rows
        .iter()
        .map(|row| row.remaining_days)
        .collect();
    assert_eq!(original, round);
}

#[test]
fn schema_collision_is_a_contract_error() {
    let mut fields = ResolvedFields::default();
    fields.insert(FieldId::ExpiryDate, 0);
    let mut dataset = Dataset::new(
        vec!["유통기한".to_string(), "남은일수".to_string()],
        fields,
    );
    dataset.push_record(ReagentRecord {
        cells: vec![
            CellValue::Text("2024-06-20".to_string()),
            CellValue::Text("10".to_string()),
        ],
        expiry: Some(date(2024, 6, 20)),
    });
    let classified = classify(&dataset, reference(), &AlertPolicy::default());

    let dir = tempfile::tempdir().expect("tempdir");
    let error = export_csv(
        &classified,
        &ExportSchema::default(),
        &dir.path().join("out.csv"),
    )
    .unwrap_err();
    assert!(matches!(error, ShelfwatchError::Schema(_)));
}
