//! Classification, ordering, and search behavior.

use chrono::NaiveDate;
use proptest::prelude::{prop, prop_assert, prop_assert_eq, proptest};
use shelfwatch_model::{
    AlertPolicy, CellValue, Dataset, FieldId, FillStyle, ReagentRecord, ResolvedFields, Severity,
};
use shelfwatch_report::{classify, remaining_days};

fn reference() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 10).expect("valid date")
}

/// Builds a two-column dataset: name plus expiry date text.
fn dataset(rows: &[(&str, Option<NaiveDate>)]) -> Dataset {
    let mut fields = ResolvedFields::default();
    fields.insert(FieldId::Name, 0);
    fields.insert(FieldId::ExpiryDate, 1);
    let mut dataset = Dataset::new(
        vec!["시약이름".to_string(), "유통기한".to_string()],
        fields,
    );
    for (name, expiry) in rows {
        let expiry_text = expiry
            .map(|date| CellValue::Text(date.to_string()))
            .unwrap_or(CellValue::Missing);
        dataset.push_record(ReagentRecord {
            cells: vec![CellValue::Text((*name).to_string()), expiry_text],
            expiry: *expiry,
        });
    }
    dataset
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[test]
fn ten_days_out_is_imminent() {
    let data = dataset(&[("NaCl", Some(date(2024, 6, 20)))]);
    let classified = classify(&data, reference(), &AlertPolicy::default());
    let row = &classified.rows[0];
    assert_eq!(row.remaining_days, Some(10));
    assert_eq!(row.severity, Some(Severity::Imminent));
    assert_eq!(row.fill, FillStyle::Attention);
}

#[test]
fn nine_days_past_is_expired_with_red_fill() {
    let data = dataset(&[("Ethanol", Some(date(2024, 6, 1)))]);
    let classified = classify(&data, reference(), &AlertPolicy::default());
    let row = &classified.rows[0];
    assert_eq!(row.remaining_days, Some(-9));
    assert_eq!(row.severity, Some(Severity::Expired));
    assert_eq!(row.fill, FillStyle::Expired);
}

#[test]
fn expiring_today_is_zero_days() {
    // Plain calendar difference; no "+1 / today is day one" convention.
    assert_eq!(remaining_days(reference(), reference()), 0);
    let data = dataset(&[("Acetone", Some(reference()))]);
    let classified = classify(&data, reference(), &AlertPolicy::default());
    assert_eq!(classified.rows[0].remaining_days, Some(0));
    assert_eq!(classified.rows[0].severity, Some(Severity::Attention));
}

#[test]
fn unknown_dates_are_excluded_from_urgency_but_listed_last() {
    let data = dataset(&[
        ("NoDate", None),
        ("Urgent", Some(date(2024, 6, 12))),
        ("Safe", Some(date(2025, 1, 1))),
    ]);
    let classified = classify(&data, reference(), &AlertPolicy::default());

    // Full listing keeps every record, unknowns at the end.
    assert_eq!(classified.rows.len(), 3);
    let last = classified.rows.last().expect("rows");
    assert_eq!(last.record, 0);
    assert_eq!(last.remaining_days, None);
    assert_eq!(last.severity, None);
    assert_eq!(last.fill, FillStyle::None);
    assert_eq!(last.remaining_label(), "unknown");

    // Never surfaced as urgent.
    assert!(
        classified
            .attention_subset()
            .iter()
            .all(|row| row.remaining_days.is_some())
    );
}

#[test]
fn ordering_is_ascending_with_stable_ties() {
    let same_day = Some(date(2024, 6, 15));
    let data = dataset(&[
        ("Later", Some(date(2024, 7, 1))),
        ("TieA", same_day),
        ("Past", Some(date(2024, 6, 1))),
        ("TieB", same_day),
    ]);
    let classified = classify(&data, reference(), &AlertPolicy::default());
    let order: Vec<usize> = classified.rows.iter().map(|row| row.record).collect();
    // Past (-9), TieA (5), TieB (5), Later (21); ties keep input order.
    assert_eq!(order, vec![2, 1, 3, 0]);
}

#[test]
fn attention_subset_honors_the_window() {
    let data = dataset(&[
        ("Expired", Some(date(2024, 6, 1))),
        ("Edge", Some(date(2024, 6, 20))),
        ("Beyond", Some(date(2024, 6, 21))),
    ]);
    let classified = classify(&data, reference(), &AlertPolicy::default());
    let subset = classified.attention_subset();
    let names: Vec<&str> = subset
        .iter()
        .map(|row| classified.dataset.field_text(classified.record(row), FieldId::Name))
        .collect();
    assert_eq!(names, vec!["Expired", "Edge"]);
}

#[test]
fn severity_buckets_are_selectable() {
    let data = dataset(&[
        ("Expired", Some(date(2024, 6, 1))),
        ("Imminent", Some(date(2024, 6, 17))),
        ("Attention", Some(date(2024, 6, 12))),
        ("Safe", Some(date(2025, 6, 1))),
    ]);
    let classified = classify(&data, reference(), &AlertPolicy::default());
    assert_eq!(classified.by_severity(Severity::Expired).len(), 1);
    assert_eq!(classified.by_severity(Severity::Imminent).len(), 1);
    assert_eq!(classified.by_severity(Severity::Attention).len(), 1);
    assert_eq!(classified.by_severity(Severity::Safe).len(), 1);
}

#[test]
fn fill_plan_is_row_aligned_with_the_listing() {
    let data = dataset(&[
        ("Expired", Some(date(2024, 6, 1))),
        ("Imminent", Some(date(2024, 6, 17))),
        ("Safe", Some(date(2025, 6, 1))),
        ("NoDate", None),
    ]);
    let classified = classify(&data, reference(), &AlertPolicy::default());

    let plan = classified.fill_plan();
    assert_eq!(plan.len(), classified.rows.len());
    for (fill, row) in plan.iter().zip(&classified.rows) {
        assert_eq!(*fill, row.fill);
    }
    // Listing order: Expired (-9), Imminent (7), Safe (356), NoDate.
    assert_eq!(
        plan,
        vec![
            FillStyle::Expired,
            FillStyle::Attention,
            FillStyle::None,
            FillStyle::None,
        ]
    );
}

#[test]
fn search_is_case_insensitive_and_order_preserving() {
    let data = dataset(&[
        ("NaCl", Some(date(2024, 6, 20))),
        ("Ethanol", Some(date(2024, 6, 1))),
        ("NaClO", Some(date(2024, 6, 12))),
    ]);
    let classified = classify(&data, reference(), &AlertPolicy::default());

    let lower = classified.search("nacl");
    let upper = classified.search("NACL");
    assert_eq!(lower.len(), 2);
    assert_eq!(
        lower.iter().map(|row| row.record).collect::<Vec<_>>(),
        upper.iter().map(|row| row.record).collect::<Vec<_>>()
    );
    // Established sort order survives filtering: NaClO (2 days) first.
    assert_eq!(lower[0].record, 2);
    assert_eq!(lower[1].record, 0);
}

#[test]
fn empty_search_term_returns_everything() {
    let data = dataset(&[
        ("NaCl", Some(date(2024, 6, 20))),
        ("Ethanol", Some(date(2024, 6, 1))),
    ]);
    let classified = classify(&data, reference(), &AlertPolicy::default());
    assert_eq!(classified.search("").len(), 2);
    assert_eq!(classified.search("   ").len(), 2);
}

fn offsets_to_dataset(offsets: &[Option<i64>]) -> Dataset {
    let rows: Vec<(String, Option<NaiveDate>)> = offsets
        .iter()
        .enumerate()
        .map(|(index, offset)| {
            (
                format!("reagent-{index}"),
                offset.map(|days| reference() + chrono::Duration::days(days)),
            )
        })
        .collect();
    let borrowed: Vec<(&str, Option<NaiveDate>)> = rows
        .iter()
        .map(|(name, expiry)| (name.as_str(), *expiry))
        .collect();
    dataset(&borrowed)
}

proptest! {
    #[test]
    fn listing_is_non_decreasing_in_remaining_days(
        offsets in prop::collection::vec(prop::option::of(-40i64..80), 0..40)
    ) {
        let data = offsets_to_dataset(&offsets);
        let classified = classify(&data, reference(), &AlertPolicy::default());

        let known: Vec<i64> = classified
            .rows
            .iter()
            .filter_map(|row| row.remaining_days)
            .collect();
        prop_assert!(known.windows(2).all(|pair| pair[0] <= pair[1]));

        // Unknowns form a suffix of the listing.
        let first_unknown = classified
            .rows
            .iter()
            .position(|row| row.remaining_days.is_none());
        if let Some(position) = first_unknown {
            prop_assert!(
                classified.rows[position..]
                    .iter()
                    .all(|row| row.remaining_days.is_none())
            );
        }
    }

    #[test]
    fn attention_subset_is_a_bounded_subset(
        offsets in prop::collection::vec(prop::option::of(-40i64..80), 0..40)
    ) {
        let policy = AlertPolicy::default();
        let data = offsets_to_dataset(&offsets);
        let classified = classify(&data, reference(), &policy);
        let subset = classified.attention_subset();

        for row in &subset {
            prop_assert!(row.remaining_days.is_some_and(|days| days <= policy.attention_window));
            prop_assert!(classified.rows.iter().any(|candidate| candidate == *row));
        }
        let expected = classified
            .rows
            .iter()
            .filter(|row| row.remaining_days.is_some_and(|days| days <= policy.attention_window))
            .count();
        prop_assert_eq!(subset.len(), expected);
    }

    #[test]
    fn severity_is_a_pure_function_of_remaining_days(days in -400i64..400) {
        let policy = AlertPolicy::default();
        prop_assert_eq!(policy.classify(days), policy.classify(days));
        let expected = if days < 0 {
            Severity::Expired
        } else if policy.alert_days.contains(&days) {
            Severity::Imminent
        } else if days <= policy.attention_window {
            Severity::Attention
        } else {
            Severity::Safe
        };
        prop_assert_eq!(policy.classify(days), expected);
    }
}
