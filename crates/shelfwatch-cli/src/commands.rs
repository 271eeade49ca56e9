use std::collections::BTreeSet;

use anyhow::Result;
use chrono::{Local, NaiveDate};

use shelfwatch_cli::pipeline::{
    CheckOptions, CheckReport, ExportReport, ExportRequest, run_check as pipeline_check,
    run_export as pipeline_export,
};
use shelfwatch_model::AlertPolicy;
use shelfwatch_report::ExportSchema;

use crate::cli::{CheckArgs, ExportArgs, FieldsArgs, PolicyArgs};
use crate::summary::print_field_map;

/// Reference date for a run, normalized to a pure calendar date so two
/// invocations within the same day always agree.
fn reference_date(today: Option<NaiveDate>) -> NaiveDate {
    today.unwrap_or_else(|| Local::now().date_naive())
}

fn policy_from_args(args: &PolicyArgs) -> AlertPolicy {
    let mut policy = AlertPolicy::default();
    if let Some(days) = &args.alert_days {
        policy.alert_days = days.iter().copied().collect::<BTreeSet<_>>();
    }
    if let Some(window) = args.window {
        policy.attention_window = window;
    }
    policy
}

pub fn run_check(args: &CheckArgs) -> CheckReport {
    let map = args.columns.field_map();
    let options = CheckOptions {
        reference: reference_date(args.today),
        policy: policy_from_args(&args.policy),
        search: args.search.clone(),
    };
    pipeline_check(&args.source, &map, &options)
}

pub fn run_export(args: &ExportArgs) -> Result<ExportReport> {
    let map = args.columns.field_map();
    let mut schema = ExportSchema::default();
    if let Some(header) = &args.days_column {
        schema.remaining_days_header = header.clone();
    }
    let request = ExportRequest {
        source: &args.source,
        destination: &args.output,
        map: &map,
        reference: reference_date(args.today),
        policy: policy_from_args(&args.policy),
        schema,
    };
    pipeline_export(&request)
}

pub fn run_fields(args: &FieldsArgs) -> Result<()> {
    print_field_map(&args.columns.field_map());
    Ok(())
}
