//! Cost Explorer API client module
//!
//! Encapsulates the `GetCostAndUsage` billing query and the projection of
//! its output into the JSON payload the rest of the pipeline treats as
//! opaque.

use std::collections::HashMap;

use aws_sdk_costexplorer::Client as CostExplorerSdkClient;
use aws_sdk_costexplorer::error::DisplayErrorContext;
use aws_sdk_costexplorer::operation::get_cost_and_usage::GetCostAndUsageOutput;
use aws_sdk_costexplorer::types::{
    DateInterval, Dimension, DimensionValues, Expression, Granularity, Group, MetricValue,
    ResultByTime, TagValues,
};
use chrono::{Duration, NaiveDate, Utc};
use serde_json::{Map, Value, json};
use tracing::info;

use crate::api::parsing::split_tag;
use crate::errors::AdvisorError;

/// Billing metric requested from Cost Explorer.
pub const COST_METRIC: &str = "UnblendedCost";

/// Length of the query window in days, ending today.
pub const LOOKBACK_DAYS: i64 = 7;

/// Cost Explorer API client for fetching recent spend
pub struct CostExplorerClient {
    client: CostExplorerSdkClient,
}

impl CostExplorerClient {
    #[must_use]
    pub fn new(shared_config: &aws_config::SdkConfig) -> Self {
        Self {
            client: CostExplorerSdkClient::new(shared_config),
        }
    }

    /// Fetches daily unblended cost for the trailing week, scoped to one
    /// region and optionally to one `key:value` cost-allocation tag.
    ///
    /// # Errors
    ///
    /// Returns an error if the tag is not a `key:value` pair or the
    /// `GetCostAndUsage` call fails. The call is made exactly once; there
    /// are no retries.
    pub async fn fetch_costs(
        &self,
        region: &str,
        tag: Option<&str>,
    ) -> Result<Value, AdvisorError> {
        let (start, end) = query_window(Utc::now().date_naive());
        let filter = build_filter(region, tag)?;

        let time_period = DateInterval::builder()
            .start(start.as_str())
            .end(end.as_str())
            .build()
            .map_err(|e| AdvisorError::CostExplorerError(format!("Invalid time period: {e}")))?;

        info!(region = %region, start = %start, end = %end, "Querying Cost Explorer");

        let output = self
            .client
            .get_cost_and_usage()
            .time_period(time_period)
            .granularity(Granularity::Daily)
            .metrics(COST_METRIC)
            .filter(filter)
            .send()
            .await
            .map_err(|e| {
                AdvisorError::CostExplorerError(format!("{}", DisplayErrorContext(&e)))
            })?;

        Ok(cost_report_to_json(&output))
    }
}

/// Returns the `[today - 7 days, today]` window as ISO `YYYY-MM-DD` strings.
#[must_use]
pub fn query_window(today: NaiveDate) -> (String, String) {
    let start = today - Duration::days(LOOKBACK_DAYS);
    (
        start.format("%Y-%m-%d").to_string(),
        today.format("%Y-%m-%d").to_string(),
    )
}

/// Builds the query filter: always a region-dimension equality clause, and
/// with a tag an `And` of that clause and a tag-equality clause split on the
/// first `:`.
///
/// # Errors
///
/// Returns an error if the tag contains no `:` separator.
pub fn build_filter(region: &str, tag: Option<&str>) -> Result<Expression, AdvisorError> {
    let region_expr = Expression::builder()
        .dimensions(
            DimensionValues::builder()
                .key(Dimension::Region)
                .values(region)
                .build(),
        )
        .build();

    let Some(tag) = tag else {
        return Ok(region_expr);
    };

    let (key, value) = split_tag(tag)?;
    let tag_expr = Expression::builder()
        .tags(TagValues::builder().key(key).values(value).build())
        .build();

    Ok(Expression::builder().and(region_expr).and(tag_expr).build())
}

/// Projects the SDK output into the Cost Explorer REST response shape.
///
/// Callers treat the result as an opaque payload: it is returned verbatim in
/// the response body and pretty-printed into the analysis prompt. Map keys
/// are emitted in sorted order so the payload is stable across runs.
#[must_use]
pub fn cost_report_to_json(output: &GetCostAndUsageOutput) -> Value {
    let mut report = Map::new();

    report.insert(
        "ResultsByTime".to_string(),
        Value::Array(
            output
                .results_by_time()
                .iter()
                .map(result_by_time_to_json)
                .collect(),
        ),
    );

    report.insert(
        "DimensionValueAttributes".to_string(),
        Value::Array(
            output
                .dimension_value_attributes()
                .iter()
                .map(|attr| {
                    json!({
                        "Value": attr.value().unwrap_or_default(),
                        "Attributes": attr
                            .attributes()
                            .map(sorted_string_map)
                            .unwrap_or_else(|| Value::Object(Map::new())),
                    })
                })
                .collect(),
        ),
    );

    if let Some(token) = output.next_page_token() {
        report.insert("NextPageToken".to_string(), json!(token));
    }

    Value::Object(report)
}

fn result_by_time_to_json(result: &ResultByTime) -> Value {
    let mut obj = Map::new();

    if let Some(period) = result.time_period() {
        obj.insert(
            "TimePeriod".to_string(),
            json!({ "Start": period.start(), "End": period.end() }),
        );
    }

    if let Some(total) = result.total() {
        obj.insert("Total".to_string(), sorted_metrics_map(total));
    }

    obj.insert(
        "Groups".to_string(),
        Value::Array(result.groups().iter().map(group_to_json).collect()),
    );
    obj.insert("Estimated".to_string(), Value::Bool(result.estimated()));

    Value::Object(obj)
}

fn group_to_json(group: &Group) -> Value {
    json!({
        "Keys": group.keys(),
        "Metrics": group
            .metrics()
            .map(sorted_metrics_map)
            .unwrap_or_else(|| Value::Object(Map::new())),
    })
}

fn sorted_metrics_map(metrics: &HashMap<String, MetricValue>) -> Value {
    let mut entries: Vec<(&String, &MetricValue)> = metrics.iter().collect();
    entries.sort_by_key(|(name, _)| name.as_str());

    let mut obj = Map::new();
    for (name, value) in entries {
        obj.insert(
            name.clone(),
            json!({
                "Amount": value.amount().unwrap_or_default(),
                "Unit": value.unit().unwrap_or_default(),
            }),
        );
    }
    Value::Object(obj)
}

fn sorted_string_map(attributes: &HashMap<String, String>) -> Value {
    let mut entries: Vec<(&String, &String)> = attributes.iter().collect();
    entries.sort_by_key(|(name, _)| name.as_str());

    let mut obj = Map::new();
    for (name, value) in entries {
        obj.insert(name.clone(), Value::String(value.clone()));
    }
    Value::Object(obj)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_window_spans_seven_days() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 8).unwrap();
        let (start, end) = query_window(today);
        assert_eq!(start, "2026-08-01");
        assert_eq!(end, "2026-08-08");
    }

    #[test]
    fn test_query_window_crosses_month_boundary() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 3).unwrap();
        let (start, end) = query_window(today);
        assert_eq!(start, "2026-02-24");
        assert_eq!(end, "2026-03-03");
    }

    #[test]
    fn test_build_filter_region_only() {
        let filter = build_filter("us-east-1", None).unwrap();

        let dims = filter.dimensions().expect("dimension clause");
        assert_eq!(dims.key(), Some(&Dimension::Region));
        assert_eq!(dims.values(), ["us-east-1".to_string()]);
        assert!(filter.and().is_empty());
        assert!(filter.tags().is_none());
    }

    #[test]
    fn test_build_filter_with_tag_combines_clauses() {
        let filter = build_filter("eu-west-1", Some("env:prod")).unwrap();

        let clauses = filter.and();
        assert_eq!(clauses.len(), 2);

        let dims = clauses[0].dimensions().expect("region clause first");
        assert_eq!(dims.key(), Some(&Dimension::Region));
        assert_eq!(dims.values(), ["eu-west-1".to_string()]);

        let tags = clauses[1].tags().expect("tag clause second");
        assert_eq!(tags.key(), Some("env"));
        assert_eq!(tags.values(), ["prod".to_string()]);
    }

    #[test]
    fn test_build_filter_rejects_tag_without_colon() {
        let err = build_filter("us-east-1", Some("noColon")).unwrap_err();
        assert!(!err.to_string().is_empty());
        assert!(err.to_string().contains("noColon"));
    }

    #[test]
    fn test_cost_report_serialization() {
        let interval = DateInterval::builder()
            .start("2026-08-01")
            .end("2026-08-02")
            .build()
            .unwrap();
        let result = ResultByTime::builder()
            .time_period(interval)
            .total(
                COST_METRIC,
                MetricValue::builder().amount("12.34").unit("USD").build(),
            )
            .estimated(true)
            .build();
        let output = GetCostAndUsageOutput::builder()
            .results_by_time(result)
            .build();

        let report = cost_report_to_json(&output);

        assert_eq!(
            report["ResultsByTime"][0]["TimePeriod"],
            json!({ "Start": "2026-08-01", "End": "2026-08-02" })
        );
        assert_eq!(
            report["ResultsByTime"][0]["Total"][COST_METRIC],
            json!({ "Amount": "12.34", "Unit": "USD" })
        );
        assert_eq!(report["ResultsByTime"][0]["Estimated"], json!(true));
        assert_eq!(report["ResultsByTime"][0]["Groups"], json!([]));
        assert_eq!(report["DimensionValueAttributes"], json!([]));
        assert!(report.get("NextPageToken").is_none());
    }

    #[test]
    fn test_cost_report_round_trips_unchanged() {
        let output = GetCostAndUsageOutput::builder()
            .results_by_time(
                ResultByTime::builder()
                    .total(
                        COST_METRIC,
                        MetricValue::builder().amount("0.5").unit("USD").build(),
                    )
                    .build(),
            )
            .next_page_token("next")
            .build();

        let report = cost_report_to_json(&output);
        let serialized = serde_json::to_string(&report).unwrap();
        let round_tripped: Value = serde_json::from_str(&serialized).unwrap();

        assert_eq!(report, round_tripped);
        assert_eq!(round_tripped["NextPageToken"], json!("next"));
    }
}
