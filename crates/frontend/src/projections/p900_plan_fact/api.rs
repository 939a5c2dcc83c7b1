use contracts::projections::p900_plan_fact::dto::PlanFactReport;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Fetch the plan/fact report for one month
pub async fn fetch_plan_fact(
    year: i32,
    month: u32,
    property_type: &str,
) -> Result<PlanFactReport, String> {
    let url = api_url(&format!(
        "/api/reports/plan-fact?year={}&month={}&property_type={}",
        year, month, property_type
    ));

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch report: {}", response.status()));
    }

    response
        .json::<PlanFactReport>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
