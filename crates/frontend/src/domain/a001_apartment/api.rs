use contracts::domain::a001_apartment::dto::{
    ApartmentCard, CalcResponse, DpInstallmentData, InstallmentQuoteRequest,
    StandardInstallmentData,
};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Fetch the apartment card that drives both calculators
pub async fn fetch_apartment_card(sell_id: i64) -> Result<ApartmentCard, String> {
    let response = Request::get(&api_url(&format!("/api/apartments/{}/card", sell_id)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch apartment card: {}", response.status()));
    }

    response
        .json::<ApartmentCard>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Request a standard installment quote
pub async fn calculate_installment(
    request: &InstallmentQuoteRequest,
) -> Result<CalcResponse<StandardInstallmentData>, String> {
    post_calc("/api/calculator/installment", request).await
}

/// Request a down-payment installment quote
pub async fn calculate_dp_installment(
    request: &InstallmentQuoteRequest,
) -> Result<CalcResponse<DpInstallmentData>, String> {
    post_calc("/api/calculator/dp-installment", request).await
}

// Конверт разбирается из тела при любом HTTP-статусе: бизнес-ошибки
// приходят как success=false, а не как статус-код.
async fn post_calc<T: serde::de::DeserializeOwned>(
    path: &str,
    request: &InstallmentQuoteRequest,
) -> Result<CalcResponse<T>, String> {
    let response = Request::post(&api_url(path))
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    response
        .json::<CalcResponse<T>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
