use axum::{extract::State, Json};
use tracing::info;

use yourroute_domain::entities::IncidentBatch;

use crate::{error::ApiResult, extract::AppJson, response::MessageResponse, routes::AppState};

pub const INTAKE_MESSAGE: &str = "Emergency data processed and forwarded internally.";
pub const RELAY_MESSAGE: &str = "Data received and processed successfully.";

/// 对外告警接收接口，在进程内转交给与 `/internal_data_receiver` 相同的处理逻辑
pub async fn emergency_alert(
    State(state): State<AppState>,
    AppJson(batch): AppJson<IncidentBatch>,
) -> ApiResult<Json<MessageResponse>> {
    let outcome = state.relay.forward(&batch).await?;
    info!(incidents = batch.len(), outcome = outcome.label(), "紧急告警处理完成");

    Ok(Json(MessageResponse::new(INTAKE_MESSAGE)))
}

pub async fn internal_data_receiver(
    State(state): State<AppState>,
    AppJson(batch): AppJson<IncidentBatch>,
) -> ApiResult<Json<MessageResponse>> {
    let outcome = state.relay.forward(&batch).await?;
    info!(incidents = batch.len(), outcome = outcome.label(), "内部转交数据处理完成");

    Ok(Json(MessageResponse::new(RELAY_MESSAGE)))
}
