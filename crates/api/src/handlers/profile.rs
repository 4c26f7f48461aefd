use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::Value;

use yourroute_domain::profile::UserType;
use yourroute_errors::YourRouteError;

use crate::{error::ApiResult, routes::AppState};

#[derive(Debug, Deserialize)]
pub struct ProfileQuery {
    pub user_type: Option<String>,
}

pub async fn get_profile(
    State(state): State<AppState>,
    Query(query): Query<ProfileQuery>,
) -> ApiResult<Json<Value>> {
    let raw = query
        .user_type
        .ok_or_else(|| YourRouteError::malformed("缺少查询参数 user_type"))?;

    let user_type: UserType = raw
        .parse()
        .map_err(|_| YourRouteError::not_found(format!("用户类型 {raw} 不存在")))?;

    let profile = state
        .profiles
        .get_by_user_type(user_type)
        .await?
        .ok_or_else(|| YourRouteError::not_found(format!("用户类型 {user_type} 没有资料")))?;

    Ok(Json(profile.document))
}
