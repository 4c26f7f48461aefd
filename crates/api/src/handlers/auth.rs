use axum::{extract::State, Json};

use yourroute_domain::account::{LoginCredentials, NewAccount};

use crate::{
    error::ApiResult,
    extract::AppJson,
    response::{LoginResponse, SignupResponse},
    routes::AppState,
};

pub async fn signup(
    State(state): State<AppState>,
    AppJson(request): AppJson<NewAccount>,
) -> ApiResult<Json<SignupResponse>> {
    state.auth.register(&request).await?;

    Ok(Json(SignupResponse {
        success: true,
        message: "User registered successfully".to_string(),
    }))
}

pub async fn login(
    State(state): State<AppState>,
    AppJson(request): AppJson<LoginCredentials>,
) -> ApiResult<Json<LoginResponse>> {
    let token = state.auth.login(&request).await?;

    Ok(Json(LoginResponse {
        success: true,
        token,
    }))
}
