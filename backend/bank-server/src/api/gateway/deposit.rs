//! POST /deposit

use super::{MessageResponse, form_body};
use crate::{ApiError, ApiResult, DepositForm, GatewayState, PresentedToken, TransferFailure};

use axum::{Form, Json, extract::State, extract::rejection::FormRejection};

pub async fn deposit(
    State(state): State<GatewayState>,
    token: PresentedToken,
    form: Result<Form<DepositForm>, FormRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let fail = |failure: TransferFailure| ApiError::from_transfer("Deposit", failure);

    let caller = state
        .orchestrator
        .authenticate(token.as_deref())
        .map_err(fail)?;
    let form = form_body(form).map_err(fail)?;

    state
        .orchestrator
        .submit_deposit(&caller, &form)
        .await
        .map_err(fail)?;

    Ok(Json(MessageResponse::new("Deposit successful")))
}
