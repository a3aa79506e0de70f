//! POST /payment

use super::{MessageResponse, form_body};
use crate::{ApiError, ApiResult, GatewayState, PaymentForm, PresentedToken, TransferFailure};

use axum::{Form, Json, extract::State, extract::rejection::FormRejection};

pub async fn payment(
    State(state): State<GatewayState>,
    token: PresentedToken,
    form: Result<Form<PaymentForm>, FormRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let fail = |failure: TransferFailure| ApiError::from_transfer("Payment", failure);

    let caller = state
        .orchestrator
        .authenticate(token.as_deref())
        .map_err(fail)?;
    let form = form_body(form).map_err(fail)?;

    state
        .orchestrator
        .submit_payment(&caller, &form)
        .await
        .map_err(fail)?;

    Ok(Json(MessageResponse::new("Payment successful")))
}
