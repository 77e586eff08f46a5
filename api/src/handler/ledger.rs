use crate::{
    extractor::AuthorizedUser,
    model::ledger::{DepositRequest, LedgerEntryResponse, LedgerResponse},
};
use axum::{extract::State, http::StatusCode, Json};
use garde::Validate;
use kernel::model::ledger::event::Deposit;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn show_my_ledger(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<LedgerResponse>> {
    let ledger_repository = registry.ledger_repository();
    let balance = ledger_repository.balance(user.id()).await?;
    let entries = ledger_repository.entries_for_user(user.id()).await?;

    Ok(Json(LedgerResponse {
        balance,
        entries: entries.into_iter().map(LedgerEntryResponse::from).collect(),
    }))
}

pub async fn deposit(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<DepositRequest>,
) -> AppResult<StatusCode> {
    if !user.is_admin() {
        return Err(AppError::Forbidden(
            "crediting accounts requires the administrator capability".into(),
        ));
    }
    req.validate(&())?;

    registry
        .ledger_repository()
        .deposit(
            Deposit::new(req.user_id, req.amount, req.reason),
            user.id(),
        )
        .await
        .map(|_| StatusCode::CREATED)
}
