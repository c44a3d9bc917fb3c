use crate::{
    error::AppError,
    forms::{DeleteForm, PageQuery, PotionForm},
    view::Outcome,
    AppState,
};
use axum::{
    extract::{Path, Query, State},
    Form,
};
use std::sync::Arc;

/// # GET /admin/potion
pub async fn potion_index(State(state): State<Arc<AppState>>) -> Result<Outcome, AppError> {
    state.potions.index().await
}

/// # GET /admin/potion/:id
pub async fn potion_show(
    Path(id): Path<i64>,
    State(state): State<Arc<AppState>>,
) -> Result<Outcome, AppError> {
    state.potions.show(id).await
}

/// # GET /admin/potion/create
pub async fn potion_create(State(state): State<Arc<AppState>>) -> Result<Outcome, AppError> {
    state.potions.create()
}

/// # POST /admin/potion
pub async fn potion_store(
    State(state): State<Arc<AppState>>,
    Form(form): Form<PotionForm>,
) -> Result<Outcome, AppError> {
    state.potions.store(form.parse()?).await
}

/// # GET /admin/potion/:id/edit
pub async fn potion_edit(
    Path(id): Path<i64>,
    State(state): State<Arc<AppState>>,
) -> Result<Outcome, AppError> {
    state.potions.edit(id).await
}

/// # POST /admin/potion/update
pub async fn potion_update(
    State(state): State<Arc<AppState>>,
    Form(form): Form<PotionForm>,
) -> Result<Outcome, AppError> {
    state.potions.update(form.parse()?).await
}

/// # POST /admin/potion/delete
/// The `id` may come from the query string or the form body.
pub async fn potion_delete(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DeleteForm>,
    body: Option<Form<DeleteForm>>,
) -> Result<Outcome, AppError> {
    let body = body.map(|Form(form)| form).unwrap_or_default();
    state.potions.delete(query.or(body).parse()?).await
}

/// # GET /admin/qualite
/// Paginated with `?page=&size=&sort=property,direction`.
pub async fn qualite_index(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
) -> Result<Outcome, AppError> {
    state.qualites.index(query).await
}
