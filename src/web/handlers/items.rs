//! Item collection and item member handlers, nested under a list.
//!
//! Every handler resolves the parent list before touching items, so a
//! missing list is reported as 404 before any item query runs.

use askama::Template;
use axum::{
    Form,
    extract::{Path, State, rejection::FormRejection},
    response::{Html, Redirect},
};

use crate::domain::entities::{Item, List};
use crate::error::AppError;
use crate::state::AppState;
use crate::web::forms::{MethodOverrideForm, TitleForm, parse_id};
use crate::web::render;

/// Template for a list's item page.
#[derive(Template)]
#[template(path = "lists/items/index.html")]
pub struct ItemsTemplate {
    pub list: List,
    pub items: Vec<Item>,
}

async fn resolve_list(state: &AppState, raw_list_id: &str) -> Result<List, AppError> {
    let list_id = parse_id(raw_list_id, "Missing list ID")?;
    state.list_service.find_list(list_id).await
}

/// Renders the items of a list.
///
/// # Endpoint
///
/// `GET /lists/{list_id}/items`
///
/// # Errors
///
/// Returns 400 if the list id is malformed.
/// Returns 404 if the list does not exist.
pub async fn items_handler(
    State(state): State<AppState>,
    Path(list_id): Path<String>,
) -> Result<Html<String>, AppError> {
    let list = resolve_list(&state, &list_id).await?;
    let items = state.list_service.items(&list).await?;

    render::page(&ItemsTemplate { list, items })
}

/// Creates an item in the list with the default rating.
///
/// # Endpoint
///
/// `POST /lists/{list_id}/items`
///
/// # Errors
///
/// Returns 400 if the list id is malformed or the form cannot be decoded.
/// Returns 404 if the list does not exist.
pub async fn create_item_handler(
    State(state): State<AppState>,
    Path(list_id): Path<String>,
    form: Result<Form<TitleForm>, FormRejection>,
) -> Result<Redirect, AppError> {
    let list = resolve_list(&state, &list_id).await?;
    let Form(form) = form.map_err(|_| AppError::bad_request("Failed to parse form"))?;

    state.item_service.create_item(form.title, list.id).await?;

    Ok(render::redirect(&list.items_url()))
}

/// Deletes an item of the list when the form carries `_method=delete`.
///
/// # Endpoint
///
/// `POST /lists/{list_id}/items/{id}`
///
/// # Errors
///
/// Returns 400 if an id is malformed or the form cannot be decoded.
/// Returns 404 if the list does not exist, or the item does not belong to it.
/// Returns 405 if `_method` is anything other than `delete`.
pub async fn item_handler(
    State(state): State<AppState>,
    Path((list_id, id)): Path<(String, String)>,
    form: Result<Form<MethodOverrideForm>, FormRejection>,
) -> Result<Redirect, AppError> {
    let list = resolve_list(&state, &list_id).await?;
    let id = parse_id(&id, "Missing ID")?;
    let item = state.item_service.find_item_for_list(id, list.id).await?;

    let Form(form) = form.map_err(|_| AppError::bad_request("Failed to parse form"))?;
    if !form.is_delete() {
        return Err(AppError::method_not_allowed("Invalid request method"));
    }

    state.item_service.delete_item(&item).await?;

    Ok(render::redirect(&list.items_url()))
}
