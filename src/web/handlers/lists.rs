//! List collection and list member handlers.

use askama::Template;
use axum::{
    Form,
    extract::{Path, State, rejection::FormRejection},
    response::{Html, Redirect},
};

use crate::domain::entities::List;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::forms::{MethodOverrideForm, TitleForm, parse_id};
use crate::web::render;

/// Template for the list collection page.
///
/// Renders `templates/lists/index.html` with:
/// - Every list, linked to its items page
/// - A delete button per list
/// - A creation form
#[derive(Template)]
#[template(path = "lists/index.html")]
pub struct ListsTemplate {
    pub lists: Vec<List>,
}

/// Renders all lists.
///
/// # Endpoint
///
/// `GET /lists`
pub async fn lists_handler(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let lists = state.list_service.all_lists().await?;
    render::page(&ListsTemplate { lists })
}

/// Creates a list from the submitted `title`.
///
/// # Endpoint
///
/// `POST /lists`
///
/// # Errors
///
/// Returns 400 if the form body cannot be decoded.
pub async fn create_list_handler(
    State(state): State<AppState>,
    form: Result<Form<TitleForm>, FormRejection>,
) -> Result<Redirect, AppError> {
    let Form(form) = form.map_err(|_| AppError::bad_request("Failed to parse form"))?;

    state.list_service.create_list(form.title).await?;

    Ok(render::redirect("/lists"))
}

/// Deletes a list when the form carries `_method=delete`.
///
/// # Endpoint
///
/// `POST /lists/{id}`
///
/// Items of the deleted list are not removed.
///
/// # Errors
///
/// Returns 400 if the id is malformed or the form cannot be decoded.
/// Returns 405 if `_method` is anything other than `delete`.
/// Returns 404 if the list does not exist.
pub async fn list_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    form: Result<Form<MethodOverrideForm>, FormRejection>,
) -> Result<Redirect, AppError> {
    let id = parse_id(&id, "Missing ID")?;
    let Form(form) = form.map_err(|_| AppError::bad_request("Failed to parse form"))?;

    if !form.is_delete() {
        return Err(AppError::method_not_allowed("Invalid request method"));
    }

    let list = state.list_service.find_list(id).await?;
    state.list_service.delete_list(&list).await?;

    Ok(render::redirect("/lists"))
}
