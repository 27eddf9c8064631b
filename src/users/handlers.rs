use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::{error::AppError, state::AppState};

use super::dto::{PageMeta, Pagination, UpsertForm, PER_PAGE};
use super::password::hash_password;
use super::repo::User;
use super::validation::{validate_email, validate_name};
use super::views::{render_template, FormPrefill, UsersTemplate};

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/:id", get(index_edit))
        .route("/users", post(upsert))
        .route("/users/:id", post(upsert_with_id))
        .route("/user/delete/:id", get(delete))
}

// One-time status message carried across the redirect after a mutation.
const FLASH_COOKIE: &str = "roster_flash";

fn set_flash(jar: CookieJar, message: &str) -> CookieJar {
    jar.add(
        Cookie::build((FLASH_COOKIE, message.to_string()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .build(),
    )
}

fn take_flash(jar: CookieJar) -> (CookieJar, Option<String>) {
    match jar.get(FLASH_COOKIE).map(|c| c.value().to_string()) {
        Some(msg) => (jar.remove(Cookie::from(FLASH_COOKIE)), Some(msg)),
        None => (jar, None),
    }
}

#[instrument(skip(state, jar))]
pub async fn index(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(p): Query<Pagination>,
) -> Result<Response, AppError> {
    render_index(&state, jar, p.page, None).await
}

#[instrument(skip(state, jar))]
pub async fn index_edit(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<Uuid>,
    Query(p): Query<Pagination>,
) -> Result<Response, AppError> {
    let edit_user = User::find_by_id(&state.db, id)
        .await?
        .ok_or(AppError::NotFound("user"))?;
    render_index(&state, jar, p.page, Some(edit_user)).await
}

async fn render_index(
    state: &AppState,
    jar: CookieJar,
    page: i64,
    edit_user: Option<User>,
) -> Result<Response, AppError> {
    let (users, total) = User::list_page(&state.db, page, PER_PAGE).await?;
    let (jar, flash) = take_flash(jar);
    let form = match &edit_user {
        Some(user) => FormPrefill::for_user(user),
        None => FormPrefill::blank(),
    };
    let template = UsersTemplate {
        rows: users.iter().map(Into::into).collect(),
        meta: PageMeta::new(total, page, PER_PAGE),
        form,
        flash,
        error: None,
    };
    Ok((jar, render_template(template)).into_response())
}

#[instrument(skip(state, jar, form))]
pub async fn upsert(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<UpsertForm>,
) -> Result<Response, AppError> {
    do_upsert(&state, jar, form).await
}

// The id segment is informational only; the upsert is keyed by email.
#[instrument(skip(state, jar, form))]
pub async fn upsert_with_id(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(_id): Path<Uuid>,
    Form(form): Form<UpsertForm>,
) -> Result<Response, AppError> {
    do_upsert(&state, jar, form).await
}

async fn do_upsert(
    state: &AppState,
    jar: CookieJar,
    mut form: UpsertForm,
) -> Result<Response, AppError> {
    form.name = form.name.trim().to_string();
    form.email = form.email.trim().to_lowercase();

    let mut errors = Vec::new();
    if let Err(e) = validate_name(&form.name) {
        errors.push(e);
    }
    if let Err(e) = validate_email(&form.email) {
        errors.push(e);
    }
    if !errors.is_empty() {
        let message = errors.join("; ");
        warn!(email = %form.email, %message, "upsert rejected");
        return invalid_form(state, form, message).await;
    }

    let hash = hash_password(&state.config.default_password)?;
    let user = User::upsert_by_email(&state.db, &form.name, &form.email, &hash).await?;

    info!(user_id = %user.id, email = %user.email, "user upserted");
    let jar = set_flash(jar, "User inserted or updated successfully!");
    Ok((jar, Redirect::to("/")).into_response())
}

// Re-render the first page with the rejected submission still in the form.
// No mutation has happened at this point.
async fn invalid_form(
    state: &AppState,
    form: UpsertForm,
    error: String,
) -> Result<Response, AppError> {
    let (users, total) = User::list_page(&state.db, 1, PER_PAGE).await?;
    let template = UsersTemplate {
        rows: users.iter().map(Into::into).collect(),
        meta: PageMeta::new(total, 1, PER_PAGE),
        form: FormPrefill::from_submission(&form),
        flash: None,
        error: Some(error),
    };
    Ok((StatusCode::UNPROCESSABLE_ENTITY, render_template(template)).into_response())
}

#[instrument(skip(state, jar))]
pub async fn delete(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    let deleted = User::delete_by_id(&state.db, id).await?;
    if !deleted {
        warn!(user_id = %id, "delete missed");
        return Err(AppError::NotFound("user"));
    }

    info!(user_id = %id, "user deleted");
    let jar = set_flash(jar, "User deleted successfully!");
    Ok((jar, Redirect::to("/")).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flash_is_read_once() {
        let jar = set_flash(CookieJar::new(), "User deleted successfully!");
        let (jar, msg) = take_flash(jar);
        assert_eq!(msg.as_deref(), Some("User deleted successfully!"));

        let (_, again) = take_flash(jar);
        assert!(again.is_none());
    }

    #[test]
    fn flash_cookie_is_scoped_to_the_site() {
        let jar = set_flash(CookieJar::new(), "ok");
        let cookie = jar.get(FLASH_COOKIE).expect("flash cookie should be set");
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    }

    #[test]
    fn take_flash_leaves_an_empty_jar_alone() {
        let (_, msg) = take_flash(CookieJar::new());
        assert!(msg.is_none());
    }
}
