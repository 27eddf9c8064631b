use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use time::macros::format_description;

use super::dto::{PageMeta, UpsertForm};
use super::repo::User;

/// Render a template, folding template failures into a 500.
pub fn render_template<T: Template>(template: T) -> Response {
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Template error: {}", e),
        )
            .into_response(),
    }
}

/// Table row with display-ready fields (templates get Strings, not
/// timestamps).
pub struct UserRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: String,
}

impl From<&User> for UserRow {
    fn from(user: &User) -> Self {
        let fmt = format_description!("[year]-[month]-[day] [hour]:[minute]");
        Self {
            id: user.id.to_string(),
            name: user.name.clone(),
            email: user.email.clone(),
            created_at: user
                .created_at
                .format(&fmt)
                .unwrap_or_else(|_| "-".to_string()),
        }
    }
}

/// Current state of the upsert form: blank, prefilled from an edit target,
/// or echoing a rejected submission.
pub struct FormPrefill {
    pub id: Option<String>,
    pub name: String,
    pub email: String,
}

impl FormPrefill {
    pub fn blank() -> Self {
        Self {
            id: None,
            name: String::new(),
            email: String::new(),
        }
    }

    pub fn for_user(user: &User) -> Self {
        Self {
            id: Some(user.id.to_string()),
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }

    pub fn from_submission(form: &UpsertForm) -> Self {
        Self {
            id: None,
            name: form.name.clone(),
            email: form.email.clone(),
        }
    }

    /// Where the form posts. The id segment is informational only; the
    /// upsert is keyed by email either way.
    pub fn action(&self) -> String {
        match &self.id {
            Some(id) => format!("/users/{}", id),
            None => "/users".to_string(),
        }
    }

    pub fn editing(&self) -> bool {
        self.id.is_some()
    }
}

#[derive(Template)]
#[template(path = "users.html")]
pub struct UsersTemplate {
    pub rows: Vec<UserRow>,
    pub meta: PageMeta,
    pub form: FormPrefill,
    pub flash: Option<String>,
    pub error: Option<String>,
}
