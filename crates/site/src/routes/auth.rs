//! Authentication route handlers (placeholder).
//!
//! The forms validate input shape - a structurally valid email, a password
//! of reasonable length - and then simply record the email in the session.
//! No accounts exist, no credentials are stored, nothing is verified.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use swiftparcel_core::Email;

use crate::error::Result;
use crate::models::CurrentAccount;
use crate::models::session::keys;
use crate::state::AppState;

/// Minimum accepted password length.
const MIN_PASSWORD_LENGTH: usize = 8;

// =============================================================================
// Form Types
// =============================================================================

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Registration form data.
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub email: String,
    pub password: String,
    pub password_confirm: String,
}

// =============================================================================
// Templates
// =============================================================================

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
    pub success: Option<String>,
    pub status_secs: u32,
}

/// Register page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/register.html")]
pub struct RegisterTemplate {
    pub error: Option<String>,
    pub success: Option<String>,
    pub status_secs: u32,
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the login page.
#[instrument(skip(state))]
pub async fn login_page(State(state): State<AppState>) -> impl IntoResponse {
    LoginTemplate {
        error: None,
        success: None,
        status_secs: state.config().status_message_secs,
    }
}

/// Handle login form submission.
#[instrument(skip(state, session, form))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response> {
    let status_secs = state.config().status_message_secs;

    match validate_login(&form.email, &form.password) {
        Ok(email) => {
            let message = format!("Signed in as {email}. (Demo only - no account exists.)");
            session
                .insert(keys::CURRENT_ACCOUNT, CurrentAccount { email })
                .await?;

            Ok(LoginTemplate {
                error: None,
                success: Some(message),
                status_secs,
            }
            .into_response())
        }
        Err(message) => Ok(LoginTemplate {
            error: Some(message),
            success: None,
            status_secs,
        }
        .into_response()),
    }
}

/// Display the registration page.
#[instrument(skip(state))]
pub async fn register_page(State(state): State<AppState>) -> impl IntoResponse {
    RegisterTemplate {
        error: None,
        success: None,
        status_secs: state.config().status_message_secs,
    }
}

/// Handle registration form submission.
#[instrument(skip(state, session, form))]
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<RegisterForm>,
) -> Result<Response> {
    let status_secs = state.config().status_message_secs;

    match validate_registration(&form.email, &form.password, &form.password_confirm) {
        Ok(email) => {
            let message = format!("Account created for {email}. (Demo only - nothing is stored.)");
            session
                .insert(keys::CURRENT_ACCOUNT, CurrentAccount { email })
                .await?;

            Ok(RegisterTemplate {
                error: None,
                success: Some(message),
                status_secs,
            }
            .into_response())
        }
        Err(message) => Ok(RegisterTemplate {
            error: Some(message),
            success: None,
            status_secs,
        }
        .into_response()),
    }
}

/// Handle logout.
#[instrument(skip(session))]
pub async fn logout(session: Session) -> Result<Response> {
    session
        .remove::<CurrentAccount>(keys::CURRENT_ACCOUNT)
        .await?;

    Ok(Redirect::to("/").into_response())
}

// =============================================================================
// Validation
// =============================================================================

/// Validate login input shape.
fn validate_login(email: &str, password: &str) -> std::result::Result<Email, String> {
    let email = Email::parse(email.trim()).map_err(|e| e.to_string())?;

    if password.is_empty() {
        return Err("Password cannot be empty".to_string());
    }

    Ok(email)
}

/// Validate registration input shape.
fn validate_registration(
    email: &str,
    password: &str,
    confirm: &str,
) -> std::result::Result<Email, String> {
    let email = Email::parse(email.trim()).map_err(|e| e.to_string())?;

    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters"
        ));
    }

    if password != confirm {
        return Err("Passwords do not match".to_string());
    }

    Ok(email)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_login_accepts_wellformed_input() {
        let email = validate_login("visitor@example.com", "hunter2!").unwrap();
        assert_eq!(email.as_str(), "visitor@example.com");
    }

    #[test]
    fn test_validate_login_rejects_bad_email() {
        assert!(validate_login("not-an-email", "hunter2!").is_err());
    }

    #[test]
    fn test_validate_login_rejects_empty_password() {
        assert!(validate_login("visitor@example.com", "").is_err());
    }

    #[test]
    fn test_validate_registration_accepts_wellformed_input() {
        let email =
            validate_registration("visitor@example.com", "longenough", "longenough").unwrap();
        assert_eq!(email.as_str(), "visitor@example.com");
    }

    #[test]
    fn test_validate_registration_rejects_short_password() {
        let result = validate_registration("visitor@example.com", "short", "short");
        assert!(result.unwrap_err().contains("at least 8"));
    }

    #[test]
    fn test_validate_registration_rejects_mismatched_passwords() {
        let result = validate_registration("visitor@example.com", "longenough", "different");
        assert_eq!(result.unwrap_err(), "Passwords do not match");
    }
}
