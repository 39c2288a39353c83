//! Home page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;
use tower_sessions::Session;
use tracing::instrument;

use crate::models::CurrentAccount;
use crate::models::session::keys;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    /// Email of the signed-in visitor, if any.
    pub account_email: Option<String>,
}

/// Display the landing page.
#[instrument(skip(session))]
pub async fn home(session: Session) -> impl IntoResponse {
    let account_email = session
        .get::<CurrentAccount>(keys::CURRENT_ACCOUNT)
        .await
        .ok()
        .flatten()
        .map(|account| account.email.to_string());

    HomeTemplate { account_email }
}
