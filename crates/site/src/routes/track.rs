//! Tracking route handlers.
//!
//! The lookup form is the only user-visible validation in the demo: a
//! malformed tracking number re-renders the form with a message. Well-formed
//! numbers always "exist" - the timeline is simulated.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::Deserialize;
use tracing::instrument;

use swiftparcel_core::TrackingNumber;

use crate::tracking::{self, TrackingReport};

/// Timeline row display data for templates.
pub struct StepView {
    pub label: &'static str,
    pub detail: String,
    pub date: String,
    pub completed: bool,
}

/// Tracking report display data for templates.
pub struct ReportView {
    pub number: String,
    pub origin: String,
    pub destination: String,
    pub progress: u8,
    pub estimated_delivery: String,
    pub delivered: bool,
    pub steps: Vec<StepView>,
}

impl From<&TrackingReport> for ReportView {
    fn from(report: &TrackingReport) -> Self {
        Self {
            number: report.number.to_string(),
            origin: report.origin.to_string(),
            destination: report.destination.to_string(),
            progress: report.progress,
            estimated_delivery: report.estimated_delivery.format("%b %-d, %Y").to_string(),
            delivered: report.delivered,
            steps: report
                .steps
                .iter()
                .map(|step| StepView {
                    label: step.label,
                    detail: step.detail.clone(),
                    date: step.date.format("%b %-d, %Y").to_string(),
                    completed: step.completed,
                })
                .collect(),
        }
    }
}

/// Tracking form data.
#[derive(Debug, Deserialize)]
pub struct TrackForm {
    pub number: Option<String>,
}

/// Tracking form page template.
#[derive(Template, WebTemplate)]
#[template(path = "track.html")]
pub struct TrackTemplate {
    pub error: Option<String>,
    pub number: String,
}

/// Tracking timeline page template.
#[derive(Template, WebTemplate)]
#[template(path = "track_report.html")]
pub struct TrackReportTemplate {
    pub report: ReportView,
}

/// Display the tracking form.
#[instrument]
pub async fn show() -> impl IntoResponse {
    TrackTemplate {
        error: None,
        number: String::new(),
    }
}

/// Look up a tracking number.
#[instrument]
pub async fn lookup(Form(form): Form<TrackForm>) -> Response {
    let raw = form.number.unwrap_or_default();

    match TrackingNumber::parse(&raw) {
        Ok(number) => {
            let report = tracking::report(&number, Utc::now());
            TrackReportTemplate {
                report: ReportView::from(&report),
            }
            .into_response()
        }
        Err(e) => TrackTemplate {
            error: Some(e.to_string()),
            number: raw,
        }
        .into_response(),
    }
}
