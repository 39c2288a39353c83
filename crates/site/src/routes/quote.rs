//! Quote route handlers.
//!
//! The estimate and booking endpoints are total: absent fields take the
//! documented defaults, unrecognized values take the pricing fallbacks, and
//! neither endpoint can fail on user input.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, response::IntoResponse};
use rand::Rng;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::instrument;

use swiftparcel_core::{ServiceTier, Zone};

use crate::pricing;

/// A `<select>` option for the quote form.
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Quote form data.
///
/// Every field is optional so a partially filled form still quotes.
#[derive(Debug, Deserialize)]
pub struct QuoteForm {
    pub weight: Option<String>,
    pub zone: Option<String>,
    pub service: Option<String>,
}

/// Quote page template.
#[derive(Template, WebTemplate)]
#[template(path = "quote.html")]
pub struct QuoteTemplate {
    pub zones: Vec<SelectOption>,
    pub services: Vec<SelectOption>,
}

/// Priced quote fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/quote_result.html")]
pub struct QuoteResultTemplate {
    pub price: String,
    pub weight: String,
    pub zone_label: String,
    pub service_label: String,
}

/// Booking confirmation fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/quote_booked.html")]
pub struct QuoteBookedTemplate {
    pub price: String,
    pub reference: String,
    pub tracking_number: String,
}

/// Display the quote form.
#[instrument]
pub async fn show() -> impl IntoResponse {
    QuoteTemplate {
        zones: zone_options(),
        services: service_options(),
    }
}

/// Price a shipment (HTMX).
#[instrument]
pub async fn estimate(Form(form): Form<QuoteForm>) -> impl IntoResponse {
    let weight = parse_weight(form.weight.as_deref());
    let zone = parse_zone(form.zone.as_deref());
    let service = parse_service(form.service.as_deref());

    let price = pricing::estimate(weight, zone, service);

    QuoteResultTemplate {
        price: price.display(),
        weight: format!("{weight} kg"),
        zone_label: zone.map_or("Regional", |z| z.label()).to_string(),
        service_label: service.map_or("Standard", |s| s.label()).to_string(),
    }
}

/// Fake-book a shipment (HTMX).
///
/// Prices the shipment the same way as [`estimate`] and attaches a generated
/// booking reference and tracking number. Nothing is stored; the tracking
/// number simply works with the simulated tracking page.
#[instrument]
pub async fn book(Form(form): Form<QuoteForm>) -> impl IntoResponse {
    let weight = parse_weight(form.weight.as_deref());
    let zone = parse_zone(form.zone.as_deref());
    let service = parse_service(form.service.as_deref());

    let price = pricing::estimate(weight, zone, service);

    QuoteBookedTemplate {
        price: price.display(),
        reference: format!("BK-{}", random_code(8)),
        tracking_number: format!("SP-{}", random_code(10)),
    }
}

// =============================================================================
// Form Parsing
// =============================================================================

/// Parse the weight field; absent or malformed input defaults to 1 kg.
fn parse_weight(raw: Option<&str>) -> Decimal {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse::<Decimal>().ok())
        .unwrap_or_else(pricing::default_weight_kg)
}

/// Parse the zone field.
///
/// An absent field means "use the default zone"; a present but unrecognized
/// value returns `None` so pricing takes its fallback rates.
fn parse_zone(raw: Option<&str>) -> Option<Zone> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Some(Zone::default()),
        Some(s) => Zone::parse(s),
    }
}

/// Parse the service field; same absent/unrecognized split as [`parse_zone`].
fn parse_service(raw: Option<&str>) -> Option<ServiceTier> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Some(ServiceTier::default()),
        Some(s) => ServiceTier::parse(s),
    }
}

fn zone_options() -> Vec<SelectOption> {
    Zone::ALL
        .into_iter()
        .map(|z| SelectOption {
            value: z.as_str(),
            label: z.label(),
        })
        .collect()
}

fn service_options() -> Vec<SelectOption> {
    ServiceTier::ALL
        .into_iter()
        .map(|s| SelectOption {
            value: s.as_str(),
            label: s.label(),
        })
        .collect()
}

/// Uppercase alphanumeric code for demo references.
fn random_code(len: usize) -> String {
    let mut rng = rand::rng();
    (0..len)
        .map(|_| char::from(rng.sample(rand::distr::Alphanumeric)).to_ascii_uppercase())
        .collect()
}
