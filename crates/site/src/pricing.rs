//! Quote pricing estimator.
//!
//! A total function from shipment details to a price: malformed input never
//! errors, it takes a fallback branch instead. Absent form fields default at
//! the parsing edge (weight 1kg, local zone, standard tier); values that are
//! present but unrecognized arrive here as `None` and use the fallback
//! rates.
//!
//! Note that the base-fee and per-kg tables carry *independent* fallback
//! constants. They currently agree with the regional pairing, but neither is
//! derived from the other.

use rust_decimal::{Decimal, RoundingStrategy};
use swiftparcel_core::{CurrencyCode, Money, ServiceTier, Zone};

/// Minimum chargeable weight in kilograms.
fn min_billable_kg() -> Decimal {
    Decimal::new(5, 1) // 0.5
}

/// No quote goes below this, regardless of inputs.
fn price_floor() -> Decimal {
    Decimal::from(5)
}

/// Default weight when the form omits or mangles it.
pub fn default_weight_kg() -> Decimal {
    Decimal::ONE
}

/// Flat fee by delivery zone.
fn base_fee(zone: Option<Zone>) -> Decimal {
    match zone {
        Some(Zone::Local) => Decimal::from(6),
        Some(Zone::Regional) => Decimal::from(9),
        Some(Zone::National) => Decimal::from(14),
        Some(Zone::International) => Decimal::from(25),
        // Unrecognized zone: fall back to the regional fee.
        None => Decimal::from(9),
    }
}

/// Per-kilogram rate by delivery zone.
fn per_kg_rate(zone: Option<Zone>) -> Decimal {
    match zone {
        Some(Zone::Local) => Decimal::new(12, 1),         // 1.2
        Some(Zone::Regional) => Decimal::new(18, 1),      // 1.8
        Some(Zone::National) => Decimal::new(26, 1),      // 2.6
        Some(Zone::International) => Decimal::new(45, 1), // 4.5
        // Unrecognized zone: fall back to the regional rate.
        None => Decimal::new(18, 1),
    }
}

/// Price multiplier by service tier.
fn service_multiplier(service: Option<ServiceTier>) -> Decimal {
    match service {
        Some(ServiceTier::Express) => Decimal::new(175, 2), // 1.75
        Some(ServiceTier::Standard) => Decimal::ONE,
        Some(ServiceTier::Economy) => Decimal::new(7, 1), // 0.7
        // Unrecognized tier: no adjustment.
        None => Decimal::ONE,
    }
}

/// Estimate the price of a shipment.
///
/// `None` for zone or tier means the input was present but unrecognized;
/// both cases degrade to fallback rates. Weights below the minimum billable
/// weight (including negative ones) are charged at the minimum.
#[must_use]
pub fn estimate(weight_kg: Decimal, zone: Option<Zone>, service: Option<ServiceTier>) -> Money {
    let billable = weight_kg.max(min_billable_kg());
    let raw = (base_fee(zone) + per_kg_rate(zone) * billable) * service_multiplier(service);
    let rounded = raw.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    Money::new(rounded.max(price_floor()), CurrencyCode::USD)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_reference_quote() {
        // (6 + 1.2 * 1) * 1.0 = 7.2
        let price = estimate(Decimal::ONE, Some(Zone::Local), Some(ServiceTier::Standard));
        assert_eq!(price.amount, dec("7.2"));
        assert_eq!(price.display(), "$7.20");
    }

    #[test]
    fn test_floor_applies_to_cheap_quotes() {
        // (6 + 1.2 * 0.5) * 0.7 = 4.62, floored to 5
        let price = estimate(dec("0.3"), Some(Zone::Local), Some(ServiceTier::Economy));
        assert_eq!(price.amount, Decimal::from(5));
    }

    #[test]
    fn test_no_quote_below_floor() {
        for zone in Zone::ALL.into_iter().map(Some).chain([None]) {
            for tier in ServiceTier::ALL.into_iter().map(Some).chain([None]) {
                for weight in ["0", "0.1", "1", "12.5"] {
                    let price = estimate(dec(weight), zone, tier);
                    assert!(
                        price.amount >= Decimal::from(5),
                        "quote below floor for {zone:?}/{tier:?}/{weight}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_minimum_billable_weight() {
        let at_floor = estimate(dec("0.5"), Some(Zone::Local), Some(ServiceTier::Standard));
        let below_floor = estimate(dec("0.2"), Some(Zone::Local), Some(ServiceTier::Standard));
        let zero = estimate(Decimal::ZERO, Some(Zone::Local), Some(ServiceTier::Standard));

        assert_eq!(below_floor, at_floor);
        assert_eq!(zero, at_floor);
        assert_eq!(at_floor.amount, dec("6.6"));
    }

    #[test]
    fn test_negative_weight_charged_at_minimum() {
        let negative = estimate(dec("-3"), Some(Zone::Local), Some(ServiceTier::Standard));
        let minimum = estimate(dec("0.5"), Some(Zone::Local), Some(ServiceTier::Standard));
        assert_eq!(negative, minimum);
    }

    #[test]
    fn test_unknown_zone_uses_regional_pairing() {
        let fallback = estimate(Decimal::ONE, None, Some(ServiceTier::Standard));
        let regional = estimate(
            Decimal::ONE,
            Some(Zone::Regional),
            Some(ServiceTier::Standard),
        );

        // Both lookup tables fall back independently; the values happen to
        // agree with the regional pairing.
        assert_eq!(fallback, regional);
        assert_eq!(fallback.amount, dec("10.8"));
    }

    #[test]
    fn test_unknown_tier_uses_unit_multiplier() {
        let fallback = estimate(Decimal::ONE, Some(Zone::Local), None);
        let standard = estimate(Decimal::ONE, Some(Zone::Local), Some(ServiceTier::Standard));
        assert_eq!(fallback, standard);
    }

    #[test]
    fn test_rounds_to_two_places() {
        // 6 + 1.2 * 0.77 = 6.924, rounds to 6.92
        let price = estimate(dec("0.77"), Some(Zone::Local), Some(ServiceTier::Standard));
        assert_eq!(price.amount, dec("6.92"));
    }

    #[test]
    fn test_express_costs_more_than_economy() {
        let express = estimate(dec("2"), Some(Zone::National), Some(ServiceTier::Express));
        let standard = estimate(dec("2"), Some(Zone::National), Some(ServiceTier::Standard));
        let economy = estimate(dec("2"), Some(Zone::National), Some(ServiceTier::Economy));

        assert!(express.amount > standard.amount);
        assert!(standard.amount > economy.amount);
    }

    #[test]
    fn test_farther_zones_cost_more() {
        let mut last = Decimal::ZERO;
        for zone in Zone::ALL {
            let price = estimate(dec("3"), Some(zone), Some(ServiceTier::Standard));
            assert!(price.amount > last, "{zone} not more expensive");
            last = price.amount;
        }
    }
}
