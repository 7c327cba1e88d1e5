//! Charts from synthetic placements.

use rave_bodygraph::{Body, Polarity, activate, gate_longitude_span};
use rave_chart::{chart_from_activations, chart_from_longitudes};

fn mid(gate: u8) -> f64 {
    let (start, end) = gate_longitude_span(gate).unwrap();
    let span = if end > start { end - start } else { end + 360.0 - start };
    (start + span / 2.0) % 360.0
}

/// Personality Sun/Earth and design Sun/Earth placed as given, the rest
/// parked on `filler`.
fn lons(gates: &[(Body, u8)], filler: u8) -> [f64; 13] {
    let mut out = [mid(filler); 13];
    for &(body, gate) in gates {
        out[body.index()] = mid(gate);
    }
    out
}

#[test]
fn reflector_chart() {
    let p = lons(&[], 41);
    let r = chart_from_longitudes(&p, &p);
    assert_eq!(r.energy_type, "REFLECTOR");
    assert_eq!(r.authority, "lunar");
    assert_eq!(r.split, 0);
    assert!(r.active_channels.is_empty());
    assert!(r.defined_centers.is_empty());
    assert_eq!(r.undefined_centers.len(), 9);
    assert_eq!(r.active_gates, [41]);
    assert!(r.birth_date.is_empty());
}

#[test]
fn sacral_throat_motor_is_manifesting_generator() {
    let p = lons(&[(Body::Sun, 34)], 41);
    let d = lons(&[(Body::Moon, 20)], 41);
    let r = chart_from_longitudes(&p, &d);
    assert_eq!(r.energy_type, "MANIFESTING GENERATOR");
    assert_eq!(r.authority, "SL");
    assert_eq!(r.channel_labels(), ["20/34"]);
    let entry = &r.active_channels[0];
    assert_eq!(entry.name, "Charisma");
    assert_eq!(entry.circuit, Some("Integration"));
}

#[test]
fn heart_to_throat_is_manifestor() {
    let p = lons(&[(Body::Mars, 21), (Body::Venus, 45)], 41);
    let r = chart_from_longitudes(&p, &lons(&[], 41));
    assert_eq!(r.energy_type, "MANIFESTOR");
    assert_eq!(r.authority, "HT");
}

#[test]
fn gate_entries_follow_body_order() {
    let p = lons(&[(Body::Sun, 1), (Body::Earth, 2)], 41);
    let r = chart_from_longitudes(&p, &p);
    assert_eq!(r.personality_gates[0].gate, 1);
    assert_eq!(r.personality_gates[0].body, "Sun");
    assert_eq!(r.personality_gates[0].center, "GC");
    assert_eq!(r.personality_gates[1].gate, 2);
    assert_eq!(r.personality_gates[1].body, "Earth");
    assert_eq!(r.design_gates[12].body, "Pluto");
}

#[test]
fn activations_and_longitudes_agree() {
    let p = lons(&[(Body::Sun, 10), (Body::Moon, 57)], 12);
    let d = lons(&[(Body::Jupiter, 34)], 22);
    let from_lons = chart_from_longitudes(&p, &d);
    let bodies = rave_bodygraph::ALL_BODIES;
    let pa = std::array::from_fn(|i| activate(bodies[i], Polarity::Personality, p[i]));
    let da = std::array::from_fn(|i| activate(bodies[i], Polarity::Design, d[i]));
    assert_eq!(chart_from_activations(pa, da), from_lons);
}
