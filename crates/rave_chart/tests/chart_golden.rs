//! Reference-date charts.
//!
//! The 1968 and 1973 charts run on the built-in analytic provider; every
//! asserted placement sits well inside its gate or line boundary at that
//! provider's precision. The 1935 chart needs sub-arcminute Sun and Moon
//! positions and only runs when a precomputed longitude table is present.

use std::path::Path;

use rave_chart::{ChartConfig, ChartResult, compute_chart, compute_chart_analytic};
use rave_ephem::TableEphemeris;
use rave_time::BirthTime;

const REFERENCE_TABLE_1935: &str = "tests/data/reference_1935.toml";

fn sorted(mut v: Vec<&str>) -> Vec<&str> {
    v.sort_unstable();
    v
}

fn chart(birth: BirthTime) -> ChartResult {
    compute_chart_analytic(&birth, &ChartConfig::default()).unwrap()
}

#[test]
fn chart_1968_02_21() {
    let r = chart(BirthTime::new(1968, 2, 21, 11, 15, 0, 3.0));
    assert_eq!(r.birth_date, "1968-02-21 11:15:00");
    assert_eq!(r.energy_type, "MANIFESTING GENERATOR");
    assert_eq!(r.strategy, "Wait to respond, then inform");
    assert_eq!(r.authority, "SP");
    assert_eq!(r.profile, "2/4");
    assert_eq!(r.incarnation_cross, "55/59-34/20-RAC");
    assert_eq!(r.cross_type, "RAC");
    assert_eq!(
        sorted(r.channel_labels()),
        ["20/34", "20/57", "25/51", "3/60", "57/34", "59/6"]
    );
    assert_eq!(
        sorted(r.defined_centers.clone()),
        ["GC", "HT", "RT", "SL", "SN", "SP", "TT"]
    );
    assert_eq!(sorted(r.undefined_centers.clone()), ["AA", "HD"]);
    assert!(r.design_date.starts_with("1967-11-26"), "{}", r.design_date);
}

#[test]
fn chart_1973_01_19() {
    let r = chart(BirthTime::new(1973, 1, 19, 11, 15, 0, 3.0));
    assert_eq!(r.energy_type, "GENERATOR");
    assert_eq!(r.authority, "SL");
    assert_eq!(r.profile, "3/6");
    assert_eq!(r.incarnation_cross, "60/56-50/3-RAC");
    assert_eq!(
        sorted(r.channel_labels()),
        ["10/34", "10/57", "18/58", "3/60", "32/54", "57/34"]
    );
    assert_eq!(sorted(r.defined_centers.clone()), ["GC", "RT", "SL", "SN"]);
    assert_eq!(r.split, 0);
}

#[test]
fn chart_1935_07_06() {
    if !Path::new(REFERENCE_TABLE_1935).exists() {
        eprintln!("Skipping chart_1935_07_06: {REFERENCE_TABLE_1935} not found");
        return;
    }
    let eph = TableEphemeris::from_file(REFERENCE_TABLE_1935).unwrap();
    let birth = BirthTime::new(1935, 7, 6, 4, 48, 0, 8.0);
    let r = compute_chart(&birth, &eph, &ChartConfig::default()).unwrap();
    assert_eq!(r.birth_date, "1935-07-06 04:48:00");
    assert_eq!(r.energy_type, "PROJECTOR");
    assert_eq!(r.strategy, "Wait for invitation");
}

#[test]
fn recomputation_is_identical() {
    let birth = BirthTime::new(1968, 2, 21, 11, 15, 0, 3.0);
    let a = chart(birth);
    let b = chart(birth);
    assert_eq!(a, b);
}

#[test]
fn json_has_every_feature_key() {
    let r = chart(BirthTime::new(1973, 1, 19, 11, 15, 0, 3.0));
    let value = serde_json::to_value(&r).unwrap();
    let obj = value.as_object().unwrap();
    assert_eq!(obj.len(), rave_chart::AVAILABLE_FEATURES.len());
    for key in rave_chart::AVAILABLE_FEATURES {
        assert!(obj.contains_key(key), "missing {key}");
    }
    assert_eq!(obj["personality_gates"][0]["body"], "Sun");
    assert_eq!(obj["personality_gates"][0]["gate"], 60);
    assert_eq!(obj["design_gates"][0]["gate"], 50);
    assert_eq!(obj["variables"].as_object().unwrap().len(), 4);
}
