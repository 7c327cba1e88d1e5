//! Design-date search against the analytic provider.

use rave_bodygraph::{Body, normalize_pm180};
use rave_ephem::{AnalyticEphemeris, DesignSearchConfig, Ephemeris, design_julian_date};
use rave_time::BirthTime;

fn solar_arc(eph: &AnalyticEphemeris, birth_jd: f64, design_jd: f64) -> f64 {
    let b = eph.longitude(Body::Sun, birth_jd).unwrap();
    let d = eph.longitude(Body::Sun, design_jd).unwrap();
    normalize_pm180(b - d)
}

#[test]
fn design_date_1968() {
    let eph = AnalyticEphemeris::default();
    let birth = BirthTime::new(1968, 2, 21, 11, 15, 0, 3.0).to_jd_ut().unwrap();
    assert!((birth - 2_439_907.843_75).abs() < 1e-6);

    let design = design_julian_date(&eph, birth, &DesignSearchConfig::default()).unwrap();
    assert!((design - 2_439_821.2284).abs() < 0.01, "design = {design}");
    assert!((solar_arc(&eph, birth, design) - 88.0).abs() < 1e-5);
}

#[test]
fn design_date_1973() {
    let eph = AnalyticEphemeris::default();
    let birth = BirthTime::new(1973, 1, 19, 11, 15, 0, 3.0).to_jd_ut().unwrap();
    let design = design_julian_date(&eph, birth, &DesignSearchConfig::default()).unwrap();
    assert!((design - 2_441_614.948).abs() < 0.01, "design = {design}");
    assert!((solar_arc(&eph, birth, design) - 88.0).abs() < 1e-5);
}

#[test]
fn design_precedes_birth_by_about_three_months() {
    let eph = AnalyticEphemeris::default();
    let config = DesignSearchConfig::default();
    for k in 0..24 {
        let birth = 2_430_000.5 + 523.37 * k as f64;
        let design = design_julian_date(&eph, birth, &config).unwrap();
        let days = birth - design;
        assert!((84.0..=96.0).contains(&days), "birth {birth}: {days} days");
        assert!((solar_arc(&eph, birth, design) - 88.0).abs() < 1e-5);
    }
}

#[test]
fn custom_arc() {
    let eph = AnalyticEphemeris::default();
    let config = DesignSearchConfig {
        arc_deg: 30.0,
        ..DesignSearchConfig::default()
    };
    let birth = 2_451_545.0;
    let design = design_julian_date(&eph, birth, &config).unwrap();
    assert!((solar_arc(&eph, birth, design) - 30.0).abs() < 1e-5);
    assert!((28.0..33.0).contains(&(birth - design)));
}
