//! Round trips between civil times and Julian Dates.

use rave_time::{BirthTime, CivilTime, TimeUnit, calendar_to_jd, jd_to_calendar, timestamp_range};

#[test]
fn civil_round_trip_over_a_century() {
    let mut jd = calendar_to_jd(1920, 1, 1.0);
    let end = calendar_to_jd(2030, 1, 1.0);
    while jd < end {
        let c = CivilTime::from_jd(jd);
        let birth = BirthTime::new(c.year, c.month, c.day, c.hour, c.minute, c.second, 0.0);
        let back = birth.to_jd_ut().unwrap();
        assert!((back - jd).abs() * 86_400.0 < 0.6, "jd {jd} -> {c} -> {back}");
        // 37 days, 5 h 13 min 7 s
        jd += 37.0 + (5.0 * 3600.0 + 13.0 * 60.0 + 7.0) / 86_400.0;
    }
}

#[test]
fn calendar_round_trip_across_gregorian_reform() {
    for (y, m, d) in [(1582, 10, 4.0), (1582, 10, 15.0), (333, 1, 27.5), (-1000, 7, 12.5)] {
        let jd = calendar_to_jd(y, m, d);
        let (y2, m2, d2) = jd_to_calendar(jd);
        assert_eq!((y2, m2), (y, m));
        assert!((d2 - d).abs() < 1e-6);
    }
    // 1582 Oct 4 (Julian) is followed by Oct 15 (Gregorian)
    assert!((calendar_to_jd(1582, 10, 15.0) - calendar_to_jd(1582, 10, 4.0) - 1.0).abs() < 1e-9);
}

#[test]
fn offsets_shift_the_instant() {
    let east = BirthTime::new(1968, 2, 21, 11, 15, 0, 3.0).to_jd_ut().unwrap();
    let utc = BirthTime::new(1968, 2, 21, 8, 15, 0, 0.0).to_jd_ut().unwrap();
    assert!((east - utc).abs() < 1e-9);
    assert_eq!(CivilTime::from_jd(east).to_string(), "1968-02-21 08:15:00");
}

#[test]
fn parsed_display_round_trip() {
    let b: BirthTime = "1999-12-31T23:59:59".parse().unwrap();
    assert_eq!(b.to_string(), "1999-12-31 23:59:59");
    let again: BirthTime = b.to_string().parse().unwrap();
    assert_eq!(again, b);
}

#[test]
fn hourly_range_crosses_midnight() {
    let start: BirthTime = "2020-02-28 18:00".parse().unwrap();
    let end: BirthTime = "2020-02-29 00:00".parse().unwrap();
    let range = timestamp_range(&start, &end, 1.0, TimeUnit::Hours, 2).unwrap();
    let labels: Vec<String> = range.iter().map(ToString::to_string).collect();
    assert_eq!(
        labels,
        ["2020-02-29 00:00:00", "2020-02-28 22:00:00", "2020-02-28 20:00:00"]
    );
}
