use campus_events::domain::time_of_day::leading_hour;
use campus_events::domain::{classify, EventStore, TimeOfDay};

#[test]
fn builtin_catalog_buckets() {
    let store = EventStore::builtin();
    let buckets: Vec<TimeOfDay> = store.events().iter().map(|e| classify(&e.time)).collect();

    assert_eq!(
        buckets,
        vec![
            TimeOfDay::Evening,   // 7:00 PM
            TimeOfDay::Morning,   // 9:00 AM - 5:00 PM
            TimeOfDay::Evening,   // 8:00 PM
            TimeOfDay::Morning,   // 8:00 PM - 12:00 AM
            TimeOfDay::Morning,   // 10:00 AM - 4:00 PM
            TimeOfDay::Afternoon, // 2:00 PM
            TimeOfDay::Evening,   // 6:00 PM - 9:00 PM
            TimeOfDay::Evening,   // 7:00 PM - 11:00 PM
        ]
    );
}

#[test]
fn pm_boundaries() {
    assert_eq!(classify("4:59 PM"), TimeOfDay::Afternoon);
    assert_eq!(classify("5:00 PM"), TimeOfDay::Evening);
    assert_eq!(classify("12:30 PM"), TimeOfDay::Afternoon);
    assert_eq!(classify("11:00 pm"), TimeOfDay::Evening);
}

#[test]
fn unmarked_times_use_the_24_hour_clock() {
    assert_eq!(classify("08:15"), TimeOfDay::Morning);
    assert_eq!(classify("12:00"), TimeOfDay::Afternoon);
    assert_eq!(classify("16:59"), TimeOfDay::Afternoon);
    assert_eq!(classify("17:00"), TimeOfDay::Evening);
}

#[test]
fn unparseable_times_count_as_hour_zero() {
    assert_eq!(leading_hour("TBA"), 0);
    assert_eq!(classify("TBA"), TimeOfDay::Morning);
    assert_eq!(classify(""), TimeOfDay::Morning);
}

#[test]
fn labels_round_trip_through_from_str() {
    for bucket in TimeOfDay::ALL {
        assert_eq!(bucket.label().parse::<TimeOfDay>(), Ok(bucket));
    }
    assert!("Midnight".parse::<TimeOfDay>().is_err());
}
