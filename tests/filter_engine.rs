//! Filter engine behavior against the built-in catalog.

use campus_events::domain::{
    DropdownFilters, EventStore, Facet, FacetAllowLists, RegistrationFilter, Selection, TimeOfDay,
};
use campus_events::filter::{filter_events, FilterQuery};

fn ids(store: &EventStore, search: &str, lists: &FacetAllowLists, dropdowns: &DropdownFilters) -> Vec<u32> {
    filter_events(store.events(), &FilterQuery::new(search, lists, dropdowns))
        .into_iter()
        .map(|e| e.id)
        .collect()
}

#[test]
fn defaults_show_the_whole_catalog_in_order() {
    let store = EventStore::builtin();
    let got = ids(&store, "", &FacetAllowLists::default(), &DropdownFilters::default());
    assert_eq!(got, vec![1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn empty_category_list_with_sports_dropdown() {
    let store = EventStore::builtin();
    let mut lists = FacetAllowLists::default();
    *lists.get_mut(Facet::Category) = Default::default();
    let dropdowns = DropdownFilters {
        category: Selection::Specific("Sports".to_string()),
        ..DropdownFilters::default()
    };

    let hits = filter_events(store.events(), &FilterQuery::new("", &lists, &dropdowns));
    assert_eq!(hits.len(), 2);
    assert!(hits.iter().all(|e| e.category == "Sports"));
}

#[test]
fn registration_required_excludes_walk_in_events() {
    let store = EventStore::builtin();
    let dropdowns = DropdownFilters {
        registration: Selection::Specific(RegistrationFilter::Required),
        ..DropdownFilters::default()
    };

    let got = ids(&store, "", &FacetAllowLists::default(), &dropdowns);
    assert_eq!(got, vec![2, 3, 5, 6]);
    assert!(!got.contains(&1));
}

#[test]
fn search_is_case_insensitive_across_fields() {
    let store = EventStore::builtin();
    let lists = FacetAllowLists::default();
    let dropdowns = DropdownFilters::default();

    assert_eq!(ids(&store, "SOCCER", &lists, &dropdowns), vec![6]);
    assert_eq!(ids(&store, "student lounge", &lists, &dropdowns), vec![8]);
    assert!(ids(&store, "no such event anywhere", &lists, &dropdowns).is_empty());
}

#[test]
fn allow_list_removal_hides_matching_events() {
    let store = EventStore::builtin();
    let mut lists = FacetAllowLists::default();
    lists.get_mut(Facet::Cost).remove("Free");

    let got = ids(&store, "", &lists, &DropdownFilters::default());
    assert_eq!(got, vec![3, 4]);
}

#[test]
fn unrestricted_lists_admit_values_outside_the_defaults() {
    let mut events = EventStore::builtin().events().to_vec();
    events[0].location = "Boathouse".to_string();
    let store = EventStore::from_events(events).expect("unique ids");

    let restricted = ids(&store, "", &FacetAllowLists::default(), &DropdownFilters::default());
    assert!(!restricted.contains(&1));

    let open = ids(&store, "", &FacetAllowLists::unrestricted(), &DropdownFilters::default());
    assert_eq!(open.len(), 8);
}

#[test]
fn time_dropdown_uses_the_classifier() {
    let store = EventStore::builtin();
    let dropdowns = DropdownFilters {
        time: Selection::Specific(TimeOfDay::Evening),
        registration: Selection::Specific(RegistrationFilter::NotRequired),
        ..DropdownFilters::default()
    };

    // The formal runs past midnight, so its "AM" puts it in the morning.
    let got = ids(&store, "", &FacetAllowLists::default(), &dropdowns);
    assert_eq!(got, vec![1, 7, 8]);
}

#[test]
fn dropdown_values_match_exactly() {
    let store = EventStore::builtin();
    let dropdowns = DropdownFilters {
        category: Selection::Specific("sports".to_string()),
        ..DropdownFilters::default()
    };

    assert!(ids(&store, "", &FacetAllowLists::default(), &dropdowns).is_empty());
}

#[test]
fn date_range_does_not_narrow_results() {
    let store = EventStore::builtin();
    let mut dropdowns = DropdownFilters::default();
    dropdowns.cycle(campus_events::domain::FilterField::DateRange, true);
    assert_eq!(dropdowns.applied_count(), 1);

    let got = ids(&store, "", &FacetAllowLists::default(), &dropdowns);
    assert_eq!(got.len(), 8);
}

#[test]
fn filtering_twice_gives_the_same_result() {
    let store = EventStore::builtin();
    let lists = FacetAllowLists::default();
    let dropdowns = DropdownFilters {
        cost: Selection::Specific("Free".to_string()),
        ..DropdownFilters::default()
    };
    let query = FilterQuery::new("club", &lists, &dropdowns);

    let first: Vec<_> = filter_events(store.events(), &query);
    let owned: Vec<_> = first.iter().map(|e| (*e).clone()).collect();
    let second = filter_events(&owned, &query);

    assert_eq!(first, second);
}

#[test]
fn single_event_check_agrees_with_the_filter_pass() {
    let store = EventStore::builtin();
    let lists = FacetAllowLists::default();
    let dropdowns = DropdownFilters {
        time: Selection::Specific(TimeOfDay::Evening),
        ..DropdownFilters::default()
    };
    let query = FilterQuery::new("night", &lists, &dropdowns);

    let one_by_one: Vec<u32> = store
        .events()
        .iter()
        .filter(|e| query.matches(e))
        .map(|e| e.id)
        .collect();
    assert_eq!(one_by_one, ids(&store, "night", &lists, &dropdowns));
    assert!(one_by_one.contains(&8));
}
