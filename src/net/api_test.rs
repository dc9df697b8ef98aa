use super::*;

// =============================================================
// URL and header helpers
// =============================================================

#[test]
fn api_url_joins_path_onto_base() {
    assert_eq!(api_url("/api/events"), format!("{}/api/events", api_base()));
}

#[test]
fn api_base_has_no_trailing_slash() {
    assert!(!api_base().ends_with('/'));
}

#[test]
fn bearer_formats_authorization_value() {
    assert_eq!(bearer("T"), "Bearer T");
}

// =============================================================
// Events query construction
// =============================================================

#[test]
fn event_query_empty_filters_produce_no_pairs() {
    assert!(event_query(&EventFilters::default()).is_empty());
}

#[test]
fn event_query_includes_only_set_filters() {
    let filters = EventFilters {
        search: "hack".to_owned(),
        department: String::new(),
        kind: "academic".to_owned(),
    };
    let pairs = event_query(&filters);
    assert_eq!(
        pairs,
        vec![("search", "hack".to_owned()), ("type", "academic".to_owned())]
    );
}

#[test]
fn event_query_maps_kind_to_type_parameter() {
    let filters = EventFilters {
        kind: "sports".to_owned(),
        ..EventFilters::default()
    };
    let pairs = event_query(&filters);
    assert_eq!(pairs[0].0, "type");
}
