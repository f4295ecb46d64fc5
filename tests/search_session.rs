mod fixtures;

use route_gradient::search::RouteSearch;
use route_gradient::traits::{DirectionsQuery, TravelMode};
use route_gradient::{ProviderError, RouteError};

use fixtures::{FixedRouting, HillProfile};

fn query() -> DirectionsQuery {
    DirectionsQuery::new("Bellevue, Zürich", "Horgen").mode(TravelMode::Walking)
}

#[test]
fn run_builds_one_route_per_record() {
    let routing = FixedRouting::new(&["Seestrasse", "Albisstrasse"]);
    let mut search = RouteSearch::new();

    let routes = search.run(&routing, query()).unwrap();
    assert_eq!(routes.len(), 2);
    assert!(routes.iter().all(|r| r.mode() == TravelMode::Walking));

    assert_eq!(
        search.labels(),
        vec!["via Seestrasse (50 minutes)", "via Albisstrasse (50 minutes)"]
    );
    assert_eq!(search.query().unwrap().destination, "Horgen");
}

#[test]
fn profile_fills_every_route() {
    let routing = FixedRouting::new(&["Seestrasse", "Albisstrasse", "Zugerstrasse"]);
    let elevation = HillProfile::default();
    let mut search = RouteSearch::new();
    search.run(&routing, query()).unwrap();

    search.profile(&elevation).unwrap();

    assert_eq!(elevation.calls(), 3);
    for route in search.routes() {
        let segments = route.segments().expect("segments derived");
        assert_eq!(segments.len(), route.elevations().unwrap().len() - 1);
    }
    for route in search.routes_mut() {
        assert!(route.gradient_series().is_ok());
    }
}

#[test]
fn profile_surfaces_provider_failure() {
    let routing = FixedRouting::new(&["Seestrasse"]);
    let mut search = RouteSearch::new();
    search.run(&routing, query()).unwrap();

    let err = search.profile(&HillProfile::failing()).unwrap_err();
    assert!(matches!(err, RouteError::Provider(ProviderError::Timeout)));
}

#[test]
fn partial_profile_failure_clears_every_route() {
    let routing = FixedRouting::new(&["Seestrasse", "Albisstrasse", "Zugerstrasse", "Sihltalstrasse"]);
    let mut search = RouteSearch::new();
    search.run(&routing, query()).unwrap();
    search.profile(&HillProfile::default()).unwrap();

    let elevation = HillProfile::failing_after(1);
    let err = search.profile(&elevation).unwrap_err();

    assert!(matches!(err, RouteError::Provider(ProviderError::Timeout)));
    assert!(elevation.calls() >= 2);
    for route in search.routes() {
        assert!(route.elevations().is_none());
        assert!(route.segments().is_none());
    }
}

#[test]
fn failed_search_keeps_previous_results() {
    let mut search = RouteSearch::new();
    search.run(&FixedRouting::new(&["Seestrasse"]), query()).unwrap();
    search.select(Some(0));

    let err = search.run(&FixedRouting::failing(), query()).unwrap_err();
    assert!(matches!(
        err,
        RouteError::Provider(ProviderError::Api { ref status, .. }) if status == "REQUEST_DENIED"
    ));
    assert_eq!(search.routes().len(), 1);
    assert_eq!(search.selected_index(), Some(0));
}

#[test]
fn selection() {
    let mut search = RouteSearch::new();
    search.run(&FixedRouting::new(&["Seestrasse", "Albisstrasse"]), query()).unwrap();
    assert!(search.selected().is_none());

    let picked = search.select(Some(1)).unwrap();
    assert_eq!(picked.summary(), "Albisstrasse");
    assert!(picked.instructions_text().contains("<br>"));

    assert!(search.select(Some(5)).is_none());
    assert_eq!(search.selected_index(), None);

    // A new search clears the selection.
    search.select(Some(0));
    search.run(&FixedRouting::new(&["Seestrasse"]), query()).unwrap();
    assert!(search.selected().is_none());
}

#[test]
fn separate_sessions_are_independent() {
    let routing = FixedRouting::new(&["Seestrasse"]);
    let mut a = RouteSearch::new();
    let mut b = RouteSearch::new();
    a.run(&routing, query()).unwrap();
    b.run(&routing, query()).unwrap();

    a.profile(&HillProfile::default()).unwrap();
    assert!(a.routes()[0].segments().is_some());
    assert!(b.routes()[0].segments().is_none());
}
