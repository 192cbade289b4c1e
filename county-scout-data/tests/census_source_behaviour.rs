//! Behavioural tests for [`HttpCensusSource`].
//!
//! A one-shot local HTTP server stands in for the census API, so the tests
//! exercise the real client, runtime bridge, and table decoding.

mod support;

use std::cell::RefCell;
use std::time::Duration;

use county_scout_core::{CountyRecord, CountySource, CountySourceError};
use county_scout_data::{HttpCensusSource, HttpCensusSourceConfig};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use support::{StubServer, closed_port_url};

/// Result cell holding the outcome of a fetch.
type ResultCell = RefCell<Result<Vec<CountyRecord>, CountySourceError>>;

/// Stub service and the base URL the source should call.
#[derive(Default)]
struct Service {
    base_url: String,
    server: Option<StubServer>,
}

#[fixture]
fn service() -> RefCell<Service> {
    RefCell::new(Service::default())
}

#[fixture]
fn result() -> ResultCell {
    RefCell::new(Ok(Vec::new()))
}

#[fixture]
fn request_line() -> RefCell<String> {
    RefCell::new(String::new())
}

const TWO_COUNTIES: &str = r#"[
  ["NAME","B01003_001E","B19013_001E","B25077_001E","state","county"],
  ["Boulder County, Colorado","330758","99770","680100","08","013"],
  ["Denver County, Colorado","713252","85853","543500","08","031"]
]"#;

fn serve(service: &RefCell<Service>, server: StubServer) {
    let mut guard = service.borrow_mut();
    guard.base_url.clone_from(&server.base_url);
    guard.server = Some(server);
}

// --- Given steps ---

#[given("a census service returning two counties")]
fn service_ok(#[from(service)] service: &RefCell<Service>) {
    serve(service, StubServer::respond(200, TWO_COUNTIES));
}

#[given("a census service failing with status {status}")]
fn service_failing(#[from(service)] service: &RefCell<Service>, status: u16) {
    serve(service, StubServer::respond(status, r#"{"error":"unavailable"}"#));
}

#[given("a census service that is not running")]
fn service_down(#[from(service)] service: &RefCell<Service>) {
    service.borrow_mut().base_url = closed_port_url();
}

#[given("a census service that never answers")]
fn service_stalled(#[from(service)] service: &RefCell<Service>) {
    serve(service, StubServer::stall(Duration::from_secs(2)));
}

#[given("a census service returning an object instead of a table")]
fn service_malformed(#[from(service)] service: &RefCell<Service>) {
    serve(service, StubServer::respond(200, r#"{"rows": []}"#));
}

// --- When steps ---

#[when("I fetch counties for \"{state}\"")]
fn fetch(
    #[from(service)] service: &RefCell<Service>,
    #[from(result)] result: &ResultCell,
    #[from(request_line)] request_line: &RefCell<String>,
    state: String,
) {
    let base_url = service.borrow().base_url.clone();
    let config =
        HttpCensusSourceConfig::new(base_url).with_timeout(Duration::from_millis(300));
    let source = HttpCensusSource::with_config(config).expect("source should build");
    *result.borrow_mut() = source.fetch_counties(&state);
    if let Some(server) = service.borrow_mut().server.take() {
        *request_line.borrow_mut() = server.request_line();
    }
}

// --- Then steps ---

#[then("{count} counties are returned largest first")]
fn then_counties(#[from(result)] result: &ResultCell, count: usize) {
    let borrowed = result.borrow();
    let counties = borrowed.as_ref().expect("expected Ok result");
    assert_eq!(counties.len(), count);
    let names: Vec<_> = counties.iter().map(|county| county.name.as_str()).collect();
    assert_eq!(names, ["Denver County", "Boulder County"]);
    assert!(counties.iter().all(|county| county.safety_score.is_none()));
}

#[then("the request asked for every county in state {fips}")]
fn then_request(#[from(request_line)] request_line: &RefCell<String>, fips: String) {
    let line = request_line.borrow();
    assert!(line.starts_with("GET /data/2022/acs/acs5?get=NAME"), "{line}");
    assert!(line.contains(&format!("in=state%3A{fips}")), "{line}");
}

#[then("an HTTP error with status {status} is returned")]
fn then_http_error(#[from(result)] result: &ResultCell, status: u16) {
    let borrowed = result.borrow();
    assert!(
        matches!(
            &*borrowed,
            Err(CountySourceError::Http { status: actual, .. }) if *actual == status
        ),
        "expected Http error, got {borrowed:?}"
    );
}

#[then("a network error is returned")]
fn then_network_error(#[from(result)] result: &ResultCell) {
    let borrowed = result.borrow();
    assert!(
        matches!(&*borrowed, Err(CountySourceError::Network { .. })),
        "expected Network error, got {borrowed:?}"
    );
}

#[then("a timeout error is returned")]
fn then_timeout_error(#[from(result)] result: &ResultCell) {
    let borrowed = result.borrow();
    assert!(
        matches!(&*borrowed, Err(CountySourceError::Timeout { .. })),
        "expected Timeout error, got {borrowed:?}"
    );
}

#[then("a malformed payload error is returned")]
fn then_malformed_error(#[from(result)] result: &ResultCell) {
    let borrowed = result.borrow();
    assert!(
        matches!(&*borrowed, Err(CountySourceError::Malformed { .. })),
        "expected Malformed error, got {borrowed:?}"
    );
}

#[then("an unknown state error is returned")]
fn then_unknown_state(#[from(result)] result: &ResultCell) {
    let borrowed = result.borrow();
    assert!(
        matches!(&*borrowed, Err(CountySourceError::UnknownState { .. })),
        "expected UnknownState error, got {borrowed:?}"
    );
}

// --- Scenario registrations ---

macro_rules! register_scenario {
    ($fn_name:ident, $title:literal) => {
        #[scenario(path = "tests/features/census_source.feature", name = $title)]
        fn $fn_name(
            service: RefCell<Service>,
            result: ResultCell,
            request_line: RefCell<String>,
        ) {
            let _ = (service, result, request_line);
        }
    };
}

register_scenario!(decoding_success, "decoding a successful census response");
register_scenario!(reporting_http_failure, "reporting an HTTP failure");
register_scenario!(reporting_unreachable, "reporting an unreachable service");
register_scenario!(reporting_timeout, "reporting a slow service");
register_scenario!(reporting_malformed, "reporting a malformed payload");
register_scenario!(rejecting_unknown_state, "rejecting an unknown state");
