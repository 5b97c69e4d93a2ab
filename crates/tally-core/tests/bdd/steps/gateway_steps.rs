//! BDD step definitions for the API gateway

use cucumber::{given, then, when};
use futures::executor::block_on;

use tally_core::http::HttpResponse;
use tally_core::TallyError;

use crate::world::TallyWorld;

#[given("the transactions endpoint returns an empty list")]
fn transactions_empty(world: &mut TallyWorld) {
    world.http.enqueue(Ok(HttpResponse {
        status: 200,
        body: "[]".to_string(),
    }));
}

#[given(expr = "the transactions endpoint returns status {int}")]
fn transactions_status(world: &mut TallyWorld, status: u16) {
    world.http.enqueue(Ok(HttpResponse {
        status,
        body: "server error".to_string(),
    }));
}

#[when("the client lists transactions")]
fn client_lists_transactions(world: &mut TallyWorld) {
    let client = world.client();
    world.last_result = Some(block_on(client.list_transactions()).map(|_| ()));
}

#[then("the call succeeds")]
fn call_succeeds(world: &mut TallyWorld) {
    let result = world.last_result.as_ref().expect("no call made");
    assert!(result.is_ok(), "call failed: {result:?}");
}

#[then("the call fails with an authentication error")]
fn call_fails_auth(world: &mut TallyWorld) {
    match world.last_result.as_ref().expect("no call made") {
        Err(TallyError::Auth(_)) => {}
        other => panic!("expected authentication error, got {other:?}"),
    }
}

#[then("the call fails with an API error")]
fn call_fails_api(world: &mut TallyWorld) {
    match world.last_result.as_ref().expect("no call made") {
        Err(TallyError::Api { .. }) => {}
        other => panic!("expected API error, got {other:?}"),
    }
}

#[then("no HTTP request was issued")]
fn no_request_issued(world: &mut TallyWorld) {
    assert!(world.http.requests().is_empty());
}

#[then(expr = "the request carried bearer token {string}")]
fn request_carried_bearer(world: &mut TallyWorld, token: String) {
    let requests = world.http.requests();
    assert!(!requests.is_empty(), "no request was issued");
    assert_eq!(requests[0].bearer.as_deref(), Some(token.as_str()));
}
