//! BDD step definitions for session state and token lifecycle

use cucumber::{given, then, when};
use futures::executor::block_on;

use tally_core::http::HttpResponse;
use tally_core::models::Credentials;

use crate::world::TallyWorld;

#[given("an empty token store")]
fn empty_store(world: &mut TallyWorld) {
    world.store.seed(None, None);
}

#[given(expr = "stored tokens {string} and {string}")]
fn stored_tokens(world: &mut TallyWorld, access: String, refresh: String) {
    world.store.seed(Some(&access), Some(&refresh));
}

#[given(expr = "a stored refresh token {string}")]
fn stored_refresh_token(world: &mut TallyWorld, refresh: String) {
    world.store.seed(None, Some(&refresh));
}

#[given(expr = "a stored access token {string}")]
fn stored_access_token(world: &mut TallyWorld, access: String) {
    world.store.seed(Some(&access), None);
}

#[given(expr = "the login endpoint returns tokens {string} and {string}")]
fn login_returns_tokens(world: &mut TallyWorld, access: String, refresh: String) {
    world.http.enqueue(Ok(HttpResponse {
        status: 200,
        body: format!(r#"{{"access":"{access}","refresh":"{refresh}"}}"#),
    }));
}

#[given(expr = "the logout endpoint returns status {int}")]
fn logout_returns_status(world: &mut TallyWorld, status: u16) {
    world.http.enqueue(Ok(HttpResponse {
        status,
        body: "{}".to_string(),
    }));
}

#[when(expr = "the user logs in as {string} with password {string}")]
fn user_logs_in(world: &mut TallyWorld, email: String, password: String) {
    let client = world.client();
    let result = block_on(client.login(&Credentials { email, password }));
    world.last_result = Some(result.map(|_| ()));
}

#[when("the user logs out")]
fn user_logs_out(world: &mut TallyWorld) {
    let client = world.client();
    world.last_result = Some(block_on(client.logout()));
}

#[then("the session is authenticated")]
fn session_is_authenticated(world: &mut TallyWorld) {
    assert!(world.session.is_authenticated());
}

#[then("the session is not authenticated")]
fn session_is_not_authenticated(world: &mut TallyWorld) {
    assert!(!world.session.is_authenticated());
}

#[then("the login succeeds")]
fn login_succeeds(world: &mut TallyWorld) {
    let result = world.last_result.as_ref().expect("no login attempted");
    assert!(result.is_ok(), "login failed: {result:?}");
}

#[then(expr = "the stored access token is {string}")]
fn stored_access_token_is(world: &mut TallyWorld, expected: String) {
    assert_eq!(world.session.access_token().as_deref(), Some(expected.as_str()));
}

#[then(expr = "the stored refresh token is {string}")]
fn stored_refresh_token_is(world: &mut TallyWorld, expected: String) {
    assert_eq!(world.session.refresh_token().as_deref(), Some(expected.as_str()));
}

#[then("the store is empty")]
fn store_is_empty(world: &mut TallyWorld) {
    assert_eq!(world.session.access_token(), None);
    assert_eq!(world.session.refresh_token(), None);
}
