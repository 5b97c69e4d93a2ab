//! BDD step definitions for route guarding and layout chrome

use cucumber::{then, when};

use tally_core::guard::{self, NavDecision};
use tally_core::layout;

use crate::world::TallyWorld;

#[when(expr = "the user navigates to {string}")]
fn user_navigates(world: &mut TallyWorld, path: String) {
    world.decision = Some(guard::decide(&world.session, &path));
    world.chrome = Some(layout::chrome_for_path(&path));
}

#[then(expr = "the navigation is redirected to {string}")]
fn navigation_redirected(world: &mut TallyWorld, target: String) {
    match world.decision.expect("no navigation attempted") {
        NavDecision::Redirect(to) => assert_eq!(to, target),
        NavDecision::Allow => panic!("navigation was allowed, expected redirect to {target}"),
    }
}

#[then("the navigation is allowed")]
fn navigation_allowed(world: &mut TallyWorld) {
    assert_eq!(world.decision.expect("no navigation attempted"), NavDecision::Allow);
}

#[then("the sidebar is shown")]
fn sidebar_shown(world: &mut TallyWorld) {
    assert!(world.chrome.expect("no navigation attempted").sidebar);
}

#[then("the sidebar is hidden")]
fn sidebar_hidden(world: &mut TallyWorld) {
    assert!(!world.chrome.expect("no navigation attempted").sidebar);
}
