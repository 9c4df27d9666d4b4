#![allow(dead_code)]

use axum_test::TestServer;
use ephemeral_shortener::domain::clock::ManualClock;
use ephemeral_shortener::infrastructure::memory::InMemoryLinkRepository;
use ephemeral_shortener::routes::app_router;
use ephemeral_shortener::state::AppState;
use std::path::PathBuf;
use std::sync::Arc;

/// Landing page fixture shipped with the tests.
pub fn fixture_index_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/index.html")
}

/// Fresh state with its own store, driven by a manual clock.
pub fn create_test_state() -> (AppState, Arc<ManualClock>, Arc<InMemoryLinkRepository>) {
    create_test_state_with_index(fixture_index_path())
}

pub fn create_test_state_with_index(
    index_path: PathBuf,
) -> (AppState, Arc<ManualClock>, Arc<InMemoryLinkRepository>) {
    let clock = Arc::new(ManualClock::default());
    let repository = Arc::new(InMemoryLinkRepository::with_clock(clock.clone()));
    let state = AppState::new(repository.clone(), index_path);

    (state, clock, repository)
}

/// Test server over the full application router.
pub fn create_test_server() -> (TestServer, Arc<ManualClock>, Arc<InMemoryLinkRepository>) {
    let (state, clock, repository) = create_test_state();
    let server = TestServer::new(app_router(state)).unwrap();

    (server, clock, repository)
}
