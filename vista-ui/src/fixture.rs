//! Fixture Fetch
//!
//! The one network call the site makes: `GET data/mock-data.json`.

use gloo_net::http::Request;
use vista::dashboard::{Fixture, FixtureError};

/// Fixture location relative to the site root
pub const FIXTURE_URL: &str = "/data/mock-data.json";

/// Fetch and parse the fixture
pub async fn fetch_fixture() -> Result<Fixture, FixtureError> {
    let response = Request::get(FIXTURE_URL)
        .send()
        .await
        .map_err(|e| FixtureError::Request(e.to_string()))?;

    if !response.ok() {
        return Err(FixtureError::Status(response.status()));
    }

    let bytes = response
        .binary()
        .await
        .map_err(|e| FixtureError::Request(e.to_string()))?;

    Fixture::parse(&bytes)
}

/// Success or failure of a fetch whose payload is not needed
pub async fn probe() -> Result<(), FixtureError> {
    fetch_fixture().await.map(|_| ())
}
