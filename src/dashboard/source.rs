//! Fixture sources

use async_trait::async_trait;

use super::fixture::Fixture;
use super::FixtureError;

/// Somewhere a fixture document can be fetched from
#[async_trait]
pub trait FixtureSource: Send + Sync {
    /// Fetch and parse the fixture
    async fn fetch(&self) -> Result<Fixture, FixtureError>;

    /// Human-readable location, for logs
    fn describe(&self) -> String;
}

#[async_trait]
impl<T: FixtureSource + ?Sized> FixtureSource for Box<T> {
    async fn fetch(&self) -> Result<Fixture, FixtureError> {
        (**self).fetch().await
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

#[cfg(feature = "runtime")]
pub use runtime::{FileFixtureSource, HttpFixtureSource};

#[cfg(feature = "runtime")]
mod runtime {
    use super::*;
    use reqwest::Client;
    use std::path::PathBuf;
    use std::time::Duration;

    /// Fetches the fixture with a single GET
    pub struct HttpFixtureSource {
        client: Client,
        url: String,
    }

    impl HttpFixtureSource {
        pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, FixtureError> {
            let client = Client::builder()
                .timeout(timeout)
                .build()
                .map_err(|e| FixtureError::Request(e.to_string()))?;

            Ok(Self {
                client,
                url: url.into(),
            })
        }
    }

    #[async_trait]
    impl FixtureSource for HttpFixtureSource {
        async fn fetch(&self) -> Result<Fixture, FixtureError> {
            let response = self.client.get(&self.url).send().await.map_err(|e| {
                if e.is_timeout() {
                    FixtureError::Timeout
                } else {
                    FixtureError::Request(e.to_string())
                }
            })?;

            let status = response.status();
            if !status.is_success() {
                return Err(FixtureError::Status(status.as_u16()));
            }

            let body = response
                .bytes()
                .await
                .map_err(|e| FixtureError::Request(e.to_string()))?;

            Fixture::parse(&body)
        }

        fn describe(&self) -> String {
            self.url.clone()
        }
    }

    /// Reads the fixture from disk
    pub struct FileFixtureSource {
        path: PathBuf,
    }

    impl FileFixtureSource {
        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }
    }

    #[async_trait]
    impl FixtureSource for FileFixtureSource {
        async fn fetch(&self) -> Result<Fixture, FixtureError> {
            let bytes = tokio::fs::read(&self.path).await?;
            Fixture::parse(&bytes)
        }

        fn describe(&self) -> String {
            self.path.display().to_string()
        }
    }

}
