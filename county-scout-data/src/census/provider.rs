//! HTTP-based `CountySource` using the census ACS 5-year API.
//!
//! The [`CountySource`] trait is synchronous so the ranking core stays free of
//! async concerns. [`HttpCensusSource`] bridges the async HTTP client to that
//! interface by blocking on a Tokio runtime it owns.
//!
//! # Example
//!
//! ```no_run
//! use county_scout_core::CountySource;
//! use county_scout_data::HttpCensusSource;
//!
//! let source = HttpCensusSource::new("https://api.census.gov")?;
//! let counties = source.fetch_counties("Colorado")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::time::Duration;

use county_scout_core::{CountyRecord, CountySource, CountySourceError};
use log::debug;
use reqwest::Client;
use serde_json::Value;
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};
use url::Url;

use super::{COUNTY_VARIABLES, CensusSourceBuildError, NAME, decode_census_table};
use crate::resolve_state;

/// Default census API endpoint.
pub const DEFAULT_CENSUS_BASE_URL: &str = "https://api.census.gov";

/// Default ACS 5-year dataset vintage.
pub const DEFAULT_DATASET_YEAR: u16 = 2022;

/// Default user agent for census requests.
pub const DEFAULT_USER_AGENT: &str = "county-scout/0.1";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for [`HttpCensusSource`].
#[derive(Clone)]
pub struct HttpCensusSourceConfig {
    /// Base URL for the census API (e.g., `"https://api.census.gov"`).
    pub base_url: String,
    /// ACS 5-year dataset vintage.
    pub year: u16,
    /// Optional API key; anonymous requests are rate limited.
    pub api_key: Option<String>,
    /// Request timeout duration.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl std::fmt::Debug for HttpCensusSourceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpCensusSourceConfig")
            .field("base_url", &self.base_url)
            .field("year", &self.year)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl Default for HttpCensusSourceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_CENSUS_BASE_URL.to_owned(),
            year: DEFAULT_DATASET_YEAR,
            api_key: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl HttpCensusSourceConfig {
    /// Create a new configuration with the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Set the dataset vintage.
    #[must_use]
    pub const fn with_year(mut self, year: u16) -> Self {
        self.year = year;
        self
    }

    /// Set the API key.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// HTTP-based county statistics source.
///
/// Owns a `current_thread` Tokio runtime reused across calls. When called from
/// inside a multi-threaded Tokio runtime it blocks on that runtime's handle via
/// [`tokio::task::block_in_place`] instead; inside a `current_thread` runtime it
/// falls back to its own.
pub struct HttpCensusSource {
    client: Client,
    config: HttpCensusSourceConfig,
    base_url: Url,
    runtime: Runtime,
}

impl std::fmt::Debug for HttpCensusSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpCensusSource")
            .field("client", &self.client)
            .field("config", &self.config)
            .field("runtime", &"<tokio::runtime::Runtime>")
            .finish_non_exhaustive()
    }
}

impl HttpCensusSource {
    /// Create a source with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the HTTP client or Tokio
    /// runtime fails to build.
    pub fn new(base_url: impl Into<String>) -> Result<Self, CensusSourceBuildError> {
        Self::with_config(HttpCensusSourceConfig::new(base_url))
    }

    /// Create a source with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the HTTP client or Tokio
    /// runtime fails to build.
    pub fn with_config(config: HttpCensusSourceConfig) -> Result<Self, CensusSourceBuildError> {
        let base_url =
            Url::parse(config.base_url.trim_end_matches('/')).map_err(|source| {
                CensusSourceBuildError::BaseUrl {
                    url: config.base_url.clone(),
                    source,
                }
            })?;
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(CensusSourceBuildError::HttpClient)?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(CensusSourceBuildError::Runtime)?;
        Ok(Self {
            client,
            config,
            base_url,
            runtime,
        })
    }

    /// Build the ACS query URL for a state FIPS code.
    ///
    /// The format is
    /// `{base_url}/data/{year}/acs/acs5?get=NAME,<vars>&for=county:*&in=state:{fips}`
    /// with `&key=` appended when an API key is configured.
    fn build_counties_url(&self, fips: &str) -> Url {
        let mut url = self.base_url.clone();
        let path = format!(
            "{}/data/{}/acs/acs5",
            self.base_url.path().trim_end_matches('/'),
            self.config.year
        );
        url.set_path(&path);
        let variables = std::iter::once(NAME)
            .chain(COUNTY_VARIABLES)
            .collect::<Vec<_>>()
            .join(",");
        {
            let mut query = url.query_pairs_mut();
            query.clear();
            query.append_pair("get", &variables);
            query.append_pair("for", "county:*");
            query.append_pair("in", &format!("state:{fips}"));
            if let Some(key) = &self.config.api_key {
                query.append_pair("key", key);
            }
        }
        url
    }

    /// URL with any API key removed, safe for errors and logs.
    fn redacted(url: &Url) -> String {
        let mut shown = url.clone();
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .filter(|(name, _)| name != "key")
            .map(|(name, value)| (name.into_owned(), value.into_owned()))
            .collect();
        shown.query_pairs_mut().clear().extend_pairs(pairs);
        shown.to_string()
    }

    async fn fetch_table_async(&self, url: Url) -> Result<Vec<Vec<Value>>, CountySourceError> {
        let shown = Self::redacted(&url);
        debug!("requesting {shown}");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(&err, &shown))?
            .error_for_status()
            .map_err(|err| self.convert_reqwest_error(&err, &shown))?;

        response
            .json()
            .await
            .map_err(|err| CountySourceError::Malformed {
                message: err.to_string(),
            })
    }

    /// Convert a reqwest error to a `CountySourceError`.
    fn convert_reqwest_error(&self, error: &reqwest::Error, url: &str) -> CountySourceError {
        if error.is_timeout() {
            return CountySourceError::Timeout {
                url: url.to_owned(),
                timeout_secs: self.config.timeout.as_secs(),
            };
        }

        if let Some(status) = error.status() {
            return CountySourceError::Http {
                url: url.to_owned(),
                status: status.as_u16(),
                message: status.to_string(),
            };
        }

        // reqwest's own message embeds the unredacted URL.
        CountySourceError::Network {
            url: url.to_owned(),
            message: std::error::Error::source(error)
                .map_or_else(|| "request failed".to_owned(), ToString::to_string),
        }
    }
}

impl CountySource for HttpCensusSource {
    /// Fetch every county for `state`, largest population first.
    ///
    /// `state` may be a FIPS code, abbreviation, or full name.
    fn fetch_counties(&self, state: &str) -> Result<Vec<CountyRecord>, CountySourceError> {
        let resolved = resolve_state(state).ok_or_else(|| CountySourceError::UnknownState {
            state: state.to_owned(),
        })?;
        let url = self.build_counties_url(resolved.fips);

        let future = self.fetch_table_async(url);
        let table = match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(|| handle.block_on(future))
            }
            _ => self.runtime.block_on(future),
        }?;

        decode_census_table(&table).map_err(|err| CountySourceError::Malformed {
            message: err.to_string(),
        })
    }
}
