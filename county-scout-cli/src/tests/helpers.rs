//! Test helpers for county fixtures, workspaces, and stub sources.

use std::cell::{Cell, RefCell};

use camino::{Utf8Path, Utf8PathBuf};
use county_scout_core::test_support::{CountyBuilder, MemorySource};
use county_scout_core::{CountyRecord, CountySource};
use tempfile::TempDir;

use crate::CliError;
use crate::input::CountySourceBuilder;
use crate::options::CensusOptions;

/// Temporary directory with a UTF-8 root path.
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root =
            Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    /// Write `counties` as a JSON array of county objects.
    pub(super) fn write_counties(&self, name: &str, counties: &[CountyRecord]) -> Utf8PathBuf {
        let json = serde_json::to_string(counties).expect("serialise counties");
        self.write(name, &json)
    }

    pub(super) fn write(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.path(name);
        write_utf8(&path, contents.as_bytes());
        path
    }
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write fixture file");
}

/// Five counties spanning modest incomes, priced at three times income.
pub(super) fn modest_counties(prefix: &str) -> Vec<CountyRecord> {
    [40_000, 45_000, 50_000, 60_000, 70_000]
        .into_iter()
        .map(|income| {
            CountyBuilder::new(format!("{prefix} {income} County"))
                .population(80_000)
                .income(income)
                .home_value(income * 3)
                .build()
        })
        .collect()
}

/// In-memory stand-in for the census API that counts how often it is built.
#[derive(Default)]
pub(super) struct StubSourceBuilder {
    states: RefCell<Vec<(String, Vec<CountyRecord>)>>,
    builds: Cell<usize>,
    fail: bool,
}

impl StubSourceBuilder {
    pub(super) fn with_state(self, state: &str, counties: Vec<CountyRecord>) -> Self {
        self.states.borrow_mut().push((state.to_owned(), counties));
        self
    }

    pub(super) fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub(super) fn builds(&self) -> usize {
        self.builds.get()
    }
}

impl CountySourceBuilder for StubSourceBuilder {
    fn build(&self, census: &CensusOptions) -> Result<Box<dyn CountySource>, CliError> {
        self.builds.set(self.builds.get() + 1);
        if self.fail {
            return Err(CliError::BuildCensusSource {
                base_url: census.base_url.clone(),
                source: county_scout_data::HttpCensusSource::new("not a url")
                    .expect_err("invalid URL should fail"),
            });
        }
        let source = self
            .states
            .borrow()
            .iter()
            .fold(MemorySource::new(), |source, (state, counties)| {
                source.with_state(state, counties.clone())
            });
        Ok(Box::new(source))
    }
}
