//! JSON dataset records exchanged with the connectivity engine.
//!
//! A dataset directory holds two files: `members.json` (node records with a
//! unique non-negative id and an optional display name) and `links.json`
//! (undirected weighted link records; a missing cost defaults to 1).

use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use relink_core::{Graph, Link};

/// File name for member records inside a dataset directory.
pub const MEMBERS_FILE: &str = "members.json";
/// File name for link records inside a dataset directory.
pub const LINKS_FILE: &str = "links.json";

const fn default_cost() -> u64 {
    1
}

/// A node record: unique id plus optional display name.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct MemberRecord {
    /// Unique non-negative member id.
    pub id: usize,
    /// Optional display name for rendering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// An undirected link record between two member ids.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct LinkRecord {
    /// First endpoint.
    pub source: usize,
    /// Second endpoint.
    pub target: usize,
    /// Link cost; omitted costs default to 1.
    #[serde(default = "default_cost")]
    pub cost: u64,
}

impl From<LinkRecord> for Link {
    fn from(record: LinkRecord) -> Self {
        Self::new(record.source, record.target, record.cost)
    }
}

/// Errors surfaced while loading or storing dataset files.
#[derive(Debug, Error)]
pub enum RecordsError {
    /// File I/O failed.
    #[error("failed to access `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// A dataset file did not parse as the expected JSON shape.
    #[error("failed to parse `{path}`: {source}")]
    Parse {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying serde error.
        #[source]
        source: serde_json::Error,
    },
}

/// A dataset loaded from disk.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    /// Member records in file order.
    pub members: Vec<MemberRecord>,
    /// Link records in file order.
    pub links: Vec<LinkRecord>,
}

impl Dataset {
    /// Loads `members.json` and `links.json` from `dir`.
    ///
    /// # Errors
    /// Returns [`RecordsError`] when either file is missing, unreadable, or
    /// malformed.
    pub fn load(dir: &Path) -> Result<Self, RecordsError> {
        let members = read_json(&dir.join(MEMBERS_FILE))?;
        let links = read_json(&dir.join(LINKS_FILE))?;
        Ok(Self { members, links })
    }

    /// Writes the dataset into `dir` as pretty-printed JSON.
    ///
    /// # Errors
    /// Returns [`RecordsError`] when either file cannot be created or
    /// serialised.
    pub fn store(&self, dir: &Path) -> Result<(), RecordsError> {
        write_json(&dir.join(MEMBERS_FILE), &self.members)?;
        write_json(&dir.join(LINKS_FILE), &self.links)
    }

    /// Builds the engine's [`Graph`], inferring the node count across
    /// member ids and link endpoints.
    #[must_use]
    pub fn to_graph(&self) -> Graph {
        let links: Vec<Link> = self.links.iter().copied().map(Link::from).collect();
        Graph::from_observed(self.members.iter().map(|member| member.id), links)
    }

    /// Returns the display label for a member id: `name (id)` when a name
    /// is on record, the bare id otherwise.
    #[must_use]
    pub fn label(&self, id: usize) -> String {
        self.members
            .iter()
            .find(|member| member.id == id)
            .and_then(|member| member.name.as_deref())
            .map_or_else(|| format!("{id}"), |name| format!("{name} ({id})"))
    }
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T, RecordsError> {
    let file = File::open(path).map_err(|source| RecordsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| RecordsError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), RecordsError> {
    let file = File::create(path).map_err(|source| RecordsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::to_writer_pretty(BufWriter::new(file), value).map_err(|source| {
        RecordsError::Parse {
            path: path.to_path_buf(),
            source,
        }
    })
}
