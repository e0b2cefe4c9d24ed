//! Thread identity: which repository, which kind of work item, which number.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// A GitHub repository identifier in `owner/repo` form (Value Object)
///
/// Serialized as the `owner/repo` string and validated when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RepositoryId {
    owner: String,
    name: String,
}

impl RepositoryId {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Result<Self, DomainError> {
        let owner = owner.into();
        let name = name.into();
        if !is_valid_segment(&owner) || !is_valid_segment(&name) {
            return Err(DomainError::InvalidRepository(format!("{}/{}", owner, name)));
        }
        Ok(Self { owner, name })
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

fn is_valid_segment(segment: &str) -> bool {
    !segment.is_empty() && !segment.contains('/') && !segment.chars().any(char::is_whitespace)
}

impl std::str::FromStr for RepositoryId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.split_once('/') {
            Some((owner, name)) => Self::new(owner, name)
                .map_err(|_| DomainError::InvalidRepository(trimmed.to_string())),
            None => Err(DomainError::InvalidRepository(trimmed.to_string())),
        }
    }
}

impl std::fmt::Display for RepositoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

impl TryFrom<String> for RepositoryId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RepositoryId> for String {
    fn from(id: RepositoryId) -> Self {
        id.to_string()
    }
}

/// Kind of work item a thread belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThreadKind {
    Issue,
    #[serde(rename = "pr")]
    PullRequest,
}

impl ThreadKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThreadKind::Issue => "issue",
            ThreadKind::PullRequest => "pr",
        }
    }

    /// Only issue threads can be drafted; `pr` is accepted by the CLI but rejected here.
    pub fn ensure_supported(&self) -> Result<(), DomainError> {
        match self {
            ThreadKind::Issue => Ok(()),
            ThreadKind::PullRequest => Err(DomainError::UnsupportedCommand(self.as_str().to_string())),
        }
    }
}

impl std::fmt::Display for ThreadKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The subject of one drafting session (Entity, immutable)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ThreadRecord")]
pub struct Thread {
    repository: RepositoryId,
    kind: ThreadKind,
    number: u64,
}

/// Unvalidated wire form of [`Thread`]
#[derive(Deserialize)]
struct ThreadRecord {
    repository: RepositoryId,
    kind: ThreadKind,
    number: u64,
}

impl TryFrom<ThreadRecord> for Thread {
    type Error = DomainError;

    fn try_from(record: ThreadRecord) -> Result<Self, Self::Error> {
        Thread::new(record.repository, record.kind, record.number)
    }
}

impl Thread {
    pub fn new(repository: RepositoryId, kind: ThreadKind, number: u64) -> Result<Self, DomainError> {
        if number == 0 {
            return Err(DomainError::InvalidThreadNumber(number));
        }
        Ok(Self {
            repository,
            kind,
            number,
        })
    }

    pub fn repository(&self) -> &RepositoryId {
        &self.repository
    }

    pub fn owner(&self) -> &str {
        self.repository.owner()
    }

    pub fn repo_name(&self) -> &str {
        self.repository.name()
    }

    pub fn kind(&self) -> ThreadKind {
        self.kind
    }

    pub fn number(&self) -> u64 {
        self.number
    }
}

impl std::fmt::Display for Thread {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} #{} for {}", self.kind, self.number, self.repository)
    }
}
