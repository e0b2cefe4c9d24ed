//! GitHub adapters: REST thread fetching and `gh`-based repository detection.

mod fetcher;
mod repo_detect;

pub use fetcher::{DEFAULT_API_BASE_URL, GitHubContentFetcher, GitHubSettings};
pub use repo_detect::GhRepositoryDetector;
