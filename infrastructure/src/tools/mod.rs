//! Tool implementations offered to the model
//!
//! - [`ThreadToolExecutor`]: executes `get_github_issue_content`
//! - [`JsonSchemaToolConverter`]: renders tool definitions as function schemas

mod executor;
mod schema;

pub use executor::{GET_GITHUB_ISSUE_CONTENT, ThreadToolExecutor, issue_content_definition};
pub use schema::JsonSchemaToolConverter;
