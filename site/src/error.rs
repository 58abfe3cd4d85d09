//! Error types for page registration and rendering.

use std::fmt;

use thiserror::Error;

/// Result type alias for site operations.
pub type Result<T> = std::result::Result<T, SiteError>;

/// Errors that can occur while building the registry or rendering a page.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SiteError {
    /// Requested page id is not registered.
    #[error("unknown page: {id}")]
    UnknownPage { id: String },

    /// A page with this id is already registered.
    #[error("duplicate page id: {id}")]
    DuplicatePage { id: String },

    /// Page ids are used as file names and URL segments.
    #[error("invalid page id {id:?}: expected lowercase letters, digits, '-' or '_'")]
    InvalidPageId { id: String },

    /// A list helper received a record with a required field missing.
    #[error(transparent)]
    MalformedRecord(#[from] MalformedRecord),

    /// An internal link points at a page that is not registered.
    #[error(transparent)]
    BrokenLink(#[from] BrokenLink),

    /// A configured base URL cannot be used to construct links.
    #[error("invalid {field}: {reason}")]
    InvalidBaseUrl { field: &'static str, reason: String },

    /// Template compilation or rendering failed.
    #[error("template error: {0:#}")]
    Template(#[from] minijinja::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl SiteError {
    /// Whether this error should be reported as "not found" to callers.
    pub fn is_not_found(&self) -> bool {
        matches!(self, SiteError::UnknownPage { .. })
    }
}

/// Kind of list record handed to a formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Developer,
    MailingList,
    Download,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RecordKind::Developer => "developer",
            RecordKind::MailingList => "mailing list",
            RecordKind::Download => "download",
        };
        f.write_str(name)
    }
}

/// A record with an empty required field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("malformed {kind} record: `{field}` is empty")]
pub struct MalformedRecord {
    pub kind: RecordKind,
    pub field: &'static str,
}

/// A `page_href` call naming an unregistered page.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("broken internal link to unknown page: {target}")]
pub struct BrokenLink {
    pub target: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_unknown_page_is_not_found() {
        assert!(
            SiteError::UnknownPage {
                id: "nope".to_string()
            }
            .is_not_found()
        );
        assert!(
            !SiteError::DuplicatePage {
                id: "home".to_string()
            }
            .is_not_found()
        );
    }

    #[test]
    fn malformed_record_message_names_field() {
        let err = SiteError::from(MalformedRecord {
            kind: RecordKind::MailingList,
            field: "archive_id",
        });
        assert_eq!(
            err.to_string(),
            "malformed mailing list record: `archive_id` is empty"
        );
    }
}
