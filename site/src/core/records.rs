//! List records rendered by the formatters.
//!
//! Records are built per render and dropped with it. Formatters accept them
//! as-is; `validate` is only consulted by the template helpers, which decide
//! what to do with an incomplete record based on the site [`Mode`].
//!
//! [`Mode`]: crate::core::settings::Mode

use crate::error::{MalformedRecord, RecordKind};

/// One entry on the contact page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Developer {
    pub name: String,
    pub url: String,
    pub description: String,
}

/// One mailing list, identified by its list name and archive forum id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailingList {
    pub name: String,
    pub archive_id: String,
    pub description: String,
}

/// One downloadable file on the release host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub filename: String,
    pub label: String,
}

impl Developer {
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            description: description.into(),
        }
    }

    pub fn validate(&self) -> Result<(), MalformedRecord> {
        require(RecordKind::Developer, [("name", &self.name), ("url", &self.url)])
    }
}

impl MailingList {
    pub fn new(
        name: impl Into<String>,
        archive_id: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            archive_id: archive_id.into(),
            description: description.into(),
        }
    }

    pub fn validate(&self) -> Result<(), MalformedRecord> {
        require(
            RecordKind::MailingList,
            [("name", &self.name), ("archive_id", &self.archive_id)],
        )
    }
}

impl Download {
    pub fn new(filename: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            label: label.into(),
        }
    }

    pub fn validate(&self) -> Result<(), MalformedRecord> {
        require(
            RecordKind::Download,
            [("filename", &self.filename), ("label", &self.label)],
        )
    }
}

/// First blank field wins, in declaration order.
fn require<const N: usize>(
    kind: RecordKind,
    fields: [(&'static str, &String); N],
) -> Result<(), MalformedRecord> {
    match fields.iter().find(|(_, value)| value.trim().is_empty()) {
        Some((field, _)) => Err(MalformedRecord {
            kind,
            field: *field,
        }),
        None => Ok(()),
    }
}
