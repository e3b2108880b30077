//! Fine-grained permission rows
//!
//! One `Permission` grants one action to one subject (`who`/`who_id`) over
//! one referenced object (`location`/`ref_id`) within an organization.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Capability granted by a permission row.
///
/// Unrecognized action strings parse to `Other` and keep their text, so
/// rows written by newer clients pass through unchanged. Equality and
/// hashing go through `as_str()`: `Other("doc-edit")` is `DocumentEdit`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Action {
    SpaceView,
    SpaceManage,
    SpaceOwner,
    DocumentAdd,
    DocumentEdit,
    DocumentDelete,
    DocumentMove,
    DocumentCopy,
    DocumentTemplate,
    DocumentApprove,
    DocumentLifecycle,
    DocumentVersion,
    CategoryView,
    Other(String),
}

impl Action {
    /// Stable string form stored in the permission table
    pub fn as_str(&self) -> &str {
        match self {
            Action::SpaceView => "view",
            Action::SpaceManage => "manage",
            Action::SpaceOwner => "own",
            Action::DocumentAdd => "doc-add",
            Action::DocumentEdit => "doc-edit",
            Action::DocumentDelete => "doc-delete",
            Action::DocumentMove => "doc-move",
            Action::DocumentCopy => "doc-copy",
            Action::DocumentTemplate => "doc-template",
            Action::DocumentApprove => "doc-approve",
            Action::DocumentLifecycle => "doc-lifecycle",
            Action::DocumentVersion => "doc-version",
            Action::CategoryView => "category-view",
            Action::Other(s) => s,
        }
    }

    pub fn is_known(&self) -> bool {
        match self {
            Action::Other(s) => !matches!(Action::from(s.as_str()), Action::Other(_)),
            _ => true,
        }
    }
}

impl PartialEq for Action {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Action {}

impl std::hash::Hash for Action {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.as_str().hash(state)
    }
}

impl From<&str> for Action {
    fn from(s: &str) -> Self {
        match s {
            "view" => Action::SpaceView,
            "manage" => Action::SpaceManage,
            "own" => Action::SpaceOwner,
            "doc-add" => Action::DocumentAdd,
            "doc-edit" => Action::DocumentEdit,
            "doc-delete" => Action::DocumentDelete,
            "doc-move" => Action::DocumentMove,
            "doc-copy" => Action::DocumentCopy,
            "doc-template" => Action::DocumentTemplate,
            "doc-approve" => Action::DocumentApprove,
            "doc-lifecycle" => Action::DocumentLifecycle,
            "doc-version" => Action::DocumentVersion,
            "category-view" => Action::CategoryView,
            other => Action::Other(other.to_string()),
        }
    }
}

impl From<String> for Action {
    fn from(s: String) -> Self {
        match Action::from(s.as_str()) {
            Action::Other(_) => Action::Other(s),
            known => known,
        }
    }
}

impl From<Action> for String {
    fn from(a: Action) -> Self {
        match a {
            Action::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for Action {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Action::from(s))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of subject a row grants to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Who {
    User,
    Role,
}

impl Who {
    pub fn as_str(&self) -> &'static str {
        match self {
            Who::User => "user",
            Who::Role => "role",
        }
    }
}

/// Kind of object a row refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Space,
    Category,
    Document,
}

impl Location {
    pub fn as_str(&self) -> &'static str {
        match self {
            Location::Space => "space",
            Location::Category => "category",
            Location::Document => "document",
        }
    }
}

/// Granularity of a row: this one object, or every object of its kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Object,
    Table,
}

impl Scope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Object => "object",
            Scope::Table => "table",
        }
    }
}

macro_rules! display_as_str {
    ($($t:ty),*) => {$(
        impl fmt::Display for $t {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    )*};
}
display_as_str!(Who, Location, Scope);

/// One row of the permission table
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Permission {
    pub org_id: String,
    pub who: Who,
    pub who_id: String,
    pub action: Action,
    pub scope: Scope,
    pub location: Location,
    pub ref_id: String,
}

impl Permission {
    /// True when the row is a user grant on a document.
    ///
    /// The document codec assumes this of every row it is given and does
    /// not check it; callers that read mixed rows can filter with it.
    pub fn is_user_document(&self) -> bool {
        self.who == Who::User && self.location == Location::Document
    }
}
