//! Flat per-document permission summaries
//!
//! A `DocumentRecord` collapses every permission row one user holds on one
//! document into two toggles (edit, approve). It is built from rows read
//! out of the permission table and sent to HTTP clients; toggles coming
//! back from clients are expanded into rows again.

use serde::{Deserialize, Serialize};

use crate::permission::{Action, Location, Permission, Scope, Who};

/// Permissions one user holds on one document.
///
/// Field names on the wire are fixed: `orgId`, `documentId`, `userId`,
/// `documentRoleEdit`, `documentRoleApprove`. Missing fields read as
/// empty strings / `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DocumentRecord {
    pub org_id: String,
    pub document_id: String,
    pub user_id: String,
    pub document_role_edit: bool,
    pub document_role_approve: bool,
}

impl DocumentRecord {
    /// Record for (org, document, user) with no capabilities set
    pub fn new(
        org_id: impl Into<String>,
        document_id: impl Into<String>,
        user_id: impl Into<String>,
    ) -> Self {
        Self {
            org_id: org_id.into(),
            document_id: document_id.into(),
            user_id: user_id.into(),
            ..Self::default()
        }
    }

    pub fn has_any(&self) -> bool {
        has_any_document_permission(self)
    }

    pub fn to_permissions(&self) -> Vec<Permission> {
        encode_document_permissions(self)
    }

    // Actions compare by string form, so `Other("doc-edit")` counts as edit.
    fn apply(&mut self, action: &Action) {
        if *action == Action::DocumentEdit {
            self.document_role_edit = true;
        } else if *action == Action::DocumentApprove {
            self.document_role_approve = true;
        }
    }
}

impl From<&[Permission]> for DocumentRecord {
    fn from(perms: &[Permission]) -> Self {
        decode_document_permissions(perms)
    }
}

impl FromIterator<Permission> for DocumentRecord {
    fn from_iter<I: IntoIterator<Item = Permission>>(iter: I) -> Self {
        let mut iter = iter.into_iter();
        let mut r = match iter.next() {
            Some(p) => {
                let mut r = DocumentRecord::new(p.org_id, p.ref_id, p.who_id);
                r.apply(&p.action);
                r
            }
            None => return DocumentRecord::default(),
        };
        for p in iter {
            r.apply(&p.action);
        }
        r
    }
}

/// Flatten a user's permission rows for one document into a summary.
///
/// The identifying triple comes from the first row; every row contributes
/// its action. Rows are assumed to share one (org, document, user) and are
/// not checked. Actions other than edit/approve are ignored. An empty slice
/// gives an empty record with both toggles off.
pub fn decode_document_permissions(perms: &[Permission]) -> DocumentRecord {
    let mut r = match perms.first() {
        Some(p) => DocumentRecord::new(p.org_id.as_str(), p.ref_id.as_str(), p.who_id.as_str()),
        None => DocumentRecord::default(),
    };

    for p in perms {
        r.apply(&p.action);
    }

    r
}

/// Expand a summary into permission rows: edit first, then approve.
pub fn encode_document_permissions(r: &DocumentRecord) -> Vec<Permission> {
    let mut perms = Vec::with_capacity(2);
    if r.document_role_edit {
        perms.push(encode_document_record(r, Action::DocumentEdit));
    }
    if r.document_role_approve {
        perms.push(encode_document_record(r, Action::DocumentApprove));
    }
    perms
}

/// True if the summary grants at least one capability
pub fn has_any_document_permission(r: &DocumentRecord) -> bool {
    r.document_role_edit || r.document_role_approve
}

/// Build the row granting `action` to the record's user on its document.
/// Rows are object scoped (this document only).
pub fn encode_document_record(r: &DocumentRecord, action: Action) -> Permission {
    Permission {
        org_id: r.org_id.clone(),
        who: Who::User,
        who_id: r.user_id.clone(),
        action,
        scope: Scope::Object,
        location: Location::Document,
        ref_id: r.document_id.clone(),
    }
}
