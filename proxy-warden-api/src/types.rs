use serde::{Deserialize, Serialize};

use crate::utils::serde_helpers::{blank_as_none, flexible_bool, null_as_empty};

// ============ Resources ============

/// The three list resources exposed under `/api`.
///
/// All three share one CRUD contract; they differ only in the name of the
/// subject field and in whether items carry an allow/deny [`ListType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    /// CIDR allow/deny rules (`/api/cidrs`).
    Cidrs,
    /// Domain allow/deny rules (`/api/domains`).
    Domains,
    /// Hidden domains: suppressed from the decision log (`/api/hides`).
    Hides,
}

impl ResourceKind {
    /// All resources, in navigation order.
    pub const ALL: [Self; 3] = [Self::Cidrs, Self::Domains, Self::Hides];

    /// Path segment below `/api`.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Cidrs => "cidrs",
            Self::Domains => "domains",
            Self::Hides => "hides",
        }
    }

    /// Form/JSON field name carrying the rule subject.
    #[must_use]
    pub const fn value_field(self) -> &'static str {
        match self {
            Self::Cidrs => "cidr",
            Self::Domains | Self::Hides => "domain",
        }
    }

    /// Whether items of this resource carry an allow/deny list type.
    ///
    /// Hidden domains are suppression-only and have none.
    #[must_use]
    pub const fn has_list_type(self) -> bool {
        !matches!(self, Self::Hides)
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

/// Allow/deny classification of a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListType {
    #[default]
    Allow,
    Deny,
}

impl ListType {
    /// Wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Allow => "allow",
            Self::Deny => "deny",
        }
    }

    /// The other list type.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Allow => Self::Deny,
            Self::Deny => Self::Allow,
        }
    }
}

// ============ List items ============

/// One rule record as returned by `GET /api/{resource}`.
///
/// The subject arrives as `cidr` or `domain` depending on the resource and is
/// normalised into [`value`](Self::value). `updated_at` is kept exactly as
/// the server formatted it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    /// Server-assigned identifier, unique within its resource.
    pub idx: i64,
    /// Rule subject: a CIDR block or a domain name.
    #[serde(alias = "cidr", alias = "domain")]
    pub value: String,
    /// Allow/deny type; `None` for hidden domains.
    #[serde(default)]
    pub list_type: Option<ListType>,
    /// Free text; `null` on the wire becomes empty.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    /// Inactive rules are kept but not enforced.
    #[serde(deserialize_with = "flexible_bool")]
    pub is_active: bool,
    /// Last modification time, server formatted.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub updated_at: String,
}

/// Editable fields of a rule, submitted as a form body on create/update.
///
/// Updates resend every field (full replace).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemFields {
    /// Allow/deny type; ignored for hidden domains.
    pub list_type: Option<ListType>,
    /// Rule subject.
    pub value: String,
    /// Free text, may be empty.
    pub description: String,
}

impl ItemFields {
    /// Form pairs for `kind`, using that resource's field names.
    #[must_use]
    pub fn form_pairs(&self, kind: ResourceKind) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(3);
        if kind.has_list_type() {
            pairs.push((
                "list_type",
                self.list_type.unwrap_or_default().as_str().to_string(),
            ));
        }
        pairs.push((kind.value_field(), self.value.clone()));
        pairs.push(("description", self.description.clone()));
        pairs
    }
}

// ============ Decision log ============

/// Outcome recorded by the enforcement engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Allow,
    Deny,
    /// Any value this client does not know about.
    #[serde(other)]
    Unknown,
}

/// One entry of `GET /api/logs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Row identifier, if the server sends one.
    #[serde(default)]
    pub idx: Option<i64>,
    /// Decision time, server formatted.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub timestamp: String,
    /// Source address of the request.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub client_ip: String,
    /// Requested URL (`host:port` for CONNECT tunnels).
    #[serde(default, deserialize_with = "null_as_empty")]
    pub url: String,
    /// HTTP method, if recorded.
    #[serde(default, deserialize_with = "blank_as_none")]
    pub method: Option<String>,
    /// Allow or deny.
    pub decision: Decision,
    /// Rule score, if the engine produced one.
    #[serde(default)]
    pub score: Option<f64>,
    /// Why the decision was taken; `None` when absent, null or blank.
    #[serde(default, deserialize_with = "blank_as_none")]
    pub reason: Option<String>,
}

// ============ Envelope ============

/// `status` field of every response envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
    #[serde(other)]
    Other,
}

/// `{status, data?, message?}` wrapper shared by every endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    pub status: ResponseStatus,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub message: Option<String>,
}

/// Successful reply to a mutating call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MutationReply {
    /// Confirmation text from the server (e.g. "CIDR added").
    pub message: Option<String>,
}
