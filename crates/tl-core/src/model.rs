//! Input records supplied by the rating service.
//!
//! Field names follow the service's JSON: `teacherId`/`teacher`, `createdAt`/`created_at`.
//! Counters and the reason text are optional on the wire and default to zero and empty.

use std::{convert::Infallible, fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Identifier of a rating or teacher.
///
/// The service issues numeric keys, but string keys are accepted so that exported or
/// hand-written fixtures keep working. Numbers order before strings.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Id {
    /// Numeric identifier.
    Number(i64),
    /// Free-form identifier.
    Text(String),
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

impl FromStr for Id {
    type Err = Infallible;

    /// Parses digits as a numeric id and anything else as a text id.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.parse().map_or_else(|_| Self::Text(s.to_string()), Self::Number))
    }
}

impl From<i64> for Id {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for Id {
    fn from(n: i32) -> Self {
        Self::Number(n.into())
    }
}

impl From<&str> for Id {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// Rating category.
///
/// Labels outside `T1`..`T3` are kept as [`Tier::Unrecognized`] instead of failing the whole
/// input. Such ratings score nothing in the ranking and fall back to the lowest keyword weight.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Tier {
    /// Lowest tier.
    T1,
    /// Middle tier.
    T2,
    /// Highest tier.
    T3,
    /// Any other label, preserved verbatim.
    Unrecognized(String),
}

impl Tier {
    /// Returns the wire label for this tier.
    pub fn as_str(&self) -> &str {
        match self {
            Self::T1 => "T1",
            Self::T2 => "T2",
            Self::T3 => "T3",
            Self::Unrecognized(label) => label,
        }
    }

    /// Returns true for `T1`, `T2` and `T3`.
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl From<&str> for Tier {
    fn from(label: &str) -> Self {
        match label {
            "T1" => Self::T1,
            "T2" => Self::T2,
            "T3" => Self::T3,
            other => Self::Unrecognized(other.to_string()),
        }
    }
}

impl From<String> for Tier {
    fn from(label: String) -> Self {
        match label.as_str() {
            "T1" => Self::T1,
            "T2" => Self::T2,
            "T3" => Self::T3,
            _ => Self::Unrecognized(label),
        }
    }
}

impl From<Tier> for String {
    fn from(tier: Tier) -> Self {
        match tier {
            Tier::Unrecognized(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single rating of a teacher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    /// Rating identifier.
    pub id: Id,
    /// The rated teacher.
    #[serde(alias = "teacher")]
    pub teacher_id: Id,
    /// Rating category.
    pub tier: Tier,
    /// Free-text justification, possibly empty.
    #[serde(default)]
    pub reason: String,
    /// Positive votes from other users.
    #[serde(default)]
    pub likes: u32,
    /// Negative votes from other users.
    #[serde(default)]
    pub dislikes: u32,
    /// Creation time.
    #[serde(alias = "created_at")]
    pub created_at: DateTime<Utc>,
}

impl Rating {
    /// Creates a rating with no votes.
    pub fn new(
        id: impl Into<Id>,
        teacher_id: impl Into<Id>,
        tier: impl Into<Tier>,
        reason: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            teacher_id: teacher_id.into(),
            tier: tier.into(),
            reason: reason.into(),
            likes: 0,
            dislikes: 0,
            created_at,
        }
    }

    /// Sets the like and dislike counters.
    pub fn with_votes(mut self, likes: u32, dislikes: u32) -> Self {
        self.likes = likes;
        self.dislikes = dislikes;
        self
    }

    /// Returns true if the rating counts toward statistics.
    ///
    /// A rating is voided once it collects more dislikes than likes.
    pub fn is_valid(&self) -> bool {
        self.dislikes <= self.likes
    }
}

/// A rated teacher.
///
/// Only `id` matters for ranking. Every other field (name, department, ...) is carried through
/// untouched so that ranked output has the same shape as the input record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Teacher {
    /// Teacher identifier.
    pub id: Id,
    /// Display attributes, opaque to ranking.
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Teacher {
    /// Creates a teacher with no display attributes.
    pub fn new(id: impl Into<Id>) -> Self {
        Self {
            id: id.into(),
            attributes: Map::new(),
        }
    }

    /// Adds a display attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Returns the `name` attribute when it is a string.
    pub fn name(&self) -> Option<&str> {
        self.attributes.get("name").and_then(Value::as_str)
    }
}
