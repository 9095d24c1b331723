use serde::{Deserialize, Serialize};

/// The status names seeded into every database.
///
/// The `status` table accepts any unique name; these three are the ones the
/// seeder inserts and the reports refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    New,
    #[serde(rename = "in progress")]
    InProgress,
    Completed,
}

impl StatusKind {
    /// All canonical statuses, in lifecycle order.
    pub const ALL: [Self; 3] = [Self::New, Self::InProgress, Self::Completed];

    /// Name stored in the `status` table.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::InProgress => "in progress",
            Self::Completed => "completed",
        }
    }
}

impl std::fmt::Display for StatusKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for StatusKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("'{s}' is not a canonical status"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub fullname: Option<String>,
    pub email: Option<String>,
}

/// A task of one user, with its status name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserTask {
    pub id: i64,
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: String,
}

/// A task with the full name of its owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskWithOwner {
    pub id: i64,
    pub title: Option<String>,
    pub description: Option<String>,
    pub owner: Option<String>,
}

/// A task with its owner's name and email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskWithContact {
    pub id: i64,
    pub title: Option<String>,
    pub description: Option<String>,
    pub fullname: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskTitle {
    pub id: i64,
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserContact {
    pub fullname: Option<String>,
    pub email: Option<String>,
}

/// A user paired with one of their task's details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserTaskDetail {
    pub fullname: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCount {
    pub status: String,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserTaskCount {
    pub user_id: i64,
    pub fullname: Option<String>,
    pub task_count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_kind_names() {
        assert_eq!(StatusKind::New.as_str(), "new");
        assert_eq!(StatusKind::InProgress.to_string(), "in progress");
        assert_eq!("completed".parse::<StatusKind>(), Ok(StatusKind::Completed));
        assert!("done".parse::<StatusKind>().is_err());
    }

    #[test]
    fn test_status_kind_serde_matches_table_names() {
        for kind in StatusKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }
}
