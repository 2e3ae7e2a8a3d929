use crate::shared::list_filter::Searchable;
use serde::{Deserialize, Serialize};

/// Organization role. Read-only on the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub org_id: String,
}

impl Searchable for Role {
    /// Case-sensitive substring match on the role name
    fn matches_filter(&self, keywords: &str) -> bool {
        self.name.contains(keywords)
    }
}
