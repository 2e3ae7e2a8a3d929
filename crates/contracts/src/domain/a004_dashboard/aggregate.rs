use serde::{Deserialize, Serialize};

/// Dashboard entry offered as a save target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub id: String,
    pub name: String,
    pub org_id: String,
    #[serde(default)]
    pub parent_id: Option<String>,
}

/// Dashboards belonging to `org_id`, sorted by name
pub fn dashboards_for_org(dashboards: &[DashboardSummary], org_id: &str) -> Vec<DashboardSummary> {
    let mut found: Vec<DashboardSummary> = dashboards
        .iter()
        .filter(|d| d.org_id == org_id)
        .cloned()
        .collect();
    found.sort_by(|a, b| a.name.cmp(&b.name));
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dashboard(id: &str, name: &str, org: &str) -> DashboardSummary {
        DashboardSummary {
            id: id.into(),
            name: name.into(),
            org_id: org.into(),
            parent_id: None,
        }
    }

    #[test]
    fn test_dashboards_for_org() {
        let all = vec![
            dashboard("d1", "Sales", "o1"),
            dashboard("d2", "Finance", "o1"),
            dashboard("d3", "Ops", "o2"),
        ];

        let found = dashboards_for_org(&all, "o1");
        let ids: Vec<&str> = found.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["d2", "d1"]);
        assert!(dashboards_for_org(&all, "o3").is_empty());
    }
}
