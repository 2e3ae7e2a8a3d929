//! Initial state handed over by the host page.
//!
//! The host embeds a JSON document in
//! `<script id="workbench-state" type="application/json">`.

use contracts::domain::a001_view::EditingView;
use contracts::domain::a002_role::Role;
use contracts::domain::a003_chart::BackendChart;
use contracts::domain::a004_dashboard::DashboardSummary;
use serde::Deserialize;
use web_sys::window;

pub const BOOTSTRAP_ELEMENT_ID: &str = "workbench-state";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BootstrapState {
    pub org_id: Option<String>,
    pub chart_name: Option<String>,
    pub container: Option<String>,
    pub roles: Vec<Role>,
    pub view: Option<EditingView>,
    pub backend_chart: Option<BackendChart>,
    pub dashboards: Vec<DashboardSummary>,
}

impl BootstrapState {
    pub fn from_json(raw: &str) -> Result<Self, String> {
        serde_json::from_str(raw).map_err(|e| format!("invalid bootstrap state: {e}"))
    }

    /// Reads the embedded document; a missing or broken one yields an empty state
    pub fn read() -> Self {
        let raw = window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(BOOTSTRAP_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match raw {
            Some(raw) => Self::from_json(&raw).unwrap_or_else(|e| {
                log::error!("{e}");
                Self::default()
            }),
            None => {
                log::warn!("#{BOOTSTRAP_ELEMENT_ID} not found, starting empty");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_view::ViewStatus;

    #[test]
    fn test_parse_full_state() {
        let raw = r#"{
            "orgId": "o1",
            "chartName": "Revenue",
            "container": "widget",
            "roles": [{ "id": "r1", "name": "Admin" }],
            "view": {
                "id": "v1",
                "name": "Orders",
                "status": 0,
                "stage": "fresh",
                "model": {
                    "b": { "name": "b", "type": "STRING" },
                    "a": { "name": "a", "type": "NUMERIC" }
                },
                "columnPermissions": [{
                    "id": "p1", "viewId": "v1", "subjectId": "r1",
                    "subjectType": "ROLE", "columnPermission": []
                }]
            },
            "backendChart": { "id": "c1", "name": "Revenue" },
            "dashboards": [{ "id": "d1", "name": "Sales", "orgId": "o1" }]
        }"#;

        let state = BootstrapState::from_json(raw).unwrap();
        let view = state.view.unwrap();
        assert_eq!(state.org_id.as_deref(), Some("o1"));
        assert_eq!(state.roles[0].name, "Admin");
        assert_eq!(view.status, ViewStatus::Archived);
        assert_eq!(view.model.column_names(), vec!["b", "a"]);
        assert_eq!(view.column_permissions[0].subject_id, "r1");
        assert_eq!(state.backend_chart.unwrap().id, "c1");
        assert_eq!(state.dashboards.len(), 1);
    }

    #[test]
    fn test_empty_document_is_valid() {
        let state = BootstrapState::from_json("{}").unwrap();
        assert!(state.roles.is_empty());
        assert!(state.view.is_none());
    }
}
