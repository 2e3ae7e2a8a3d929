use serde::{Deserialize, Serialize};

/// Chart as last persisted to the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackendChart {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub org_id: String,
    #[serde(default)]
    pub view_id: Option<String>,
}

/// Host of the chart editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChartContainer {
    /// Stand-alone chart editor
    #[default]
    DataChart,
    /// Editor opened for a widget inside a dashboard
    Widget,
}

impl ChartContainer {
    /// Parses the container string passed by the host; anything unknown is a stand-alone chart.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("widget") => ChartContainer::Widget,
            _ => ChartContainer::DataChart,
        }
    }

    /// A chart edited from inside a dashboard widget cannot be saved into another dashboard.
    pub fn allows_save_to_dashboard(&self) -> bool {
        !matches!(self, ChartContainer::Widget)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_container() {
        assert_eq!(ChartContainer::parse(Some("widget")), ChartContainer::Widget);
        assert_eq!(ChartContainer::parse(Some("dataChart")), ChartContainer::DataChart);
        assert_eq!(ChartContainer::parse(Some("Widget")), ChartContainer::DataChart);
        assert_eq!(ChartContainer::parse(None), ChartContainer::DataChart);
    }

    #[test]
    fn test_save_to_dashboard_hidden_for_widgets() {
        assert!(!ChartContainer::Widget.allows_save_to_dashboard());
        assert!(ChartContainer::DataChart.allows_save_to_dashboard());
    }
}
