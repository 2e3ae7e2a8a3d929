use contracts::domain::a003_chart::BackendChart;
use contracts::domain::a004_dashboard::{dashboards_for_org, DashboardSummary};
use leptos::prelude::*;

/// State of the chart workbench page
#[derive(Clone, Copy)]
pub struct WorkbenchStore {
    /// Chart as last persisted to the backend, `None` until the first save
    pub backend_chart: RwSignal<Option<BackendChart>>,
    /// Dashboards the chart can be saved into
    pub dashboards: RwSignal<Vec<DashboardSummary>>,
}

impl WorkbenchStore {
    pub fn new() -> Self {
        Self {
            backend_chart: RwSignal::new(None),
            dashboards: RwSignal::new(vec![]),
        }
    }

    pub fn set_backend_chart(&self, chart: BackendChart) {
        log::debug!("backend chart {} ({})", chart.id, chart.name);
        self.backend_chart.set(Some(chart));
    }

    pub fn set_dashboards(&self, dashboards: Vec<DashboardSummary>) {
        self.dashboards.set(dashboards);
    }

    pub fn backend_chart_id(&self) -> Signal<Option<String>> {
        let chart = self.backend_chart;
        Signal::derive(move || chart.with(|c| c.as_ref().map(|c| c.id.clone())))
    }

    pub fn dashboards_for_org(&self, org_id: Signal<String>) -> Signal<Vec<DashboardSummary>> {
        let dashboards = self.dashboards;
        Signal::derive(move || dashboards.with(|all| dashboards_for_org(all, &org_id.get())))
    }
}

impl Default for WorkbenchStore {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_workbench_store() -> WorkbenchStore {
    use_context::<WorkbenchStore>().expect("WorkbenchStore not provided in context")
}
