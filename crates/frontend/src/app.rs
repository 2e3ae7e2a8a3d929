use crate::app_shell::AppShell;
use crate::domain::a001_view::store::ViewEditingStore;
use crate::domain::a003_chart::store::WorkbenchStore;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::bootstrap::BootstrapState;
use crate::shared::config::UiConfig;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = UiConfig::load();
    let state = BootstrapState::read();

    let global = AppGlobalContext::new(config.locale);
    if let Some(org_id) = state.org_id.clone() {
        global.set_organization(org_id, state.roles.clone());
    }

    let workbench = WorkbenchStore::new();
    if let Some(chart) = state.backend_chart.clone() {
        workbench.set_backend_chart(chart);
    }
    workbench.set_dashboards(state.dashboards.clone());

    let view_store = ViewEditingStore::new(state.view.clone().unwrap_or_default());

    provide_context(config);
    provide_context(global);
    provide_context(workbench);
    provide_context(view_store);

    view! {
        <AppShell chart_name=state.chart_name container=state.container />
    }
}
