//! Workbench page: chart header on top, column permissions on the right.

use crate::domain::a001_view::ui::properties::ColumnPermissions;
use crate::domain::a003_chart::ui::header_panel::ChartHeaderPanel;
use crate::layout::global_context::use_app_context;
use crate::layout::Shell;
use leptos::prelude::*;

#[component]
pub fn AppShell(chart_name: Option<String>, container: Option<String>) -> impl IntoView {
    let app = use_app_context();
    let org_id = Signal::derive(move || app.org_id.get());

    // Persisting charts belongs to the host page, these only report the intent.
    let on_save_chart = Callback::new(|_: ()| log::info!("save chart requested"));
    let on_go_back = Callback::new(|_: ()| log::info!("leave workbench requested"));
    let on_save_chart_to_dashboard = Callback::new(|dashboard_id: String| {
        log::info!("save chart to dashboard {dashboard_id} requested");
    });

    view! {
        <Shell
            header=move || {
                view! {
                    <ChartHeaderPanel
                        chart_name=chart_name.clone()
                        org_id=org_id
                        container=container.clone()
                        on_save_chart=on_save_chart
                        on_go_back=on_go_back
                        on_save_chart_to_dashboard=on_save_chart_to_dashboard
                    />
                }
                .into_any()
            }
            center=|| view! { <div class="workbench-canvas"></div> }.into_any()
            right=|| view! { <ColumnPermissions /> }.into_any()
        />
    }
}
