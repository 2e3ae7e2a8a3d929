//! Header of the chart workbench: title, cancel / save / save to dashboard.

use crate::domain::a003_chart::store::use_workbench_store;
use crate::domain::a004_dashboard::ui::save_to_dashboard::SaveToDashboard;
use crate::shared::i18n::use_i18n_prefix;
use crate::shared::icons::icon;
use contracts::domain::a003_chart::ChartContainer;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

/// Whether the "save to dashboard" action is offered for `container`
pub fn shows_save_to_dashboard(container: Option<&str>) -> bool {
    ChartContainer::parse(container).allows_save_to_dashboard()
}

/// Hands the chosen dashboard to the host, then closes the dialog
fn confirm_save_to_dashboard(
    on_save: Option<Callback<String>>,
    visible: RwSignal<bool>,
    dashboard_id: String,
) {
    log::debug!("saving chart to dashboard {dashboard_id}");
    if let Some(handler) = on_save {
        handler.run(dashboard_id);
    }
    visible.set(false);
}

fn cancel_save_to_dashboard(visible: RwSignal<bool>) {
    visible.set(false);
}

#[component]
pub fn ChartHeaderPanel(
    #[prop(optional, into)]
    chart_name: MaybeProp<String>,
    #[prop(optional, into)]
    org_id: MaybeProp<String>,
    /// "widget" when the chart is edited from a dashboard widget
    #[prop(optional, into)]
    container: MaybeProp<String>,
    #[prop(optional)]
    on_save_chart: Option<Callback<()>>,
    #[prop(optional)]
    on_go_back: Option<Callback<()>>,
    /// Receives the target dashboard id
    #[prop(optional)]
    on_save_chart_to_dashboard: Option<Callback<String>>,
) -> impl IntoView {
    let t = use_i18n_prefix("viz.workbench.header");
    let store = use_workbench_store();
    let is_modal_visible = RwSignal::new(false);

    let show_save_to_dashboard =
        Signal::derive(move || shows_save_to_dashboard(container.get().as_deref()));

    let handle_modal_ok = Callback::new(move |dashboard_id: String| {
        confirm_save_to_dashboard(on_save_chart_to_dashboard, is_modal_visible, dashboard_id);
    });

    let handle_modal_cancel = Callback::new(move |_: ()| {
        cancel_save_to_dashboard(is_modal_visible);
    });

    view! {
        <div class="chart-header">
            <h1 class="chart-header__title">{move || chart_name.get().unwrap_or_default()}</h1>
            <div class="chart-header__actions">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| {
                        if let Some(handler) = on_go_back {
                            handler.run(());
                        }
                    }
                >
                    {move || t("cancel")}
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| {
                        if let Some(handler) = on_save_chart {
                            handler.run(());
                        }
                    }
                >
                    {icon("save")} " " {move || t("save")}
                </Button>
                <Show when=move || show_save_to_dashboard.get()>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| is_modal_visible.set(true)
                    >
                        {icon("layout")} " " {move || t("saveToDashboard")}
                    </Button>
                </Show>
                <SaveToDashboard
                    org_id=Signal::derive(move || org_id.get().unwrap_or_default())
                    title=Signal::derive(move || t("saveToDashboard"))
                    visible=is_modal_visible
                    on_ok=handle_modal_ok
                    on_cancel=handle_modal_cancel
                    backend_chart_id=store.backend_chart_id()
                />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    #[test]
    fn test_confirm_runs_callback_and_closes() {
        let owner = Owner::new();
        owner.with(|| {
            let visible = RwSignal::new(true);
            let saved = RwSignal::new(Vec::<String>::new());
            let on_save = Callback::new(move |id: String| saved.update(|ids| ids.push(id)));

            confirm_save_to_dashboard(Some(on_save), visible, "d1".to_string());

            assert_eq!(saved.get_untracked(), vec!["d1".to_string()]);
            assert!(!visible.get_untracked());
        });
    }

    #[test]
    fn test_confirm_without_callback_only_closes() {
        let owner = Owner::new();
        owner.with(|| {
            let visible = RwSignal::new(true);
            confirm_save_to_dashboard(None, visible, "d1".to_string());
            assert!(!visible.get_untracked());
        });
    }

    #[test]
    fn test_cancel_closes_dialog() {
        let owner = Owner::new();
        owner.with(|| {
            let visible = RwSignal::new(true);
            cancel_save_to_dashboard(visible);
            assert!(!visible.get_untracked());
        });
    }

    #[test]
    fn test_save_to_dashboard_visibility() {
        assert!(!shows_save_to_dashboard(Some("widget")));
        assert!(shows_save_to_dashboard(Some("dataChart")));
        assert!(shows_save_to_dashboard(None));
    }
}
