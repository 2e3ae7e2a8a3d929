pub mod global_context;

use leptos::prelude::*;

/// Workbench shell.
///
/// ```text
/// +------------------------------------------+
/// |                 header                   |
/// +------------------------------------------+
/// |          center          |     right     |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<H, C, R>(header: H, center: C, right: R) -> impl IntoView
where
    H: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
    R: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            {header()}
            <div class="app-body">
                <div class="app-main">
                    {center()}
                </div>
                <aside class="app-right">
                    {right()}
                </aside>
            </div>
        </div>
    }
}
