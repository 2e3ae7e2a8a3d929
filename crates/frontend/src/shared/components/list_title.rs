use leptos::prelude::*;

/// Title row of a side panel list
#[component]
pub fn ListTitle(
    #[prop(into)]
    title: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="list-title">
            <h3 class="list-title__title">{move || title.get()}</h3>
        </div>
    }
}
