use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Click-triggered popover.
///
/// Clicking the trigger toggles `open`; a click anywhere outside the content
/// panel closes it. Clicks inside the panel do not reach the trigger.
#[component]
pub fn Popup(
    /// Open flag, owned by the caller so it can close the popup itself
    open: RwSignal<bool>,
    /// Element that toggles the popup
    #[prop(into)]
    trigger: ViewFn,
    /// Panel content, rendered only while open
    children: ChildrenFn,
) -> impl IntoView {
    let toggle = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        open.update(|v| *v = !*v);
    };

    // the backdrop is removed by its own click, so close on the next tick
    let close = move |_: ev::MouseEvent| {
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            open.set(false);
        });
    };

    let content = StoredValue::new(children);

    view! {
        <div class="popup">
            <div class="popup__trigger" on:click=toggle>
                {trigger.run()}
            </div>
            <Show when=move || open.get()>
                <div class="popup__backdrop" on:click=close></div>
                <div
                    class="popup__content"
                    on:click=|ev: ev::MouseEvent| ev.stop_propagation()
                >
                    {content.with_value(|children| children())}
                </div>
            </Show>
        </div>
    }
}
