use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Runs `on_close` on the next tick.
///
/// The overlay may be removed while its own click is still being dispatched;
/// deferring keeps Leptos from calling an already dropped handler.
fn close_deferred(on_close: Callback<()>) {
    spawn_local(async move {
        TimeoutFuture::new(0).await;
        on_close.run(());
    });
}

/// Dialog surface with a title bar, rendered over a dimmed overlay.
///
/// Escape, the close button and a click on the overlay all call `on_close`.
#[component]
pub fn Modal(
    /// Title of the modal
    #[prop(into)]
    title: Signal<String>,
    /// Callback when modal should close
    on_close: Callback<()>,
    /// Modal content
    children: Children,
) -> impl IntoView {
    let keydown = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            close_deferred(on_close);
        }
    });
    on_cleanup(move || keydown.remove());

    let handle_overlay_click = move |ev: ev::MouseEvent| {
        match (ev.target(), ev.current_target()) {
            (Some(target), Some(current)) if target == current => close_deferred(on_close),
            _ => {}
        }
    };

    view! {
        <div class="modal-overlay" on:click=handle_overlay_click>
            <div class="modal">
                <div class="modal-header">
                    <h2 class="modal-title">{move || title.get()}</h2>
                    <div class="modal-header-actions">
                        <button
                            class="button button--icon modal__close"
                            on:click=move |_| close_deferred(on_close)
                        >
                            {icon("x")}
                        </button>
                    </div>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
            </div>
        </div>
    }
}
