//! Search helpers for lists: debounced keyword state and the search input.

use crate::shared::debounce::Debouncer;
use crate::shared::icons::icon;
use contracts::shared::list_filter::{filter_list, Searchable};
use leptos::prelude::*;

/// Keyword state behind a debounced search box
pub struct DebouncedSearch<T: Send + Sync + 'static> {
    /// Items matching the settled keywords
    pub filtered: Memo<Vec<T>>,
    /// Feed raw input here; applied after the wait elapses
    pub on_input: Callback<String>,
}

impl<T: Send + Sync + 'static> Clone for DebouncedSearch<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for DebouncedSearch<T> {}

/// Filters `data` by keywords typed into a search box.
///
/// Keystrokes are coalesced: only the last value within `wait_ms` is applied.
pub fn use_debounced_search<T>(data: Signal<Vec<T>>, wait_ms: u32) -> DebouncedSearch<T>
where
    T: Searchable + Clone + PartialEq + Send + Sync + 'static,
{
    let (keywords, set_keywords) = signal(String::new());
    let debouncer = Debouncer::new(wait_ms);

    let filtered = Memo::new(move |_| {
        let keywords = keywords.get();
        data.with(|items| filter_list(items, &keywords))
    });

    let on_input = Callback::new(move |value: String| {
        debouncer.schedule(move || set_keywords.set(value));
    });

    DebouncedSearch { filtered, on_input }
}

/// Borderless search box with a leading icon and a clear button.
///
/// Every keystroke goes to `on_input`; debouncing is up to the receiver.
#[component]
pub fn SearchInput(
    #[prop(into)]
    on_input: Callback<String>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
) -> impl IntoView {
    let (value, set_value) = signal(String::new());

    let handle_input = move |ev: leptos::ev::Event| {
        let text = event_target_value(&ev);
        set_value.set(text.clone());
        on_input.run(text);
    };

    let clear = move |_: leptos::ev::MouseEvent| {
        set_value.set(String::new());
        on_input.run(String::new());
    };

    view! {
        <div class="search-input">
            <span class="search-input__icon">{icon("search")}</span>
            <input
                type="text"
                class="search-input__field"
                placeholder=move || placeholder.get().unwrap_or_default()
                prop:value=move || value.get()
                on:input=handle_input
            />
            <Show when=move || !value.get().is_empty()>
                <button class="search-input__clear" title="Clear" on:click=clear>
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}
