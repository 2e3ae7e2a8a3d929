use super::traits::AggregatePickerResult;
use leptos::prelude::*;

/// Item to confirm for the current selection, if it is still in the list
fn selected_item<T>(items: &[T], selected_id: Option<&str>) -> Option<T>
where
    T: AggregatePickerResult + Clone,
{
    let id = selected_id?;
    items.iter().find(|i| i.id() == id).cloned()
}

/// List picker with a single selection.
///
/// - click selects a row, double click confirms it
/// - confirm stays disabled until something is selected
#[component]
pub fn GenericAggregatePicker<T>(
    /// Items to choose from
    #[prop(into)]
    items: Signal<Vec<T>>,
    /// Called with the chosen item
    on_confirm: impl Fn(T) + 'static + Clone + Send + Sync,
    on_cancel: impl Fn(()) + 'static + Clone + Send + Sync,
    #[prop(into)]
    confirm_label: Signal<String>,
    #[prop(into)]
    cancel_label: Signal<String>,
    /// Shown when `items` is empty
    #[prop(into)]
    empty_label: Signal<String>,
) -> impl IntoView
where
    T: AggregatePickerResult + Clone + Send + Sync + 'static,
{
    let (selected_id, set_selected_id) = signal::<Option<String>>(None);

    let handle_confirm = {
        let on_confirm = on_confirm.clone();
        move |_| {
            let chosen = selected_id.with_untracked(|id| {
                items.with_untracked(|items| selected_item(items, id.as_deref()))
            });
            if let Some(item) = chosen {
                on_confirm(item);
            }
        }
    };

    let handle_dblclick = move |item: T| on_confirm(item);

    view! {
        <div class="picker-container">
            <div class="picker-content">
                {move || {
                    let handle_dblclick = handle_dblclick.clone();
                    items.with(|items_vec| {
                        if items_vec.is_empty() {
                            view! {
                                <div class="picker-empty">{move || empty_label.get()}</div>
                            }.into_any()
                        } else {
                            view! {
                                <ul class="picker-list">
                                    {items_vec.iter().map(|item| {
                                        let item_id = item.id();
                                        let id_for_selected = item_id.clone();
                                        let item_for_dblclick = item.clone();
                                        let handle_dblclick = handle_dblclick.clone();

                                        view! {
                                            <li
                                                class="picker-row"
                                                class:selected=move || selected_id.get().as_ref() == Some(&id_for_selected)
                                                on:click=move |_| set_selected_id.set(Some(item_id.clone()))
                                                on:dblclick=move |_| handle_dblclick(item_for_dblclick.clone())
                                            >
                                                <div class="picker-row__name">{item.display_name()}</div>
                                            </li>
                                        }
                                    }).collect_view()}
                                </ul>
                            }.into_any()
                        }
                    })
                }}
            </div>

            <div class="picker-actions">
                <button
                    class="button button--primary"
                    on:click=handle_confirm
                    disabled=move || selected_id.get().is_none()
                >
                    {move || confirm_label.get()}
                </button>
                <button
                    class="button button--secondary"
                    on:click=move |_| on_cancel(())
                >
                    {move || cancel_label.get()}
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Item(&'static str);

    impl AggregatePickerResult for Item {
        fn id(&self) -> String {
            self.0.to_string()
        }

        fn display_name(&self) -> String {
            self.0.to_uppercase()
        }
    }

    #[test]
    fn test_confirm_needs_a_selection() {
        let items = vec![Item("d1"), Item("d2")];
        assert_eq!(selected_item(&items, None), None);
        assert_eq!(selected_item(&items, Some("d2")), Some(Item("d2")));
    }

    #[test]
    fn test_selection_gone_from_list_is_not_confirmed() {
        let items = vec![Item("d1")];
        assert_eq!(selected_item(&items, Some("d9")), None);
    }
}
