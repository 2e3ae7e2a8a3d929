use leptos::prelude::*;

/// New checked value to report, `None` while the checkbox is disabled
fn accepted_change(disabled: bool, checked: bool) -> Option<bool> {
    (!disabled).then_some(checked)
}

/// Checkbox with label, supporting the indeterminate (partially checked) state
#[component]
pub fn Checkbox(
    /// ID of the input, the label points at it
    #[prop(into)]
    id: String,
    /// Label text
    #[prop(into)]
    label: Signal<String>,
    /// Checked state
    #[prop(into)]
    checked: Signal<bool>,
    /// Rendered as "-" when some, but not all, children are checked
    #[prop(optional, into)]
    indeterminate: MaybeProp<bool>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<bool>>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
) -> impl IntoView {
    let is_disabled = move || disabled.get().unwrap_or(false);
    let wrapper_class = move || {
        if is_disabled() {
            "form__checkbox-wrapper form__checkbox-wrapper--disabled"
        } else {
            "form__checkbox-wrapper"
        }
    };

    view! {
        <div class=wrapper_class>
            <input
                id=id.clone()
                type="checkbox"
                class="form__checkbox"
                prop:checked=move || checked.get()
                prop:indeterminate=move || indeterminate.get().unwrap_or(false)
                disabled=is_disabled
                on:change=move |ev| {
                    let Some(value) = accepted_change(is_disabled(), event_target_checked(&ev)) else {
                        return;
                    };
                    if let Some(handler) = on_change {
                        handler.run(value);
                    }
                }
            />
            <label class="form__checkbox-label" for=id>
                {move || label.get()}
            </label>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_checkbox_reports_nothing() {
        assert_eq!(accepted_change(true, true), None);
        assert_eq!(accepted_change(false, true), Some(true));
        assert_eq!(accepted_change(false, false), Some(false));
    }
}
