//! Checkable tree.
//!
//! Checked state is kept as a list of keys. A parent is reported as checked
//! only when all of its leaves are; toggling a parent toggles all leaves.

use super::ui::Checkbox;
use leptos::prelude::*;
use std::collections::HashSet;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeItem {
    pub key: String,
    pub title: String,
    pub children: Vec<TreeItem>,
}

impl TreeItem {
    pub fn leaf(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            children: Vec::new(),
        }
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a str>) {
        if self.children.is_empty() {
            out.push(&self.key);
        } else {
            for child in &self.children {
                child.collect_leaves(out);
            }
        }
    }

    pub fn leaf_keys(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckState {
    Checked,
    Unchecked,
    Indeterminate,
}

fn find<'a>(items: &'a [TreeItem], key: &str) -> Option<&'a TreeItem> {
    items.iter().find_map(|item| {
        if item.key == key {
            Some(item)
        } else {
            find(&item.children, key)
        }
    })
}

/// Leaf keys of `items` that are present in `checked`
fn checked_leaves<'a>(items: &'a [TreeItem], checked: &[String]) -> HashSet<&'a str> {
    let wanted: HashSet<&str> = checked.iter().map(String::as_str).collect();
    let mut leaves = HashSet::new();
    for item in items {
        // a checked parent implies all of its leaves
        let covered = wanted.contains(item.key.as_str());
        for leaf in item.leaf_keys() {
            if covered || wanted.contains(leaf) {
                leaves.insert(leaf);
            }
        }
    }
    leaves
}

pub fn check_state(item: &TreeItem, leaves: &HashSet<&str>) -> CheckState {
    let keys = item.leaf_keys();
    let hits = keys.iter().filter(|k| leaves.contains(*k)).count();
    if hits == 0 {
        CheckState::Unchecked
    } else if hits == keys.len() {
        CheckState::Checked
    } else {
        CheckState::Indeterminate
    }
}

fn collect_checked(items: &[TreeItem], leaves: &HashSet<&str>, out: &mut Vec<String>) {
    for item in items {
        if check_state(item, leaves) == CheckState::Checked {
            out.push(item.key.clone());
        }
        collect_checked(&item.children, leaves, out);
    }
}

/// New checked key list after setting `key` to `on`. Keys come out in tree order.
pub fn apply_check(items: &[TreeItem], checked: &[String], key: &str, on: bool) -> Vec<String> {
    let mut leaves = checked_leaves(items, checked);
    if let Some(node) = find(items, key) {
        for leaf in node.leaf_keys() {
            if on {
                leaves.insert(leaf);
            } else {
                leaves.remove(leaf);
            }
        }
    }

    let mut out = Vec::new();
    collect_checked(items, &leaves, &mut out);
    out
}

/// Checked key list after a click on `key`, or `None` while the tree is disabled
pub fn next_checked(
    items: &[TreeItem],
    checked: &[String],
    key: &str,
    on: bool,
    disabled: bool,
) -> Option<Vec<String>> {
    (!disabled).then(|| apply_check(items, checked, key, on))
}

/// DOM id of a node's checkbox; `scope` keeps ids unique across trees on one page
pub fn node_dom_id(scope: &str, key: &str) -> String {
    let sanitize = |s: &str| s.replace(char::is_whitespace, "_");
    format!("check-tree-{}-{}", sanitize(scope), sanitize(key))
}

#[component]
pub fn CheckTree(
    #[prop(into)]
    items: Signal<Vec<TreeItem>>,
    #[prop(into)]
    checked_keys: Signal<Vec<String>>,
    /// Receives the full checked key list after each change
    on_check: Callback<Vec<String>>,
    /// Rendered but not interactive
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Prefix of the checkbox ids, unique per tree
    #[prop(into)]
    scope: String,
) -> impl IntoView {
    let is_disabled = Signal::derive(move || disabled.get().unwrap_or(false));
    let scope = StoredValue::new(scope);

    let toggle = move |key: String, on: bool| {
        let next = items.with_untracked(|items| {
            checked_keys.with_untracked(|checked| {
                next_checked(items, checked, &key, on, is_disabled.get_untracked())
            })
        });
        if let Some(next) = next {
            on_check.run(next);
        }
    };

    view! {
        <ul class="check-tree" class:check-tree--disabled=move || is_disabled.get()>
            {move || {
                items.with(|items| {
                    items
                        .iter()
                        .map(|item| {
                            render_node(item.clone(), scope, checked_keys, is_disabled, toggle)
                        })
                        .collect_view()
                })
            }}
        </ul>
    }
}

fn render_node<F>(
    item: TreeItem,
    scope: StoredValue<String>,
    checked_keys: Signal<Vec<String>>,
    disabled: Signal<bool>,
    toggle: F,
) -> AnyView
where
    F: Fn(String, bool) + Copy + Send + Sync + 'static,
{
    let node = item.clone();
    let state = Memo::new(move |_| {
        checked_keys.with(|checked| {
            let leaves = checked_leaves(std::slice::from_ref(&node), checked);
            check_state(&node, &leaves)
        })
    });

    let key = item.key.clone();
    let children = item
        .children
        .iter()
        .map(|child| render_node(child.clone(), scope, checked_keys, disabled, toggle))
        .collect::<Vec<_>>();
    let has_children = !children.is_empty();

    view! {
        <li class="check-tree__node">
            <Checkbox
                id=scope.with_value(|scope| node_dom_id(scope, &item.key))
                label=item.title.clone()
                checked=Signal::derive(move || state.get() == CheckState::Checked)
                indeterminate=Signal::derive(move || state.get() == CheckState::Indeterminate)
                disabled=disabled
                on_change=Callback::new(move |on: bool| toggle(key.clone(), on))
            />
            {has_children.then(|| view! {
                <ul class="check-tree__children">{children}</ul>
            })}
        </li>
    }
    .into_any()
}
