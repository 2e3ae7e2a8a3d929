//! Static label tables.
//!
//! Keys are dotted paths (`view.columnPermission.title`); components bind a
//! prefix once with [`use_i18n_prefix`] and look up the last segment.

use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;
use serde::Deserialize;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Zh,
}

fn lookup(locale: Locale, key: &str) -> Option<&'static str> {
    let label = match (locale, key) {
        (Locale::En, "viz.workbench.header.cancel") => "Cancel",
        (Locale::En, "viz.workbench.header.save") => "Save",
        (Locale::En, "viz.workbench.header.saveToDashboard") => "Save to dashboard",
        (Locale::Zh, "viz.workbench.header.cancel") => "取消",
        (Locale::Zh, "viz.workbench.header.save") => "保存",
        (Locale::Zh, "viz.workbench.header.saveToDashboard") => "保存到仪表板",

        (Locale::En, "viz.saveToDashboard.confirm") => "Save",
        (Locale::En, "viz.saveToDashboard.cancel") => "Cancel",
        (Locale::En, "viz.saveToDashboard.empty") => "No dashboards available",
        (Locale::En, "viz.saveToDashboard.unsaved") => "This chart has not been saved yet",
        (Locale::Zh, "viz.saveToDashboard.confirm") => "保存",
        (Locale::Zh, "viz.saveToDashboard.cancel") => "取消",
        (Locale::Zh, "viz.saveToDashboard.empty") => "暂无仪表板",
        (Locale::Zh, "viz.saveToDashboard.unsaved") => "图表尚未保存",

        (Locale::En, "view.columnPermission.title") => "Column permissions",
        (Locale::En, "view.columnPermission.search") => "Search role name",
        (Locale::En, "view.columnPermission.all") => "All",
        (Locale::En, "view.columnPermission.none") => "None",
        (Locale::En, "view.columnPermission.partial") => "Partial",
        (Locale::Zh, "view.columnPermission.title") => "列权限",
        (Locale::Zh, "view.columnPermission.search") => "搜索角色名称",
        (Locale::Zh, "view.columnPermission.all") => "全部",
        (Locale::Zh, "view.columnPermission.none") => "不可见",
        (Locale::Zh, "view.columnPermission.partial") => "部分",
        _ => return None,
    };
    Some(label)
}

/// Label for `key`, or the key itself when no translation exists
pub fn translate(locale: Locale, key: &str) -> String {
    lookup(locale, key)
        .map(str::to_string)
        .unwrap_or_else(|| key.to_string())
}

/// Binds `prefix` to the locale held by [`AppGlobalContext`].
///
/// The returned closure tracks the locale signal, so it can be used inside
/// reactive views.
pub fn use_i18n_prefix(prefix: &'static str) -> impl Fn(&str) -> String + Copy + Send + Sync + 'static {
    let locale = use_context::<AppGlobalContext>()
        .map(|ctx| ctx.locale)
        .unwrap_or_else(|| RwSignal::new(Locale::default()));

    move |key: &str| translate(locale.get(), &format!("{prefix}.{key}"))
}
