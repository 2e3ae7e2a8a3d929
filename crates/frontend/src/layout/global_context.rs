use crate::shared::i18n::Locale;
use contracts::domain::a002_role::Role;
use leptos::prelude::*;

/// App-wide state shared by every page
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    /// Organization the user is working in
    pub org_id: RwSignal<Option<String>>,
    /// Roles of the current organization
    pub roles: RwSignal<Vec<Role>>,
    pub locale: RwSignal<Locale>,
}

impl AppGlobalContext {
    pub fn new(locale: Locale) -> Self {
        Self {
            org_id: RwSignal::new(None),
            roles: RwSignal::new(vec![]),
            locale: RwSignal::new(locale),
        }
    }

    pub fn set_organization(&self, org_id: String, roles: Vec<Role>) {
        log::debug!("organization {org_id}: {} roles", roles.len());
        self.org_id.set(Some(org_id));
        self.roles.set(roles);
    }

    /// Role list selector
    pub fn roles(&self) -> Signal<Vec<Role>> {
        let roles = self.roles;
        Signal::derive(move || roles.get())
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not provided in context")
}
