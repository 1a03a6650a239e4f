//! Tab content registry: maps tab.key to its view.
//!
//! Every tab key the shell can open is resolved here.

use super::tab_labels::{
    id_after, COMPANIES, COMPANY_ADD_USER_PREFIX, CONTRACT_NEW, SCREENS, SCREEN_DETAIL_PREFIX,
    SCREEN_NEW, USER_NEW,
};
use crate::domain::a001_screen::ui::details::ScreenDetails;
use crate::domain::a001_screen::ui::list::ScreensPage;
use crate::domain::a001_screen::ui::wizard::AddScreenWizard;
use crate::domain::a002_company::ui::add_user::AddUserToCompany;
use crate::domain::a002_company::ui::list::CompaniesPage;
use crate::domain::a003_contract::ui::create::CreateContract;
use crate::layout::global_context::AppGlobalContext;
use crate::system::users::ui::create::CreateUser;
use contracts::domain::a001_screen::aggregate::ScreenId;
use contracts::domain::a002_company::aggregate::CompanyId;
use leptos::logging::log;
use leptos::prelude::*;

/// Renders tab content for `key`.
///
/// `tabs_store` lets detail views close their own tab.
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    let key_for_close = key.to_string();

    match key {
        // ═══════════════════════════════════════════════════════════════════
        // a001: Screens
        // ═══════════════════════════════════════════════════════════════════
        SCREENS => view! { <ScreensPage /> }.into_any(),
        SCREEN_NEW => view! { <AddScreenWizard /> }.into_any(),
        k if k.starts_with(SCREEN_DETAIL_PREFIX) => match id_after(k, SCREEN_DETAIL_PREFIX) {
            Some(id) => view! {
                <ScreenDetails
                    id=ScreenId(id)
                    on_close=Callback::new(move |_| tabs_store.close_tab(&key_for_close))
                />
            }
            .into_any(),
            None => unknown_tab(k),
        },

        // ═══════════════════════════════════════════════════════════════════
        // a002: Companies
        // ═══════════════════════════════════════════════════════════════════
        COMPANIES => view! { <CompaniesPage /> }.into_any(),
        k if k.starts_with(COMPANY_ADD_USER_PREFIX) => {
            match id_after(k, COMPANY_ADD_USER_PREFIX) {
                Some(id) => view! {
                    <AddUserToCompany
                        company_id=CompanyId(id)
                        on_close=Callback::new(move |_| tabs_store.close_tab(&key_for_close))
                    />
                }
                .into_any(),
                None => unknown_tab(k),
            }
        }

        // ═══════════════════════════════════════════════════════════════════
        // a003: Contracts
        // ═══════════════════════════════════════════════════════════════════
        CONTRACT_NEW => view! { <CreateContract /> }.into_any(),

        // ═══════════════════════════════════════════════════════════════════
        // System
        // ═══════════════════════════════════════════════════════════════════
        USER_NEW => view! { <CreateUser /> }.into_any(),

        k => unknown_tab(k),
    }
}

fn unknown_tab(key: &str) -> AnyView {
    log!("unknown tab key: {}", key);
    let key = key.to_string();
    view! {
        <div class="placeholder">
            {format!("Unknown tab: {}", key)}
        </div>
    }
    .into_any()
}
