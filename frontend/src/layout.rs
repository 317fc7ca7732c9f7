use yew::prelude::*;
use yew_router::prelude::*;

use crate::logout;
use crate::role::Role;
use crate::session::use_session;
use crate::Route;

#[derive(Clone, Debug, PartialEq)]
pub struct NavLink {
    pub route: Route,
    pub label: &'static str,
}

static SUPER_ADMIN_LINKS: [NavLink; 5] = [
    NavLink { route: Route::SuperAdminDevices, label: "Perangkat" },
    NavLink { route: Route::SuperAdminDeviceTypes, label: "Tipe Perangkat" },
    NavLink { route: Route::SuperAdminCompanies, label: "Perusahaan" },
    NavLink { route: Route::SuperAdminUsers, label: "Pengguna" },
    NavLink { route: Route::SuperAdminReports, label: "Laporan" },
];

static ADMIN_LINKS: [NavLink; 4] = [
    NavLink { route: Route::AdminDevices, label: "Perangkat" },
    NavLink { route: Route::AdminProjects, label: "Proyek" },
    NavLink { route: Route::AdminAccessRules, label: "Aturan Akses" },
    NavLink { route: Route::AdminReports, label: "Laporan" },
];

/// Role-specific navigation. Roles without a menu only get the logout control.
pub fn menu_for(role: &Role) -> &'static [NavLink] {
    match role {
        Role::SuperAdmin => &SUPER_ADMIN_LINKS,
        Role::Admin => &ADMIN_LINKS,
        Role::Guest | Role::Unknown(_) => &[],
    }
}

#[derive(Properties, PartialEq)]
pub struct MainLayoutProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(MainLayout)]
pub fn main_layout(props: &MainLayoutProps) -> Html {
    let session = use_session();
    // resolved once on mount; a credential change only shows after reload
    let role = use_state(|| session.resolve_role());

    html! {
        <>
            <header class="header">
                <div class="header-title">{ "Konsol Perangkat IoT" }</div>
                <div class="header-role">{ role.label() }</div>
                <div class="header-logout">
                    <logout::Logout />
                </div>
            </header>

            <nav class="nav">
                <ul class="nav-list">
                    { for menu_for(&role).iter().map(|link| html! {
                        <li class="nav-item">
                            <Link<Route> to={link.route.clone()}>{ link.label }</Link<Route>>
                        </li>
                    }) }
                </ul>
            </nav>

            <main class="main-content">
                { for props.children.iter() }
            </main>
        </>
    }
}
