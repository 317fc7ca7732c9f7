use yew::prelude::*;
use yew_router::prelude::*;

mod api;
mod auth;
mod claims;
mod config;
mod entry;
mod guard;
mod layout;
mod listing;
mod logout;
mod pages;
mod resources;
mod role;
mod session;
mod storage;

use guard::Guard;
use layout::MainLayout;
use pages::ResourcePage;
use resources::Resource;

/* -------------------- routing -------------------- */

#[derive(Routable, Clone, Debug, PartialEq)]
pub enum Route {
    #[at("/")]
    Entry,
    #[at("/login")]
    Login,
    #[at("/super-admin/devices")]
    SuperAdminDevices,
    #[at("/super-admin/device-types")]
    SuperAdminDeviceTypes,
    #[at("/super-admin/companies")]
    SuperAdminCompanies,
    #[at("/super-admin/users")]
    SuperAdminUsers,
    #[at("/super-admin/reports")]
    SuperAdminReports,
    #[at("/admin/devices")]
    AdminDevices,
    #[at("/admin/projects")]
    AdminProjects,
    #[at("/admin/access-rules")]
    AdminAccessRules,
    #[at("/admin/reports")]
    AdminReports,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn protected(resource: &'static Resource) -> Html {
    html! {
        <Guard>
            <MainLayout>
                <ResourcePage {resource} />
            </MainLayout>
        </Guard>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Entry => html!(<entry::Entry />),
        Route::Login => html!(<auth::LoginForm />),
        Route::SuperAdminDevices | Route::AdminDevices => protected(&resources::DEVICES),
        Route::SuperAdminDeviceTypes => protected(&resources::DEVICE_TYPES),
        Route::SuperAdminCompanies => protected(&resources::COMPANIES),
        Route::SuperAdminUsers => protected(&resources::USERS),
        Route::SuperAdminReports | Route::AdminReports => protected(&resources::REPORTS),
        Route::AdminProjects => protected(&resources::PROJECTS),
        Route::AdminAccessRules => protected(&resources::ACCESS_RULES),
        Route::NotFound => html!(<h1>{ "404 – Halaman tidak ditemukan" }</h1>),
    }
}

/* -------------------- entry point ---------------- */

#[function_component(App)]
fn app() -> Html {
    html! {
        <session::SessionProvider>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </session::SessionProvider>
    }
}

/// Debug records (token timestamps included) only in dev builds.
fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::new(log_level()));
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_paths_are_stable() {
        assert_eq!(Route::Entry.to_path(), "/");
        assert_eq!(Route::Login.to_path(), "/login");
        assert_eq!(Route::AdminDevices.to_path(), "/admin/devices");
        assert_eq!(Route::SuperAdminDevices.to_path(), "/super-admin/devices");
    }

    #[test]
    fn log_level_follows_build_profile() {
        let expected = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
        assert_eq!(log_level(), expected);
        assert!(log_level() >= log::Level::Info);
    }

    #[test]
    fn paths_resolve_back_to_routes() {
        assert_eq!(Route::recognize("/admin/access-rules"), Some(Route::AdminAccessRules));
        assert_eq!(Route::recognize("/super-admin/device-types"), Some(Route::SuperAdminDeviceTypes));
    }
}
