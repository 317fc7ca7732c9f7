//! Landing page: shows who is signed in and sends them to their dashboard.

use thiserror::Error;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::role::Role;
use crate::session::{use_session, SessionContext};
use crate::Route;

/// Why the dashboard button did not navigate. The display text is shown
/// verbatim under the button.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EntryError {
    #[error("Token pengguna tidak tersedia.")]
    MissingToken,
    #[error("Peran pengguna tidak dikenal.")]
    UnknownRole,
}

pub fn dashboard_for(session: &SessionContext) -> Result<Route, EntryError> {
    if session.credential().is_none() {
        return Err(EntryError::MissingToken);
    }
    match session.resolve_role() {
        Role::SuperAdmin => Ok(Route::SuperAdminDevices),
        Role::Admin => Ok(Route::AdminDevices),
        Role::Guest | Role::Unknown(_) => Err(EntryError::UnknownRole),
    }
}

#[function_component(Entry)]
pub fn entry() -> Html {
    let session = use_session();
    let navigator = use_navigator();
    // one decode per mount for both the label and the greeting
    let view = use_state(|| {
        let claims = session.claims();
        let greeting = claims.as_ref().and_then(|c| c.display_name().map(str::to_string));
        (session.role_of(claims.as_ref()), greeting)
    });
    let (role, greeting) = &*view;
    let message = use_state(String::new);

    let onclick = {
        let session = session.clone();
        let message = message.clone();
        Callback::from(move |_| match dashboard_for(&session) {
            Ok(route) => {
                message.set(String::new());
                match &navigator {
                    Some(navigator) => navigator.push(&route),
                    None => log::error!("entry page rendered outside a router"),
                }
            }
            Err(e) => {
                log::info!("dashboard navigation refused: {e:?}");
                message.set(e.to_string());
            }
        })
    };

    html! {
        <div class="entry-container">
            <h2>{ "Konsol Perangkat IoT" }</h2>
            <p class="entry-role">{ "Peran: " }<strong>{ role.label() }</strong></p>
            if let Some(name) = greeting {
                <p class="entry-greeting">{ format!("Halo, {name}") }</p>
            }

            <button {onclick}>{ "Buka Dasbor" }</button>
            if session.credential().is_none() {
                <p><Link<Route> to={Route::Login}>{ "Masuk" }</Link<Route>></p>
            }

            if !message.is_empty() {
                <p class="error" style="color:red;">{ &*message }</p>
            }
        </div>
    }
}
