use gloo::utils::window;
use log::{error, info};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::session::{use_session, SessionContext};
use crate::storage::StorageError;
use crate::Route;

const CONFIRM_PROMPT: &str = "Apakah Anda yakin ingin keluar?";

#[derive(Debug, PartialEq)]
pub enum LogoutOutcome {
    /// The user cancelled the prompt; storage untouched.
    Declined,
    SignedOut,
    /// The credential could not be removed; the caller must not redirect.
    Failed(StorageError),
}

pub fn sign_out(session: &SessionContext, confirmed: bool) -> LogoutOutcome {
    if !confirmed {
        return LogoutOutcome::Declined;
    }
    match session.sign_out() {
        Ok(()) => LogoutOutcome::SignedOut,
        Err(e) => LogoutOutcome::Failed(e),
    }
}

#[function_component(Logout)]
pub fn logout() -> Html {
    let session = use_session();
    let navigator = use_navigator();

    let onclick = Callback::from(move |_| {
        let confirmed = gloo_dialogs::confirm(CONFIRM_PROMPT);

        match sign_out(&session, confirmed) {
            LogoutOutcome::Declined => {}
            LogoutOutcome::Failed(e) => error!("logout aborted, credential still stored: {e}"),
            LogoutOutcome::SignedOut => {
                info!("signed out");
                // back to the entry page, then a full reload to drop view state
                if let Some(navigator) = &navigator {
                    navigator.replace(&Route::Entry);
                }
                if let Err(e) = window().location().reload() {
                    error!("reload after logout failed: {e:?}");
                }
            }
        }
    });

    html! { <button class="logout" {onclick}>{ "Keluar" }</button> }
}
