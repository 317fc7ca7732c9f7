use std::fmt;
use std::rc::Rc;

use log::warn;
use yew::prelude::*;

use crate::claims::{self, Claims};
use crate::config::{APP_TOKEN_KEY, USER_TOKEN_KEY};
use crate::role::Role;
use crate::storage::{BrowserStore, CredentialStore, StorageError};

/* ---------------- session context ------------------ */

/// Seconds since the epoch.
pub type Clock = fn() -> u64;

fn browser_clock() -> u64 {
    (js_sys::Date::now() / 1000.0) as u64
}

/// Handle on the persisted credentials, injected into every component that
/// needs to know who is signed in. Nothing is cached: every call re-reads
/// storage.
#[derive(Clone)]
pub struct SessionContext {
    store: Rc<dyn CredentialStore>,
    clock: Clock,
}

impl SessionContext {
    pub fn new(store: Rc<dyn CredentialStore>, clock: Clock) -> Self {
        Self { store, clock }
    }

    pub fn browser() -> Self {
        Self::new(Rc::new(BrowserStore), browser_clock)
    }

    fn entry(&self, key: &str) -> Option<String> {
        self.store.read(key).filter(|v| !v.is_empty())
    }

    /// User credential, `None` when absent or empty.
    pub fn credential(&self) -> Option<String> {
        self.entry(USER_TOKEN_KEY)
    }

    /// Application credential, `None` when absent or empty.
    pub fn app_credential(&self) -> Option<String> {
        self.entry(APP_TOKEN_KEY)
    }

    /// Decoded claims of the user credential. Decode failures are logged and
    /// reported as `None`.
    pub fn claims(&self) -> Option<Claims> {
        let token = self.credential()?;
        match claims::decode(&token) {
            Ok(claims) => Some(claims),
            Err(e) => {
                warn!("ignoring malformed user credential: {e}");
                None
            }
        }
    }

    /// Role of the current user. Never fails: anything short of a decodable
    /// credential is `Role::Guest`.
    pub fn resolve_role(&self) -> Role {
        self.role_of(self.claims().as_ref())
    }

    /// Role for claims already read through [`claims`](Self::claims), so a
    /// caller that needs both decodes the credential once.
    pub fn role_of(&self, claims: Option<&Claims>) -> Role {
        let Some(claims) = claims else {
            return Role::Guest;
        };

        if claims.is_expired((self.clock)()) {
            warn!("user credential expired (exp={:?}), role still taken from it", claims.exp);
        }

        let role = Role::from_claim(&claims.role);
        if let Role::Unknown(raw) = &role {
            warn!("unrecognised role claim {raw:?}");
        }
        role
    }

    /// Persists both credentials after a successful login.
    pub fn sign_in(&self, app_token: &str, user_token: &str) -> Result<(), StorageError> {
        self.store.write(APP_TOKEN_KEY, app_token)?;
        self.store.write(USER_TOKEN_KEY, user_token)
    }

    /// Removes both credentials and checks the user credential is really gone.
    pub fn sign_out(&self) -> Result<(), StorageError> {
        self.store.remove(APP_TOKEN_KEY)?;
        self.store.remove(USER_TOKEN_KEY)?;

        if self.store.read(USER_TOKEN_KEY).is_some() {
            return Err(StorageError::Rejected {
                key: USER_TOKEN_KEY.to_string(),
                reason: "entry still present after removal".to_string(),
            });
        }
        Ok(())
    }
}

impl PartialEq for SessionContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store)
    }
}

impl fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionContext")
            .field("signed_in", &self.credential().is_some())
            .finish()
    }
}

/* ---------------- hook ---------------------------- */

/// Session of the enclosing `SessionProvider`, or the browser session when
/// rendered outside one.
#[hook]
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(SessionContext::browser)
}

/* -------------- provider props -------------------- */

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    /// Overrides the browser session (fixtures, previews).
    #[prop_or_default]
    pub session: Option<SessionContext>,
    #[prop_or_default]
    pub children: Children,
}

/* -------------- provider -------------------------- */

#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let session = use_state(|| props.session.clone().unwrap_or_else(SessionContext::browser));

    html! {
        <ContextProvider<SessionContext> context={(*session).clone()}>
            { for props.children.iter() }
        </ContextProvider<SessionContext>>
    }
}
