use yew::prelude::*;
use yew_router::prelude::*;

use crate::session::{use_session, SessionContext};
use crate::Route;

/// Outcome of the presence check done before a protected page renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Unauthenticated,
    Authenticated,
}

impl Access {
    /// Only presence of the user credential counts here; roles are checked
    /// by the navigation and the pages themselves.
    pub fn of(session: &SessionContext) -> Self {
        match session.credential() {
            Some(_) => Self::Authenticated,
            None => Self::Unauthenticated,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct GuardProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Guard)]
pub fn guard(props: &GuardProps) -> Html {
    match Access::of(&use_session()) {
        Access::Authenticated => html! { for props.children.iter() },
        Access::Unauthenticated => html!(<Redirect<Route> to={Route::Login} />),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{APP_TOKEN_KEY, USER_TOKEN_KEY};
    use crate::session::tests::{session, with_role};

    #[test]
    fn absent_credential_is_unauthenticated() {
        assert_eq!(Access::of(&session(&[])), Access::Unauthenticated);
        assert_eq!(Access::of(&session(&[(USER_TOKEN_KEY, "")])), Access::Unauthenticated);
    }

    #[test]
    fn app_credential_alone_does_not_authenticate() {
        let s = session(&[(APP_TOKEN_KEY, "app")]);
        assert_eq!(Access::of(&s), Access::Unauthenticated);
    }

    #[test]
    fn malformed_but_present_credential_is_authenticated() {
        let s = session(&[(USER_TOKEN_KEY, "not-a-jwt")]);
        assert_eq!(Access::of(&s), Access::Authenticated);
    }

    #[test]
    fn valid_credential_is_authenticated_whatever_the_role() {
        for role in ["superAdmin", "admin", "guest", "unknownRole"] {
            assert_eq!(Access::of(&with_role(role)), Access::Authenticated);
        }
    }
}
