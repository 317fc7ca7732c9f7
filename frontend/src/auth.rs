use gloo_net::http::Method;
use log::{error, info};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::{fetch_json, ApiError};
use crate::session::use_session;
use crate::Route;

/* -------------------------------------------------------------------------- */
/*                          bodies exchanged with the API                      */
/* -------------------------------------------------------------------------- */

#[derive(serde::Serialize)]
struct LoginBody {
    username: String,
    password: String,
}

#[derive(serde::Deserialize, Debug, PartialEq)]
struct LoginResponse {
    token: String,
    #[serde(rename = "userToken")]
    user_token: String,
}

fn login_failure_message(err: &ApiError) -> String {
    match err {
        ApiError::Unauthorized => "Nama pengguna atau kata sandi salah.".to_string(),
        ApiError::Status { status, .. } => format!("Gagal masuk: status {status}"),
        ApiError::Network(e) => format!("Kesalahan jaringan: {e}"),
        ApiError::Decode(e) => format!("Respons server tidak valid: {e}"),
    }
}

/* -------------------------------------------------------------------------- */
/*                                login page                                   */
/* -------------------------------------------------------------------------- */

#[function_component(LoginForm)]
pub fn login_form() -> Html {
    let session = use_session();
    let navigator = use_navigator();
    let username_ref = use_node_ref();
    let password_ref = use_node_ref();
    let message_state = use_state(String::new);

    let onsubmit = {
        let username_ref = username_ref.clone();
        let password_ref = password_ref.clone();
        let message_state = message_state.clone();

        Callback::from(move |ev: SubmitEvent| {
            ev.prevent_default();

            let field = |r: &NodeRef| r.cast::<HtmlInputElement>().map(|i| i.value()).unwrap_or_default();
            let body = LoginBody {
                username: field(&username_ref),
                password: field(&password_ref),
            };

            let session = session.clone();
            let navigator = navigator.clone();
            let message_state = message_state.clone();

            spawn_local(async move {
                let resp = fetch_json::<_, LoginResponse>(&session, Method::POST, "/auth/login", Some(&body)).await;

                match resp {
                    Ok(tokens) => match session.sign_in(&tokens.token, &tokens.user_token) {
                        Ok(()) => {
                            info!("signed in as {}", body.username);
                            if let Some(navigator) = navigator {
                                navigator.push(&Route::Entry);
                            }
                        }
                        Err(e) => {
                            error!("could not persist credentials: {e}");
                            message_state.set("Penyimpanan browser tidak tersedia.".into());
                        }
                    },
                    Err(e) => {
                        error!("login failed: {e}");
                        message_state.set(login_failure_message(&e));
                    }
                }
            });
        })
    };

    html! {
        <div class="login-container">
            <h2>{ "Masuk ke Konsol" }</h2>

            <form {onsubmit}>
                <input ref={username_ref} type="text"     placeholder="Nama pengguna" />
                <input ref={password_ref} type="password" placeholder="Kata sandi" />
                <button type="submit">{ "Masuk" }</button>
            </form>

            if !message_state.is_empty() {
                <p style="color:red;">{ &*message_state }</p>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_response_reads_both_tokens() {
        let resp: LoginResponse =
            serde_json::from_str(r#"{"token":"a.b.c","userToken":"d.e.f","extra":1}"#).unwrap();
        assert_eq!(
            resp,
            LoginResponse {
                token: "a.b.c".into(),
                user_token: "d.e.f".into(),
            }
        );
    }

    #[test]
    fn rejected_credentials_get_a_specific_message() {
        assert_eq!(
            login_failure_message(&ApiError::Unauthorized),
            "Nama pengguna atau kata sandi salah."
        );
        let msg = login_failure_message(&ApiError::Status {
            status: 500,
            text: "Internal Server Error".into(),
        });
        assert!(msg.contains("500"), "got: {msg}");
    }

    #[test]
    fn garbled_response_is_not_blamed_on_the_network() {
        let json = serde_json::from_str::<LoginResponse>("<html>").unwrap_err();
        let msg = login_failure_message(&ApiError::Decode(gloo_net::Error::SerdeError(json)));
        assert!(msg.starts_with("Respons server tidak valid"), "got: {msg}");
    }
}
