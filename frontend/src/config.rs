//! Build-time configuration of the console.

/// Base URL of the device-management API. Overridable at build time with
/// `CONSOLE_API_BASE=https://api.example.org trunk build`.
pub const API_BASE: &str = match option_env!("CONSOLE_API_BASE") {
    Some(base) => base,
    None => "http://127.0.0.1:8080/api",
};

/// localStorage key of the application-level credential.
pub const APP_TOKEN_KEY: &str = "token";

/// localStorage key of the user-level credential (carries the `role` claim).
pub const USER_TOKEN_KEY: &str = "userToken";

/// Rows shown per page on list pages.
pub const PAGE_SIZE: usize = 10;

/// Delay before a search query is applied, in milliseconds.
pub const SEARCH_DEBOUNCE_MS: u32 = 300;
