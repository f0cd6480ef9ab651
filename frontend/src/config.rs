
#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL
}

pub fn login_url() -> String {
    format!("{}/api/login", get_backend_url())
}

/// localStorage key holding the session token.
pub const TOKEN_STORAGE_KEY: &str = "token";

pub const REQUEST_TIMEOUT_MS: u32 = 15_000;

pub const TOAST_DURATION_MS: u32 = 4_000;
