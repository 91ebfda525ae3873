// SPDX-License-Identifier: MPL-2.0
//! Shared HTTP client setup.

use std::time::Duration;

const USER_AGENT: &str = concat!("FasalMitra/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Builds the client used by every adapter.
pub(crate) fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(USER_AGENT)
        .timeout(REQUEST_TIMEOUT)
        .build()
        .unwrap_or_else(|err| {
            tracing::warn!(%err, "falling back to default HTTP client");
            reqwest::Client::new()
        })
}
