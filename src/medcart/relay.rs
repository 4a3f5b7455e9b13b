//! HTTP client for the transactional e-mail relay.
//!
//! Quote requests leave the system as one POST to the relay's send endpoint,
//! carrying the fixed service/template identifiers and the assembled
//! template parameters. The relay's response body is not interesting: a 2xx
//! status is success, everything else (including transport failures) is a
//! retriable submission error.

use std::time::Duration;

use reqwest::{Client, Url};
use tracing::debug;

use crate::config::RelaySettings;
use crate::error::{MedcartError, Result};
use crate::quote::{self, ContactForm};

const DEFAULT_BASE_URL: &str = "https://api.emailjs.com/";
const SEND_PATH: &str = "api/v1.0/email/send";

/// Client for the e-mail relay.
///
/// Use [`RelayClient::new`] for production or [`RelayClient::with_base_url`]
/// to point at a mock server in tests.
pub struct RelayClient {
    client: Client,
    base_url: Url,
    settings: RelaySettings,
}

impl RelayClient {
    /// Creates a client pointed at the production relay.
    ///
    /// # Errors
    ///
    /// Returns [`MedcartError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(settings: RelaySettings, timeout_secs: u64) -> Result<Self> {
        Self::with_base_url(settings, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`MedcartError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`MedcartError::Api`] if `base_url` is not
    /// a valid URL.
    pub fn with_base_url(
        settings: RelaySettings,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(concat!("medcart/", env!("CARGO_PKG_VERSION")))
            .build()?;

        // Normalise: exactly one trailing slash so join() appends the send
        // path instead of replacing the last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| MedcartError::Api(format!("invalid relay URL '{base_url}': {e}")))?;

        Ok(Self {
            client,
            base_url,
            settings,
        })
    }

    /// Sends one quote request through the relay.
    ///
    /// `summary` is the rendered cart body (see [`quote::render_summary`]).
    /// The form is expected to be validated already; validation failures must
    /// never reach the network.
    ///
    /// # Errors
    ///
    /// - [`MedcartError::Http`] on connect/timeout/transport failure.
    /// - [`MedcartError::RelayStatus`] when the relay answers non-2xx.
    pub async fn send_quote(&self, form: &ContactForm, summary: &str) -> Result<()> {
        let url = self
            .base_url
            .join(SEND_PATH)
            .map_err(|e| MedcartError::Api(format!("invalid relay URL: {e}")))?;
        let payload = self.build_payload(form, summary);

        let response = self.client.post(url).json(&payload).send().await?;
        let status = response.status();
        debug!("relay answered {}", status);

        if !status.is_success() {
            return Err(MedcartError::RelayStatus(status.as_u16()));
        }
        Ok(())
    }

    fn build_payload(&self, form: &ContactForm, summary: &str) -> serde_json::Value {
        serde_json::json!({
            "service_id": self.settings.service_id,
            "template_id": self.settings.template_id,
            "user_id": self.settings.public_key,
            "template_params": {
                "name": form.name,
                "email": form.email,
                "phone": form.phone,
                "message": form.message,
                "user_type": form.user_type,
                "subject": quote::SUBJECT,
                "request": summary,
            },
        })
    }
}
