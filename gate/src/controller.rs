//! Gate controller
//!
//! One attempt runs as:
//! 1. Fetch the credential file and read it as text
//! 2. Compare it with the password field (exact string equality)
//! 3. On a match, fetch the protected fragment, inject it and swap regions
//! 4. Otherwise show the failure message and clear the field
//!
//! The credential is fetched fresh on every attempt and never cached.
//! Nothing guards against overlapping attempts: two in flight race, and the
//! last to finish decides what the page shows.

use tracing::{debug, info, warn};

use crate::config::GateConfig;
use crate::dom::{ContentRegion, GateElements, MessageDisplay, PasswordInput, Region};
use crate::error::Result;
use crate::fetch::TextFetcher;
use crate::fingerprint::fingerprint;

/// Result of a completed attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnlockOutcome {
    /// Password matched; protected content is showing.
    Unlocked,
    /// Password did not match; failure message shown, field cleared.
    Rejected,
}

impl UnlockOutcome {
    pub fn is_unlocked(self) -> bool {
        self == UnlockOutcome::Unlocked
    }
}

pub struct GateController<F, I, G, C, M> {
    config: GateConfig,
    fetcher: F,
    elements: GateElements<I, G, C, M>,
}

impl<F, I, G, C, M> GateController<F, I, G, C, M>
where
    F: TextFetcher,
    I: PasswordInput,
    G: Region,
    C: ContentRegion,
    M: MessageDisplay,
{
    pub fn new(config: GateConfig, fetcher: F, elements: GateElements<I, G, C, M>) -> Self {
        Self {
            config,
            fetcher,
            elements,
        }
    }

    pub fn elements(&self) -> &GateElements<I, G, C, M> {
        &self.elements
    }

    /// Run one unlock attempt against the current field value.
    ///
    /// A wrong password is `Ok(Rejected)`. A failed fetch is an error and
    /// leaves the page as it was: no failure message, nothing revealed.
    #[tracing::instrument(name = "attempt_unlock", skip_all)]
    pub async fn attempt_unlock(&self) -> Result<UnlockOutcome> {
        let expected = self.fetcher.fetch_text(&self.config.credential_path).await?;
        debug!(
            path = %self.config.credential_path,
            len = expected.len(),
            fingerprint = %fingerprint(&expected),
            "credential fetched"
        );

        // No trimming: a trailing newline in the key file is part of the password.
        let entered = self.elements.input.value();
        if entered == expected {
            self.reveal().await?;
            info!("gate unlocked");
            Ok(UnlockOutcome::Unlocked)
        } else {
            self.reject()?;
            warn!(entered_len = entered.len(), "incorrect password");
            Ok(UnlockOutcome::Rejected)
        }
    }

    async fn reveal(&self) -> Result<()> {
        let html = self.fetcher.fetch_text(&self.config.content_path).await?;
        debug!(path = %self.config.content_path, len = html.len(), "content fetched");

        // Gate goes first: a failed write must not leave both regions showing
        self.elements.gate.hide()?;
        self.elements.content.set_html(&html)?;
        self.elements.content.show()
    }

    fn reject(&self) -> Result<()> {
        self.elements.error.set_text(&self.config.failure_message)?;
        self.elements.input.clear()
    }
}
