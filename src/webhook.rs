use tracing::{error, info, instrument};

/// Chat webhook client encapsulating the hook URL. The bridge relays each
/// posted line into the channel verbatim, control codes included.
#[derive(Debug, Clone)]
pub struct Webhook {
    hook_url: String,
}

impl Webhook {
    /// Create a new client with the provided webhook URL.
    pub fn new(hook_url: String) -> Self {
        Self { hook_url }
    }

    /// Post one message line. Returns Ok(()) on success, or Err(String)
    /// with a description on failure.
    #[instrument(level = "info", skip(self, content), fields(bytes = content.len()))]
    pub fn post(&self, content: &str) -> Result<(), String> {
        let payload = serde_json::json!({ "content": content });
        match ureq::post(&self.hook_url).send_json(payload) {
            Ok(resp) => {
                info!(status = resp.status().as_u16(), "Posted message to webhook");
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Failed to post to webhook");
                Err(format!("Failed to post to webhook: {}", e))
            }
        }
    }

    /// Post a user-facing error line.
    pub fn error(&self, content: &str) -> Result<(), String> {
        self.post(&format!("Error: {}", content))
    }
}
