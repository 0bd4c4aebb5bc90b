use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum NotificationError {
    #[error("SMS client not configured")]
    NotConfigured,

    #[error("missing SMS credential {0}")]
    MissingCredentials(&'static str),

    #[error("message delivery failed: {0}")]
    Delivery(#[from] reqwest::Error),
}

/// Twilio-style messages client. Credentials come from the environment;
/// without them the dashboard still works, only notifications fail.
pub struct SmsClient {
    client: reqwest::blocking::Client,
    account_sid: String,
    auth_token: String,
    from_number: String,
}

fn require_env(name: &'static str) -> Result<String, NotificationError> {
    std::env::var(name).map_err(|_| NotificationError::MissingCredentials(name))
}

impl SmsClient {
    pub fn new(account_sid: String, auth_token: String, from_number: String) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            account_sid,
            auth_token,
            from_number,
        }
    }

    pub fn from_env() -> Result<Self, NotificationError> {
        Ok(Self::new(
            require_env("TWILIO_ACCOUNT_SID")?,
            require_env("TWILIO_AUTH_TOKEN")?,
            require_env("TWILIO_PHONE_NUMBER")?,
        ))
    }

    pub fn send(&self, to: &str, body: &str) -> Result<(), NotificationError> {
        let url = format!(
            "https://api.twilio.com/2010-04-01/Accounts/{}/Messages.json",
            self.account_sid
        );
        self.client
            .post(url)
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&[("To", to), ("From", &self.from_number), ("Body", body)])
            .send()?
            .error_for_status()?;
        info!(to, "notification delivered");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_env_reports_the_missing_credential() {
        // the test environment carries no Twilio configuration
        std::env::remove_var("TWILIO_ACCOUNT_SID");
        match SmsClient::from_env() {
            Err(NotificationError::MissingCredentials(name)) => {
                assert_eq!(name, "TWILIO_ACCOUNT_SID")
            }
            _ => panic!("expected missing credentials"),
        }
    }
}
