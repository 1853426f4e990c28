use anyhow::{Context, Result};
use reelpost_common::environment::{
    get_env_var, get_env_var_or, parse_env_var_or,
    variables::{EMAIL_ADDRESS, EMAIL_PASSWORD, RECIPIENT_EMAIL, SMTP_HOST, SMTP_PORT},
};
use reelpost_mailer::{SmtpMailer, SmtpMailerSettings, DEFAULT_SMTP_HOST, DEFAULT_SMTP_PORT};

fn get_required(name: &str, description: &str) -> Result<String> {
    get_env_var(name)
        .with_context(|| format!("Could not retrieve the {} from the environment.", description))
}

pub fn initialize_mailer() -> Result<SmtpMailer> {
    let settings = SmtpMailerSettings {
        host: get_env_var_or(SMTP_HOST, DEFAULT_SMTP_HOST),
        port: parse_env_var_or(SMTP_PORT, DEFAULT_SMTP_PORT)?,
        username: get_required(EMAIL_ADDRESS, "sender email address")?,
        password: get_required(EMAIL_PASSWORD, "sender email password")?,
        recipient: get_required(RECIPIENT_EMAIL, "recipient email address")?,
    };

    SmtpMailer::new(settings)
}
