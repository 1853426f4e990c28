use anyhow::{Context, Result};
use reelpost_common::environment::{
    get_env_var, get_env_var_or, parse_env_var_or,
    variables::{LANGUAGE, SECRET_KEY, WEB_PORT},
};
use reelpost_web::WebSettings;

const DEFAULT_LANGUAGE: &str = "tr-TR";
const DEFAULT_PORT: u16 = 8080;

pub fn initialize_web_settings() -> Result<WebSettings> {
    let secret_key = get_env_var(SECRET_KEY)
        .with_context(|| "Could not retrieve the secret key from the environment.")?;
    let language = get_env_var_or(LANGUAGE, DEFAULT_LANGUAGE);

    WebSettings::new(&language, secret_key.as_bytes())
        .with_context(|| format!("{} is not usable for signing cookies.", SECRET_KEY))
}

pub fn get_port() -> Result<u16> {
    parse_env_var_or(WEB_PORT, DEFAULT_PORT)
}
