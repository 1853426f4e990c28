//! One-shot notices carried across a redirect in a signed cookie.

use actix_web::cookie::{Cookie, CookieJar, Key};
use actix_web::HttpRequest;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const FLASH_COOKIE: &str = "reelpost_flash";

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Success,
    Error,
}

impl FlashLevel {
    /// Bootstrap alert class for the notice.
    pub fn alert_class(&self) -> &'static str {
        match self {
            FlashLevel::Success => "alert-success",
            FlashLevel::Error => "alert-danger",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FlashNotice {
    pub level: FlashLevel,
    pub message: String,
}

impl FlashNotice {
    pub fn success(message: &str) -> Self {
        FlashNotice {
            level: FlashLevel::Success,
            message: String::from(message),
        }
    }

    pub fn error(message: &str) -> Self {
        FlashNotice {
            level: FlashLevel::Error,
            message: String::from(message),
        }
    }

    fn encode(&self) -> serde_json::Result<String> {
        let json = serde_json::to_vec(self)?;
        Ok(base64::encode_config(json, base64::URL_SAFE_NO_PAD))
    }

    fn decode(value: &str) -> Option<Self> {
        let json = base64::decode_config(value, base64::URL_SAFE_NO_PAD).ok()?;
        serde_json::from_slice(&json).ok()
    }
}

/// Build the signed cookie that carries `notice` to the next page.
pub fn flash_cookie(notice: &FlashNotice, key: &Key) -> Result<Cookie<'static>> {
    let value = notice
        .encode()
        .context("Failed to serialize flash notice.")?;
    let cookie = Cookie::build(FLASH_COOKIE, value)
        .path("/")
        .http_only(true)
        .finish();
    let mut jar = CookieJar::new();
    jar.signed_mut(key).add(cookie);

    jar.get(FLASH_COOKIE)
        .cloned()
        .context("Signed flash cookie was not added to the jar.")
}

/// The pending notice on this request, if one is present and its signature checks out.
pub fn read_flash(req: &HttpRequest, key: &Key) -> Option<FlashNotice> {
    let cookie = req.cookie(FLASH_COOKIE)?;
    let mut jar = CookieJar::new();
    jar.add_original(cookie);
    match jar.signed(key).get(FLASH_COOKIE) {
        Some(verified) => FlashNotice::decode(verified.value()),
        None => {
            debug!("Ignoring flash cookie with an invalid signature.");
            None
        }
    }
}

/// A cookie that clears a notice once it has been shown.
pub fn removal_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::named(FLASH_COOKIE);
    cookie.set_path("/");
    cookie.make_removal();
    cookie
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    fn key() -> Key {
        Key::derive_from(b"an-example-secret-that-is-long-enough-to-sign")
    }

    #[test]
    fn read_flash_returns_notice_given_signed_cookie() {
        // Arrange
        let key = key();
        let notice = FlashNotice::error("Failed to send email: connection refused");
        let cookie = flash_cookie(&notice, &key).unwrap();
        let req = TestRequest::default().cookie(cookie).to_http_request();

        // Act
        let actual = read_flash(&req, &key);

        // Assert
        assert_eq!(Some(notice), actual);
    }

    #[test]
    fn read_flash_returns_none_given_tampered_cookie() {
        // Arrange
        let key = key();
        let forged = FlashNotice::success("Sent!").encode().unwrap();
        let req = TestRequest::default()
            .cookie(Cookie::new(FLASH_COOKIE, forged))
            .to_http_request();

        // Act
        let actual = read_flash(&req, &key);

        // Assert
        assert!(actual.is_none());
    }

    #[test]
    fn read_flash_returns_none_given_other_key() {
        // Arrange
        let cookie = flash_cookie(&FlashNotice::success("Sent!"), &key()).unwrap();
        let req = TestRequest::default().cookie(cookie).to_http_request();
        let other = Key::derive_from(b"a-different-secret-that-is-also-long-enough");

        // Act
        let actual = read_flash(&req, &other);

        // Assert
        assert!(actual.is_none());
    }

    #[test]
    fn removal_cookie_expires_flash() {
        // Act
        let actual = removal_cookie();

        // Assert
        assert_eq!(FLASH_COOKIE, actual.name());
        assert_eq!(Some("/"), actual.path());
        assert_eq!("", actual.value());
    }
}
