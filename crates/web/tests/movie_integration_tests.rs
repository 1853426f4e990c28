use actix_web::body::MessageBody;
use actix_web::cookie::Cookie;
use actix_web::dev::ServiceResponse;
use actix_web::http::{header, StatusCode};
use actix_web::{test, web, App};
use common::{FailingMailer, FakeMetadataClient, SpyMailer};
use reelpost_web::{reelpost_config, ReelpostRootSpan, FLASH_COOKIE};
use tracing_actix_web::TracingLogger;

mod common;

async fn body_string<B: MessageBody>(resp: ServiceResponse<B>) -> String {
    let body = test::read_body(resp).await;
    String::from_utf8(body.to_vec()).unwrap()
}

fn flash_cookie<B>(resp: &ServiceResponse<B>) -> Option<Cookie<'static>> {
    resp.response()
        .cookies()
        .find(|c| c.name() == FLASH_COOKIE)
        .map(|c| c.into_owned())
}

#[actix_rt::test]
async fn movie_get_renders_details() {
    // Arrange
    let app = test::init_service(
        App::new()
            .wrap(TracingLogger::<ReelpostRootSpan>::new())
            .app_data(web::Data::new(FakeMetadataClient::new()))
            .app_data(web::Data::new(common::settings()))
            .configure(reelpost_config::<FakeMetadataClient, SpyMailer>),
    )
    .await;
    let req = test::TestRequest::get().uri("/movie/603").to_request();

    // Act
    let resp = test::call_service(&app, req).await;

    // Assert
    assert_eq!(StatusCode::OK, resp.status());
    assert!(flash_cookie(&resp).is_none());
    let body = body_string(resp).await;
    assert!(body.contains("<h1>The Matrix</h1>"));
    assert!(body.contains("<strong>Director:</strong> Lana Wachowski"));
    assert!(body.contains("src=\"https://www.youtube.com/embed/abc\""));
    assert!(body.contains("<strong>Stream:</strong> Netflix"));
    assert!(body.contains("href=\"/config/603\""));
    assert!(!body.contains("role=\"alert\""));
}

#[actix_rt::test]
async fn config_get_renders_every_toggle_checked() {
    // Arrange
    let app = test::init_service(
        App::new()
            .wrap(TracingLogger::<ReelpostRootSpan>::new())
            .app_data(web::Data::new(FakeMetadataClient::new()))
            .app_data(web::Data::new(common::settings()))
            .configure(reelpost_config::<FakeMetadataClient, SpyMailer>),
    )
    .await;
    let req = test::TestRequest::get().uri("/config/603").to_request();

    // Act
    let resp = test::call_service(&app, req).await;

    // Assert
    assert_eq!(StatusCode::OK, resp.status());
    let body = body_string(resp).await;
    assert!(body.contains("Configure Post: The Matrix"));
    assert!(body.contains("name=\"include_overview\" checked"));
    assert!(body.contains("name=\"include_trailer\" checked"));
    assert!(body.contains("<textarea class=\"form-control\" id=\"custom_embed\" name=\"custom_embed\""));
}

#[actix_rt::test]
async fn send_email_sends_selected_sections_then_shows_notice_once() {
    // Arrange
    let mailer = SpyMailer::new();
    let app = test::init_service(
        App::new()
            .wrap(TracingLogger::<ReelpostRootSpan>::new())
            .app_data(web::Data::new(FakeMetadataClient::new()))
            .app_data(web::Data::new(mailer.clone()))
            .app_data(web::Data::new(common::settings()))
            .configure(reelpost_config::<FakeMetadataClient, SpyMailer>),
    )
    .await;
    let req = test::TestRequest::post()
        .uri("/send_email/603")
        .set_form([
            ("include_overview", "on"),
            ("include_cast", "off"),
            ("custom_embed", common::EMBED),
        ])
        .to_request();

    // Act
    let resp = test::call_service(&app, req).await;

    // Assert
    assert_eq!(StatusCode::SEE_OTHER, resp.status());
    assert_eq!(
        "/movie/603",
        resp.headers().get(header::LOCATION).unwrap().to_str().unwrap()
    );
    let messages = mailer.messages().await;
    assert_eq!(1, messages.len());
    let (subject, html) = &messages[0];
    assert_eq!("Watch The Matrix", subject);
    assert!(html.contains("<strong>Overview:</strong> A hacker learns the truth."));
    assert!(html.contains(common::EMBED));
    for label in [
        "Director",
        "Cast",
        "Genres",
        "Release Date",
        "Runtime",
        "Budget",
        "Revenue",
        "TMDB Rating",
        "IMDb",
    ] {
        assert!(
            !html.contains(&format!("<strong>{}:</strong>", label)),
            "Unexpected section {}",
            label
        );
    }
    assert!(!html.contains("embed-responsive-item"));

    // Follow the redirect with the flash cookie.
    let cookie = flash_cookie(&resp).unwrap();
    let req = test::TestRequest::get()
        .uri("/movie/603")
        .cookie(cookie)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(StatusCode::OK, resp.status());
    let removal = flash_cookie(&resp).unwrap();
    assert_eq!("", removal.value());
    let body = body_string(resp).await;
    assert!(body.contains(
        "<div class=\"alert alert-success\" role=\"alert\">Movie details were sent by email.</div>"
    ));
}

#[actix_rt::test]
async fn send_email_redirects_with_failure_notice_given_mailer_error() {
    // Arrange
    let app = test::init_service(
        App::new()
            .wrap(TracingLogger::<ReelpostRootSpan>::new())
            .app_data(web::Data::new(FakeMetadataClient::new()))
            .app_data(web::Data::new(FailingMailer))
            .app_data(web::Data::new(common::settings()))
            .configure(reelpost_config::<FakeMetadataClient, FailingMailer>),
    )
    .await;
    let req = test::TestRequest::post()
        .uri("/send_email/603")
        .set_form([("include_overview", "on")])
        .to_request();

    // Act
    let resp = test::call_service(&app, req).await;

    // Assert
    assert_eq!(StatusCode::SEE_OTHER, resp.status());
    let cookie = flash_cookie(&resp).unwrap();
    let req = test::TestRequest::get()
        .uri("/movie/603")
        .cookie(cookie)
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body = body_string(resp).await;
    assert!(body.contains("<div class=\"alert alert-danger\" role=\"alert\">Failed to send email: Failed to send email via SMTP.: Connection refused</div>"));
}

#[actix_rt::test]
async fn send_email_returns_502_without_sending_given_metadata_failure() {
    // Arrange
    let mailer = SpyMailer::new();
    let app = test::init_service(
        App::new()
            .wrap(TracingLogger::<ReelpostRootSpan>::new())
            .app_data(web::Data::new(FakeMetadataClient::failing()))
            .app_data(web::Data::new(mailer.clone()))
            .app_data(web::Data::new(common::settings()))
            .configure(reelpost_config::<FakeMetadataClient, SpyMailer>),
    )
    .await;
    let req = test::TestRequest::post()
        .uri("/send_email/603")
        .set_form([("include_overview", "on")])
        .to_request();

    // Act
    let resp = test::call_service(&app, req).await;

    // Assert
    assert_eq!(StatusCode::BAD_GATEWAY, resp.status());
    assert!(mailer.messages().await.is_empty());
}

#[actix_rt::test]
async fn movie_get_ignores_unsigned_flash_cookie() {
    // Arrange
    let app = test::init_service(
        App::new()
            .wrap(TracingLogger::<ReelpostRootSpan>::new())
            .app_data(web::Data::new(FakeMetadataClient::new()))
            .app_data(web::Data::new(common::settings()))
            .configure(reelpost_config::<FakeMetadataClient, SpyMailer>),
    )
    .await;
    let req = test::TestRequest::get()
        .uri("/movie/603")
        .cookie(Cookie::new(FLASH_COOKIE, "forged"))
        .to_request();

    // Act
    let resp = test::call_service(&app, req).await;

    // Assert
    assert_eq!(StatusCode::OK, resp.status());
    let body = body_string(resp).await;
    assert!(!body.contains("role=\"alert\""));
}
