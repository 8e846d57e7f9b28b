//! Integration tests for [`WiktionaryClient`] against a mock MediaWiki API.

use std::time::Duration;

use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use rootroulette::{EtymologyFetcher, EtymologyResult, FetcherConfig, WiktionaryClient};

const API_PATH: &str = "/w/api.php";

fn api_url(server: &MockServer) -> String {
    format!("{}{API_PATH}", server.uri())
}

fn rendered_page(html: &str) -> serde_json::Value {
    serde_json::json!({
        "parse": {
            "title": "school",
            "pageid": 12345,
            "text": { "*": html }
        }
    })
}

const SCHOOL_HTML: &str = r#"<div class="mw-content-ltr mw-parser-output" lang="en" dir="ltr">
<div class="mw-heading mw-heading2"><h2 id="English">English</h2></div>
<div class="mw-heading mw-heading3"><h3 id="Etymology_1">Etymology 1</h3></div>
<p>From <span class="etyl"><a href="/wiki/Latin">Latin</a></span> schola, from <span class="etyl"><a href="/wiki/Ancient_Greek">Ancient Greek</a></span> σχολή.</p>
<div class="mw-heading mw-heading4"><h4 id="Noun">Noun</h4></div>
<p>school (plural schools)</p>
</div>"#;

// =============================================================================
// Outcomes
// =============================================================================

#[tokio::test]
async fn rendered_page_with_etymology_is_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(API_PATH))
        .and(query_param("action", "parse"))
        .and(query_param("page", "school"))
        .and(query_param("prop", "text"))
        .and(query_param("format", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(rendered_page(SCHOOL_HTML)))
        .expect(1)
        .mount(&server)
        .await;

    let client = WiktionaryClient::with_base_url(api_url(&server)).unwrap();
    let result = client.fetch("school").await;

    assert_eq!(
        result,
        EtymologyResult::Success {
            word: "school".to_string(),
            text: "From Latin schola, from Ancient Greek σχολή.".to_string(),
            origin_languages: vec!["Latin".to_string(), "Ancient Greek".to_string()],
        }
    );
}

#[tokio::test]
async fn missing_page_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(API_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "error": {
                "code": "missingtitle",
                "info": "The page you specified doesn't exist."
            }
        })))
        .mount(&server)
        .await;

    let client = WiktionaryClient::with_base_url(api_url(&server)).unwrap();
    let result = client.fetch("xyzzy").await;

    assert_eq!(
        result,
        EtymologyResult::not_found("xyzzy", "Page 'xyzzy' not found on Wiktionary")
    );
}

#[tokio::test]
async fn page_without_english_entry_is_not_found() {
    let server = MockServer::start().await;
    let html = r#"<div class="mw-parser-output">
<div class="mw-heading mw-heading2"><h2 id="German">German</h2></div>
<div class="mw-heading mw-heading3"><h3 id="Etymology">Etymology</h3></div>
<p>From Middle High German schuole.</p>
</div>"#;
    Mock::given(method("GET"))
        .and(path(API_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(rendered_page(html)))
        .mount(&server)
        .await;

    let client = WiktionaryClient::with_base_url(api_url(&server)).unwrap();
    let result = client.fetch("schule").await;

    assert_eq!(
        result,
        EtymologyResult::not_found("schule", "No English entry found for 'schule'")
    );
}

#[tokio::test]
async fn server_error_is_error_and_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(API_PATH))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let client = WiktionaryClient::with_base_url(api_url(&server)).unwrap();
    let result = client.fetch("school").await;

    let EtymologyResult::Error { message, transient } = result else {
        panic!("expected error, got {result:?}");
    };
    assert!(message.starts_with("Network error:"), "got: {message}");
    assert!(message.contains("503"), "got: {message}");
    assert!(transient);
}

#[tokio::test]
async fn client_error_status_is_a_permanent_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(API_PATH))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let client = WiktionaryClient::with_base_url(api_url(&server)).unwrap();
    let result = client.fetch("school").await;

    let EtymologyResult::Error { message, transient } = result else {
        panic!("expected error, got {result:?}");
    };
    assert!(message.contains("404"), "got: {message}");
    assert!(!transient, "a 404 will not clear up on retry");
}

#[tokio::test]
async fn invalid_json_is_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(API_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let client = WiktionaryClient::with_base_url(api_url(&server)).unwrap();
    let result = client.fetch("school").await;

    let EtymologyResult::Error { message, transient } = result else {
        panic!("expected error, got {result:?}");
    };
    assert!(message.starts_with("Unexpected error:"), "got: {message}");
    assert!(!transient);
}

#[tokio::test]
async fn envelope_without_parse_or_error_is_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(API_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"batchcomplete": ""})))
        .mount(&server)
        .await;

    let client = WiktionaryClient::with_base_url(api_url(&server)).unwrap();
    assert!(matches!(
        client.fetch("school").await,
        EtymologyResult::Error { .. }
    ));
}

#[tokio::test]
async fn slow_response_times_out_as_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(API_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(rendered_page(SCHOOL_HTML))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let config = FetcherConfig::new()
        .api_url(api_url(&server))
        .timeout(Duration::from_millis(200));
    let client = WiktionaryClient::from_config(&config).unwrap();
    let result = client.fetch("school").await;

    let EtymologyResult::Error { message, transient } = result else {
        panic!("expected error, got {result:?}");
    };
    assert!(message.starts_with("Network error:"), "got: {message}");
    assert!(transient);
}

#[tokio::test]
async fn unreachable_host_is_error() {
    let client = WiktionaryClient::with_base_url("http://127.0.0.1:1/w/api.php").unwrap();
    assert!(matches!(
        client.fetch("school").await,
        EtymologyResult::Error { .. }
    ));
}

// =============================================================================
// Request shape
// =============================================================================

#[tokio::test]
async fn sends_configured_user_agent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(API_PATH))
        .and(header("user-agent", "rootroulette-test/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(rendered_page(SCHOOL_HTML)))
        .expect(1)
        .mount(&server)
        .await;

    let config = FetcherConfig::new()
        .api_url(api_url(&server))
        .user_agent("rootroulette-test/1.0");
    let client = WiktionaryClient::from_config(&config).unwrap();

    assert!(client.fetch("school").await.is_success());
}

#[tokio::test]
async fn default_user_agent_identifies_the_game() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(API_PATH))
        .and(header("user-agent", rootroulette::version::user_agent().as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(rendered_page(SCHOOL_HTML)))
        .expect(1)
        .mount(&server)
        .await;

    let client = WiktionaryClient::with_base_url(api_url(&server)).unwrap();
    assert!(client.fetch("school").await.is_success());
}

#[test]
fn client_reports_its_endpoint() {
    let client = WiktionaryClient::new().unwrap();
    assert_eq!(client.api_url(), rootroulette::fetcher::DEFAULT_API_URL);
    assert_eq!(client.name(), "wiktionary");
}
