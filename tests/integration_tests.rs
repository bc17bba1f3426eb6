//! Integration tests for prophet-says
//!
//! These tests drive the search container against a local mockito server
//! standing in for the hadith-api CDN.

use mockito::{Mock, Server, ServerGuard};
use prophet_says::config::Config;
use prophet_says::models::{Edition, Language};
use prophet_says::search::{HadithContainer, SearchPhase, NOT_FOUND_MESSAGE, UNAVAILABLE_MESSAGE};
use prophet_says::sources::{CdnSource, FetchOutcome, HadithSource, SourceError};
use prophet_says::ui::card::{render_card, CardFields};
use prophet_says::utils::HttpClient;
use prophet_says::{SearchError, SearchOutcome};
use std::sync::Arc;

const ABU_DAWUD_1035: &str = r#"{
    "metadata": {
        "name": "Sunan Abu Dawud",
        "section": {"2": "Prayer (Kitab Al-Salat)"}
    },
    "hadiths": [
        {
            "hadithnumber": 1035,
            "arabicnumber": 1035,
            "text": "Narrated Abdullah ibn Buhaynah: The Prophet prayed two rak'ahs.",
            "grades": [{"name": "Al-Albani", "grade": "Sahih"}],
            "reference": {"book": 2, "hadith": 646}
        }
    ]
}"#;

fn source_for(server: &ServerGuard) -> CdnSource {
    let base = format!("{}/editions", server.url());
    CdnSource::with_base_url(&base, Arc::new(HttpClient::new().unwrap())).unwrap()
}

async fn mock_document(server: &mut ServerGuard, path: &str, status: usize, body: &str) -> Mock {
    server
        .mock("GET", path)
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await
}

#[tokio::test]
async fn test_lookup_abu_dawud_1035() {
    let mut server = Server::new_async().await;
    let mock = mock_document(&mut server, "/editions/eng-abudawud/1035.json", 200, ABU_DAWUD_1035).await;
    let source = source_for(&server);

    let mut page = HadithContainer::new(Edition::AbuDawud, Language::English);
    page.form_mut().set_query("1035");
    let outcome = page.submit(&source).await;

    mock.assert_async().await;
    assert!(matches!(outcome, SearchOutcome::Found(_)));
    assert_eq!(page.form().phase(), SearchPhase::Success);
    assert!(!page.form().is_loading());

    let card = page.card().unwrap();
    assert_eq!(card.collection, "Sunan Abu Dawud");
    assert_eq!(card.section, "Prayer (Kitab Al-Salat)");
    assert_eq!(card.hadith_number, "1035");
    assert_eq!(card.grades.as_ref().unwrap().len(), 1);
    assert_eq!(card.book_reference, "2");
    assert_eq!(card.hadith_reference, "646");

    let banner = page.form().banner().unwrap().to_string();
    assert_eq!(banner, "Showing hadith #1035 from Abu Dawud (English)");

    let rendered = render_card(&card, 60, false);
    assert!(rendered.contains("• Al-Albani: Sahih"));
}

#[tokio::test]
async fn test_lookup_with_empty_hadith_list() {
    let mut server = Server::new_async().await;
    let mock = mock_document(
        &mut server,
        "/editions/eng-bukhari/99999999.json",
        200,
        r#"{"metadata": {"name": "Sahih al Bukhari", "section": {}}, "hadiths": []}"#,
    )
    .await;
    let source = source_for(&server);

    let mut page = HadithContainer::default();
    page.form_mut().set_query("99999999");
    let outcome = page.submit(&source).await;

    mock.assert_async().await;
    assert!(page.card().is_none());
    match outcome {
        SearchOutcome::Failed(error) => assert_eq!(error.to_string(), NOT_FOUND_MESSAGE),
        SearchOutcome::Found(_) => panic!("Expected not found"),
    }
    assert_eq!(page.form().phase(), SearchPhase::NotFound);
}

#[tokio::test]
async fn test_untranslated_document_is_unavailable() {
    let mut server = Server::new_async().await;
    let mock = mock_document(&mut server, "/editions/urd-qudsi/3.json", 404, "Not Found").await;
    let source = source_for(&server);

    let mut page = HadithContainer::new(Edition::Qudsi, Language::Urdu);
    page.form_mut().set_query("3");
    let outcome = page.submit(&source).await;

    mock.assert_async().await;
    assert_eq!(
        outcome,
        SearchOutcome::Failed(SearchError::NotFoundOrUnavailable(
            prophet_says::search::Miss::Unavailable
        ))
    );
    assert_eq!(page.form().error().unwrap().to_string(), UNAVAILABLE_MESSAGE);
    assert!(page.card().is_none());
}

#[tokio::test]
async fn test_source_reports_status_and_parse_errors() {
    let mut server = Server::new_async().await;
    let _missing = mock_document(&mut server, "/editions/eng-malik/1.json", 404, "").await;
    let _broken = mock_document(&mut server, "/editions/eng-malik/2.json", 200, "<html>").await;
    let source = source_for(&server);

    let selection = prophet_says::models::SearchSelection::new("1", Edition::Malik, Language::English);
    match source.fetch(&selection).await {
        Err(SourceError::Api { status, url }) => {
            assert_eq!(status, 404);
            assert!(url.ends_with("/editions/eng-malik/1.json"));
        }
        other => panic!("Expected an API error, got {:?}", other),
    }

    let selection = prophet_says::models::SearchSelection::new("2", Edition::Malik, Language::English);
    assert!(matches!(
        source.fetch(&selection).await,
        Err(SourceError::Parse(_))
    ));
}

#[tokio::test]
async fn test_blank_query_never_hits_server() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", mockito::Matcher::Any)
        .expect(0)
        .create_async()
        .await;
    let source = source_for(&server);

    let mut page = HadithContainer::default();
    page.form_mut().set_query("   ");
    let outcome = page.submit(&source).await;

    mock.assert_async().await;
    assert_eq!(outcome, SearchOutcome::Failed(SearchError::EmptyQuery));
    assert_eq!(
        page.form().error().unwrap().to_string(),
        "Please enter a hadith number"
    );
}

#[tokio::test]
async fn test_query_is_trimmed_in_request_path() {
    let mut server = Server::new_async().await;
    let mock = mock_document(&mut server, "/editions/ara-muslim/8.json", 200, ABU_DAWUD_1035).await;
    let source = source_for(&server);

    let mut page = HadithContainer::new(Edition::Muslim, Language::Arabic);
    page.form_mut().set_query("  8 ");
    page.submit(&source).await;

    mock.assert_async().await;
    assert_eq!(page.form().banner().unwrap().number, "8");
}

#[tokio::test]
async fn test_first_hadith_is_used() {
    let mut server = Server::new_async().await;
    let body = r#"{
        "metadata": {"name": "Jami At-Tirmidhi", "section": {"1": "Purification"}},
        "hadiths": [
            {"hadithnumber": 10, "text": "first"},
            {"hadithnumber": 11, "text": "second"}
        ]
    }"#;
    let _mock = mock_document(&mut server, "/editions/eng-tirmidhi/10.json", 200, body).await;
    let source = source_for(&server);

    let mut page = HadithContainer::new(Edition::Tirmidhi, Language::English);
    page.form_mut().set_query("10");
    page.submit(&source).await;

    let card = page.card().unwrap();
    assert_eq!(card.hadith_number, "10");
    assert_eq!(card.text, "first");
}

#[tokio::test]
async fn test_missing_fields_render_placeholder() {
    let mut server = Server::new_async().await;
    let body = r#"{
        "metadata": {"name": "Sunan an-Nasa'i"},
        "hadiths": [{"hadithnumber": 5, "text": "...", "reference": {"hadith": 5}}]
    }"#;
    let _mock = mock_document(&mut server, "/editions/eng-nasai/5.json", 200, body).await;
    let source = source_for(&server);

    let mut page = HadithContainer::new(Edition::Nasai, Language::English);
    page.form_mut().set_query("5");
    page.submit(&source).await;

    let card = page.card().unwrap();
    assert_eq!(card.book_reference, "NA");
    assert_eq!(card.hadith_reference, "5");
    assert_eq!(card.section, "NA");
    assert_eq!(card.grades, None);
    assert_eq!(card.collection, "Sunan an-Nasa'i");
}

#[tokio::test]
async fn test_mistyped_fields_still_show_card() {
    let mut server = Server::new_async().await;
    let body = r#"{
        "metadata": {"name": "Sunan Abu Dawud", "section": {"2": "Prayer"}},
        "hadiths": [{"hadithnumber": 1035, "number": 1035, "text": "...",
                     "grades": {}, "reference": "2/646"}]
    }"#;
    let _mock = mock_document(&mut server, "/editions/eng-abudawud/1035.json", 200, body).await;
    let source = source_for(&server);

    let mut page = HadithContainer::new(Edition::AbuDawud, Language::English);
    page.form_mut().set_query("1035");
    let outcome = page.submit(&source).await;

    assert!(matches!(outcome, SearchOutcome::Found(_)));
    let card = page.card().unwrap();
    assert_eq!(card.hadith_number, "1035");
    assert_eq!(card.book_reference, "NA");
    assert_eq!(card.hadith_reference, "NA");
    assert_eq!(card.grades, None);
}

#[tokio::test]
async fn test_failure_then_success() {
    let mut server = Server::new_async().await;
    let _broken = mock_document(&mut server, "/editions/eng-abudawud/1.json", 500, "").await;
    let _ok = mock_document(&mut server, "/editions/eng-abudawud/1035.json", 200, ABU_DAWUD_1035).await;
    let source = source_for(&server);

    let mut page = HadithContainer::new(Edition::AbuDawud, Language::English);
    page.form_mut().set_query("1");
    page.submit(&source).await;
    assert!(page.form().error().is_some());
    assert!(page.card().is_none());

    page.form_mut().set_query("1035");
    page.submit(&source).await;
    assert!(page.form().error().is_none());
    assert_eq!(page.card().unwrap().hadith_number, "1035");

    page.form_mut().set_query("1");
    page.submit(&source).await;
    assert!(page.form().banner().is_none());
    assert_eq!(page.card().unwrap().hadith_number, "1035");
}

#[tokio::test]
async fn test_source_from_config() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/editions/eng-nawawi/1.json")
        .match_header("user-agent", "prophet-says-test/1.0")
        .with_status(200)
        .with_body(ABU_DAWUD_1035)
        .create_async()
        .await;

    let mut config = Config::default();
    config.api.base_url = format!("{}/editions/", server.url());
    config.api.user_agent = "prophet-says-test/1.0".to_string();
    config.api.timeout_secs = 5;
    let source = CdnSource::from_config(&config).unwrap();

    let selection = prophet_says::models::SearchSelection::new("1", Edition::Nawawi, Language::English);
    assert!(matches!(
        source.fetch(&selection).await,
        Ok(FetchOutcome::Found(_))
    ));
    mock.assert_async().await;
}

#[test]
fn test_preview_card_renders() {
    let card = render_card(&CardFields::preview(), 48, false);
    assert!(card.contains("Sunan Abu Dawud"));
    assert!(card.contains("Zubair Ali Zai"));
}
