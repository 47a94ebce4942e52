//! HTTP contract tests for the prediction client against a mock service.

use spi_gui::domain::{Choice, Ethnicity, PerformanceLevel, PredictionRequest, REQUEST_FIELDS, Score};
use spi_gui::error::Error;
use spi_gui::services::{ClientConfig, PredictionClient};
use std::collections::HashMap;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(endpoint: String) -> PredictionClient {
    PredictionClient::new(ClientConfig {
        endpoint,
        delay_ms: 0,
    })
    .expect("valid endpoint")
}

async fn mock_service(status: u16, body: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict_api"))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(&server)
        .await;
    server
}

fn endpoint_of(server: &MockServer) -> String {
    format!("{}/predict_api", server.uri())
}

#[tokio::test]
async fn success_is_classified_and_formatted() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict_api"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "prediction": 72.5 })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(endpoint_of(&server));
    let outcome = client
        .predict(&PredictionRequest::default())
        .await
        .expect("prediction");

    assert_eq!(outcome.level, PerformanceLevel::Good);
    assert_eq!(outcome.level.label(), "Good");
    assert_eq!(outcome.score_text(), "72.50");
}

#[tokio::test]
async fn request_body_carries_exactly_the_seven_fields() {
    let server = mock_service(200, r#"{"prediction": 55.0}"#).await;
    let client = client_for(endpoint_of(&server));

    let request = PredictionRequest {
        ethnicity: Ethnicity::from_wire("group C").expect("known group"),
        reading_score: Score::new(88),
        writing_score: Score::new(0),
        ..PredictionRequest::default()
    };
    client.predict(&request).await.expect("prediction");

    let received = server.received_requests().await.expect("recording enabled");
    assert_eq!(received.len(), 1);

    let body = String::from_utf8(received[0].body.clone()).expect("utf-8 body");
    let url = reqwest::Url::parse(&format!("http://form.local/?{body}")).expect("form body");
    let fields: HashMap<String, String> = url.query_pairs().into_owned().collect();

    assert_eq!(fields.len(), REQUEST_FIELDS.len());
    for key in REQUEST_FIELDS {
        assert!(fields.contains_key(key), "missing {key}");
    }
    assert_eq!(fields["gender"], "male");
    assert_eq!(fields["ethnicity"], "group C");
    assert_eq!(fields["parental_level_of_education"], "associate's degree");
    assert_eq!(fields["lunch"], "free/reduced");
    assert_eq!(fields["test_preparation_course"], "none");
    assert_eq!(fields["reading_score"], "88");
    assert_eq!(fields["writing_score"], "0");
}

#[tokio::test]
async fn non_200_keeps_body_verbatim() {
    let server = mock_service(404, "model error").await;
    let client = client_for(endpoint_of(&server));

    let error = client
        .predict(&PredictionRequest::default())
        .await
        .expect_err("server error");

    match error {
        Error::Server { status, body } => {
            assert_eq!(status, 404);
            assert_eq!(body, "model error");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn malformed_body_is_an_explicit_error() {
    for body in [r#"{"score": 10}"#, "not json", r#"{"prediction": "high"}"#] {
        let server = mock_service(200, body).await;
        let client = client_for(endpoint_of(&server));

        let error = client
            .predict(&PredictionRequest::default())
            .await
            .expect_err("malformed");
        assert!(
            matches!(error, Error::MalformedResponse { .. }),
            "{body} gave {error}"
        );
    }
}

#[tokio::test]
async fn refused_connection_is_unreachable() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        listener.local_addr().expect("addr").port()
    };
    let endpoint = format!("http://127.0.0.1:{port}/predict_api");
    let client = client_for(endpoint.clone());

    let error = client
        .predict(&PredictionRequest::default())
        .await
        .expect_err("unreachable");

    match error {
        Error::Unreachable { endpoint: reported } => assert_eq!(reported, endpoint),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn boundary_scores_from_the_service_use_the_upper_tier() {
    for (score, level) in [
        (40.0, PerformanceLevel::Average),
        (60.0, PerformanceLevel::Good),
        (80.0, PerformanceLevel::Excellent),
        (39.99, PerformanceLevel::Poor),
    ] {
        let body = serde_json::json!({ "prediction": score }).to_string();
        let server = mock_service(200, &body).await;
        let client = client_for(endpoint_of(&server));

        let outcome = client
            .predict(&PredictionRequest::default())
            .await
            .expect("prediction");
        assert_eq!(outcome.level, level, "score {score}");
    }
}
