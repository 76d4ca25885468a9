use http::header::CONTENT_TYPE;
use http::{HeaderValue, StatusCode};
use opize_core::prelude::*;
use opize_test_support::{MockReply, mock};

#[tokio::test]
async fn structured_404_maps_to_http_response() {
    let (transport, handle) = mock()
        .reply(MockReply::json(StatusCode::NOT_FOUND, r#"{"code":"X"}"#))
        .build();
    let client = Client::with_transport(ClientOptions::new(), transport);

    let err = client.project().get("abc").await.unwrap_err();

    assert!(err.is_http_response());
    assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    assert_eq!(err.error_code(), Some("X"));
    match err {
        OpizeError::HttpResponse { status, code, .. } => {
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(code, "X");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    handle.finish();
}

#[tokio::test]
async fn unparseable_500_maps_to_unknown_http_response() {
    let (transport, handle) = mock()
        .reply(
            MockReply::status(StatusCode::INTERNAL_SERVER_ERROR)
                .with_body("<html>oops</html>")
                .with_header(CONTENT_TYPE, HeaderValue::from_static("text/html")),
        )
        .build();
    let client = Client::with_transport(ClientOptions::new(), transport);

    let err = client.project().get("abc").await.unwrap_err();

    match err {
        OpizeError::UnknownHttpResponse { status, body, .. } => {
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert!(body.contains("oops"), "preview lost the body: {body}");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    handle.finish();
}

#[tokio::test]
async fn error_payload_without_code_is_unknown() {
    let (transport, handle) = mock()
        .reply(MockReply::json(
            StatusCode::BAD_REQUEST,
            r#"{"detail":"nope"}"#,
        ))
        .build();
    let client = Client::with_transport(ClientOptions::new(), transport);

    let err = client.project().get("abc").await.unwrap_err();

    assert!(matches!(err, OpizeError::UnknownHttpResponse { .. }), "got {err:?}");
    assert_eq!(err.error_code(), None);
    handle.finish();
}

#[tokio::test]
async fn invalid_success_payload_is_a_decode_error() {
    let (transport, handle) = mock().reply(MockReply::ok_json("not-json")).build();
    let client = Client::with_transport(ClientOptions::new(), transport);

    let err = client.project().get("abc").await.unwrap_err();

    match err {
        OpizeError::Decode { body, .. } => assert_eq!(body, "not-json"),
        other => panic!("unexpected error: {other:?}"),
    }
    handle.finish();
}

#[tokio::test]
async fn empty_success_body_decodes_as_empty_object() {
    let (transport, handle) = mock().reply(MockReply::status(StatusCode::NO_CONTENT)).build();
    let client = Client::with_transport(ClientOptions::new(), transport);

    client.project().delete("abc").await.unwrap();
    handle.finish();
}
