use http::Method;
use opize_core::prelude::*;
use opize_test_support::{MockReply, assert_request, json_bytes, mock};

const USER_JSON: &str = r#"{
    "id": 7,
    "email": "a@opize.me",
    "name": "A",
    "imageUrl": "https://img.example/a.png",
    "role": ["user"],
    "lastLogin": "2024-03-01T09:30:00.000Z",
    "marketingAccept": "2024-01-10T00:00:00.000Z",
    "currency": "KRW",
    "status": "ACTIVE"
}"#;

const PROJECT_JSON: &str = r#"{
    "id": 1,
    "code": "p1",
    "name": "Project One",
    "url": "https://p1.example",
    "iconUrl": "https://p1.example/icon.png",
    "bannerUrl": "https://p1.example/banner.png",
    "ruleUrl": "https://p1.example/rules",
    "desc": "first",
    "status": "SHOW"
}"#;

#[tokio::test]
async fn get_user_decodes_the_user_object() {
    let (transport, handle) = mock().reply(MockReply::ok_json(USER_JSON)).build();
    let client = Client::with_transport(ClientOptions::new(), transport);

    let user = client.user().get(UserId::Me).await.unwrap();

    assert_eq!(user.id, 7);
    assert_eq!(user.email, "a@opize.me");
    assert!(user.marketing_accept.is_some());
    handle.finish();
}

#[tokio::test]
async fn list_projects_decodes_the_wrapper() {
    let (transport, handle) = mock()
        .reply(MockReply::ok_json(format!(
            r#"{{"projects":[{PROJECT_JSON}]}}"#
        )))
        .build();
    let client = Client::with_transport(ClientOptions::new(), transport);

    let list = client.project().list().await.unwrap();

    assert_eq!(list.projects.len(), 1);
    assert_eq!(list.projects[0].code, "p1");
    assert_eq!(list.projects[0].status, ProjectStatus::Show);
    handle.finish();
}

#[tokio::test]
async fn user_oauths_decodes_grants_with_projects() {
    let (transport, handle) = mock()
        .reply(MockReply::ok_json(format!(
            r#"{{"oauths":[{{"id":3,"createdAt":"2024-02-02T12:00:00.000Z","project":{PROJECT_JSON}}}]}}"#
        )))
        .build();
    let client = Client::with_transport(ClientOptions::new(), transport);

    let grants = client.user().oauths(UserId::Id(7)).await.unwrap();

    assert_eq!(grants.oauths.len(), 1);
    assert_eq!(grants.oauths[0].project.code, "p1");

    let recorded = handle.recorded();
    assert_request(&recorded[0])
        .method(Method::GET)
        .path("/v1/user/7/oauth");
    handle.finish();
}

#[tokio::test]
async fn project_oauth_issues_a_token() {
    let (transport, handle) = mock()
        .reply(MockReply::ok_json(json_bytes(
            &serde_json::json!({"token": "t-123"}),
        )))
        .build();
    let client = Client::with_transport(ClientOptions::new(), transport);

    let token = client.project().oauth().post("p1").await.unwrap();

    assert_eq!(token.token, "t-123");

    let recorded = handle.recorded();
    assert_request(&recorded[0])
        .method(Method::POST)
        .path("/v1/project/p1/oauth")
        .no_body();
    handle.finish();
}

#[tokio::test]
async fn oauth_verify_posts_the_redirect_url() {
    let (transport, handle) = mock()
        .reply(MockReply::ok_json(r#"{"token":"t-456"}"#))
        .build();
    let client = Client::with_transport(ClientOptions::new(), transport);

    let token = client
        .oauth()
        .verify("p1", "https://app.example/callback")
        .await
        .unwrap();

    assert_eq!(token.token, "t-456");

    let recorded = handle.recorded();
    assert_request(&recorded[0])
        .method(Method::POST)
        .path("/v1/oauth/verify/p1")
        .body_json(serde_json::json!({"redirectUrl": "https://app.example/callback"}));
    handle.finish();
}

#[tokio::test]
async fn oauth_post_exchanges_tokens() {
    let (transport, handle) = mock()
        .reply(MockReply::ok_json(r#"{"token":"t-789"}"#))
        .build();
    let client = Client::with_transport(ClientOptions::new(), transport);

    let token = client
        .oauth()
        .post(OauthTokenRequest {
            generate_token: "gen".into(),
            server_secret_token: "sec".into(),
            redirect_url: "https://app.example/callback".into(),
        })
        .await
        .unwrap();

    assert_eq!(token.token, "t-789");

    let recorded = handle.recorded();
    assert_request(&recorded[0]).method(Method::POST).path("/v1/oauth").body_json(
        serde_json::json!({
            "generateToken": "gen",
            "serverSecretToken": "sec",
            "redirectUrl": "https://app.example/callback"
        }),
    );
    handle.finish();
}
