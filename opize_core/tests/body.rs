use http::header::CONTENT_TYPE;
use opize_core::prelude::*;
use opize_test_support::{MockReply, assert_request, mock};
use serde_json::json;

#[tokio::test]
async fn patch_body_drops_unset_fields() {
    let (transport, handle) = mock().reply(MockReply::ok_json("{}")).build();
    let client = Client::with_transport(ClientOptions::new(), transport);

    client
        .project()
        .patch(
            "p",
            ProjectPatch {
                name: Some("Renamed".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let recorded = handle.recorded();
    assert_request(&recorded[0])
        .header(CONTENT_TYPE, "application/json")
        .body_json(json!({"name": "Renamed"}));
    handle.finish();
}

#[tokio::test]
async fn empty_patch_serializes_to_an_empty_object() {
    let (transport, handle) = mock().reply(MockReply::ok_json("{}")).build();
    let client = Client::with_transport(ClientOptions::new(), transport);

    client
        .project()
        .patch("p", ProjectPatch::default())
        .await
        .unwrap();

    let recorded = handle.recorded();
    assert_request(&recorded[0]).body_json(json!({}));
    handle.finish();
}

#[tokio::test]
async fn marketing_accept_distinguishes_null_from_absent() {
    let (transport, handle) = mock()
        .replies([MockReply::ok_json("{}"), MockReply::ok_json("{}")])
        .build();
    let client = Client::with_transport(ClientOptions::new(), transport);

    // explicit null revokes the opt-in
    client
        .user()
        .patch(
            UserId::Me,
            UserPatch {
                marketing_accept: Some(None),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    // unset leaves it untouched
    client
        .user()
        .patch(UserId::Me, UserPatch::default())
        .await
        .unwrap();

    let recorded = handle.recorded();
    assert_request(&recorded[0]).body_json(json!({"marketingAccept": null}));
    assert_request(&recorded[1]).body_json(json!({}));
    handle.finish();
}

#[tokio::test]
async fn post_project_uses_wire_field_names() {
    let (transport, handle) = mock().reply(MockReply::ok_json("{}")).build();
    let client = Client::with_transport(ClientOptions::new(), transport);

    client
        .project()
        .post(NewProject {
            code: "p1".into(),
            name: "Project One".into(),
            url: "https://p1.example".into(),
            icon_url: "https://p1.example/icon.png".into(),
            banner_url: "https://p1.example/banner.png".into(),
            rule_url: "https://p1.example/rules".into(),
            status: ProjectStatus::Show,
            user_id: 7,
            desc: None,
        })
        .await
        .unwrap();

    let recorded = handle.recorded();
    assert_request(&recorded[0]).body_json(json!({
        "code": "p1",
        "name": "Project One",
        "url": "https://p1.example",
        "iconUrl": "https://p1.example/icon.png",
        "bannerUrl": "https://p1.example/banner.png",
        "ruleUrl": "https://p1.example/rules",
        "status": "SHOW",
        "userId": 7
    }));
    handle.finish();
}

#[tokio::test]
async fn bodyless_requests_send_neither_body_nor_content_type() {
    let (transport, handle) = mock()
        .reply(MockReply::ok_json(r#"{"projects":[]}"#))
        .build();
    let client = Client::with_transport(ClientOptions::new(), transport);

    let list = client.project().list().await.unwrap();
    assert!(list.projects.is_empty());

    let recorded = handle.recorded();
    assert_request(&recorded[0]).no_body().no_header(CONTENT_TYPE);
    handle.finish();
}

#[tokio::test]
async fn notion_page_patch_uses_wire_field_names() {
    let (transport, handle) = mock().reply(MockReply::ok_json("{}")).build();
    let client = Client::with_transport(ClientOptions::new(), transport);

    client
        .dashboard()
        .notion()
        .page()
        .patch(
            "landing",
            NotionPagePatch {
                page_code: Some("landing-v2".into()),
                re_caching: Some(true),
            },
        )
        .await
        .unwrap();

    let recorded = handle.recorded();
    assert_request(&recorded[0])
        .path("/v1/dashboard/notion/page/landing")
        .body_json(json!({"pageCode": "landing-v2", "reCaching": true}));
    handle.finish();
}
