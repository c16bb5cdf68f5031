// End to end tests through the full router (CORS and trace layers included) over an
// in-memory record slot.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use rstest::{fixture, rstest};
use tower::ServiceExt;

use crate::shell::http::router;
use crate::tests::fixtures::state::{json_body, make_test_state};

#[fixture]
fn app() -> Router {
    router(make_test_state())
}

fn post(uri: &str) -> Request<Body> {
    Request::post(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: &'static str) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

#[rstest]
#[tokio::test]
async fn it_should_share_one_aggregate_across_all_endpoints(app: Router) {
    for body in [r#"{"page":"about"}"#, r#"{"page":"about"}"#] {
        let response = app
            .clone()
            .oneshot(post_json("/api/analytics/pageview", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
    let click = app.clone().oneshot(post("/api/analytics/click")).await.unwrap();
    assert_eq!(json_body(click).await["totalClicks"], 1);

    let response = app.oneshot(get("/api/analytics")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    assert_eq!(json["totalPageViews"], 2);
    assert_eq!(json["totalClicks"], 1);
    assert_eq!(json["totalVisitors"], 0);
    assert_eq!(json["pageStats"], serde_json::json!({ "about": { "views": 2 } }));
}

#[rstest]
#[tokio::test]
async fn it_should_zero_everything_after_reset(app: Router) {
    app.clone().oneshot(post("/api/analytics/visitor")).await.unwrap();
    app.clone().oneshot(post("/api/analytics/pageview")).await.unwrap();
    app.clone().oneshot(post("/api/analytics/click")).await.unwrap();

    let reset = app.clone().oneshot(post("/api/analytics/reset")).await.unwrap();
    assert_eq!(reset.status(), StatusCode::OK);

    let json = json_body(app.oneshot(get("/api/analytics")).await.unwrap()).await;
    assert_eq!(json["totalVisitors"], 0);
    assert_eq!(json["totalPageViews"], 0);
    assert_eq!(json["totalClicks"], 0);
    assert_eq!(json["pageStats"], serde_json::json!({}));
}

#[rstest]
#[tokio::test]
async fn it_should_allow_cross_origin_callers(app: Router) {
    let response = app
        .oneshot(
            Request::get("/api/analytics")
                .header(header::ORIGIN, "https://portfolio.example")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
}

#[rstest]
#[tokio::test]
async fn it_should_answer_cors_preflight_requests(app: Router) {
    let response = app
        .oneshot(
            Request::options("/api/analytics/pageview")
                .header(header::ORIGIN, "https://portfolio.example")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key(header::ACCESS_CONTROL_ALLOW_METHODS));
}

#[rstest]
#[tokio::test]
async fn it_should_reject_the_wrong_method(app: Router) {
    let response = app.oneshot(get("/api/analytics/visitor")).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
