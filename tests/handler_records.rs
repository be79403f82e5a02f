mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

#[tokio::test]
async fn test_records_single_match() {
    let server = common::create_test_server();

    let response = server
        .post("/records")
        .json(&json!({
            "startDate": "2017-01-27",
            "endDate": "2017-01-29",
            "minCount": 0,
            "maxCount": 1000
        }))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.text(),
        r#"{"code":0,"msg":"Success","records":[{"key":"TAKwGc6Jr4i8Z487","createdAt":"2017-01-28T01:22:14.398Z","totalCount":310}]}"#
    );
}

#[tokio::test]
async fn test_records_wide_window_returns_all() {
    let server = common::create_test_server();

    let response = server
        .post("/records")
        .text(r#"{"startDate": "2016-01-01", "endDate": "2019-01-29", "minCount": 0, "maxCount": 3000}"#)
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.text(),
        r#"{"code":0,"msg":"Success","records":[{"key":"TAKwGc6Jr4i8Z487","createdAt":"2017-01-28T01:22:14.398Z","totalCount":310},{"key":"LSyjwviN","createdAt":"2016-12-30T01:31:07.831Z","totalCount":116},{"key":"wIFZewQA","createdAt":"2016-03-18T23:32:55.236Z","totalCount":2863}]}"#
    );
}

#[tokio::test]
async fn test_records_no_match_returns_empty_array() {
    let server = common::create_test_server();

    let response = server
        .post("/records")
        .json(&json!({
            "startDate": "2020-01-01",
            "endDate": "2020-12-31",
            "minCount": 0,
            "maxCount": 1000
        }))
        .await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["code"], 0);
    assert_eq!(json["records"], json!([]));
}

#[tokio::test]
async fn test_records_count_bounds_are_inclusive() {
    let server = common::create_test_server();

    let response = server
        .post("/records")
        .json(&json!({
            "startDate": "2016-01-01",
            "endDate": "2019-01-01",
            "minCount": 116,
            "maxCount": 310
        }))
        .await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    let keys: Vec<&str> = json["records"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["key"].as_str().unwrap())
        .collect();
    assert_eq!(keys, vec!["TAKwGc6Jr4i8Z487", "LSyjwviN"]);
}

#[tokio::test]
async fn test_records_method_not_allowed() {
    let server = common::create_test_server();

    for method in [Method::GET, Method::PUT, Method::DELETE] {
        let response = server
            .method(method, "/records")
            .text(r#"{"startDate": "2016-01-2x", "endDate": "2018-02-02", "minCount": 2700, "maxCount": 3000}"#)
            .await;

        response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(
            response.text(),
            r#"{"code":1,"msg":"the method is not allowed for this endpoint.","records":null}"#
        );
    }
}

#[tokio::test]
async fn test_records_missing_field() {
    let server = common::create_test_server();

    let response = server
        .post("/records")
        .text(r#"{"startDate": "2016-01-02", "minCount": 2700, "maxCount": 3000}"#)
        .await;

    response.assert_status_bad_request();
    assert_eq!(
        response.text(),
        r#"{"code":2,"msg":"endDate field is missing.","records":null}"#
    );
}

#[tokio::test]
async fn test_records_invalid_date() {
    let server = common::create_test_server();

    let response = server
        .post("/records")
        .text(r#"{"startDate": "2016-01-2x", "endDate": "2018-02-02", "minCount": 2700, "maxCount": 3000}"#)
        .await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["code"], 2);
    assert!(
        json["msg"]
            .as_str()
            .unwrap()
            .starts_with("parsing date \"2016-01-2x\" as \"YYYY-MM-DD\"")
    );
    assert!(json["records"].is_null());
}

#[tokio::test]
async fn test_records_malformed_json() {
    let server = common::create_test_server();

    let response = server.post("/records").text("{not json").await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["code"], 2);
    assert!(json["records"].is_null());
}

#[tokio::test]
async fn test_records_storage_failure() {
    let server = common::create_failing_server();

    let response = server
        .post("/records")
        .json(&json!({
            "startDate": "2017-01-27",
            "endDate": "2017-01-29",
            "minCount": 0,
            "maxCount": 1000
        }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.text(),
        r#"{"code":3,"msg":"internal server error occurred.","records":null}"#
    );
}

#[tokio::test]
async fn test_records_content_type_is_json() {
    let server = common::create_test_server();

    let response = server.get("/records").await;

    assert_eq!(response.header("content-type"), "application/json");
}

#[tokio::test]
async fn test_records_null_field_is_missing() {
    let server = common::create_test_server();

    let response = server
        .post("/records")
        .text(r#"{"startDate": null, "endDate": "2018-02-02", "minCount": 2700, "maxCount": 3000}"#)
        .await;

    response.assert_status_bad_request();
    assert_eq!(
        response.text(),
        r#"{"code":2,"msg":"startDate field is missing.","records":null}"#
    );
}
