// Rust guideline compliant 2026-10-18

//! Integration tests for the HTTP tracker against a loopback responder.

mod common;

use common::{basic_env, bearer_env, closed_base_url, serve};
use jira_util_client::HttpTracker;
use jira_util_core::{active_epics, BacklogPosition, Error, IssueKey, Tracker};
use serde_json::json;

#[test]
fn test_create_issue_with_basic_auth() {
    let server = serve(vec![(201, r#"{"id":"10001","key":"MAR-42","self":"x"}"#)]);
    let tracker = HttpTracker::new(&basic_env(&server.base_url)).unwrap();
    let body = json!({"fields": {"summary": "Login", "issuetype": {"name": "Story"}}});

    let key = tracker.create_issue(&body).unwrap();

    assert_eq!(key, IssueKey::from("MAR-42"));
    let requests = server.finish();
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].target, "/rest/api/2/issue");
    assert_eq!(requests[0].header("authorization"), Some("Basic Ym9iOnNlY3JldA=="));
    assert_eq!(requests[0].json(), body);
}

#[test]
fn test_get_issue_with_bearer_auth() {
    let server = serve(vec![(200, r#"{"key":"MAR-7","fields":{"summary":"Cart"}}"#)]);
    let tracker = HttpTracker::new(&bearer_env(&server.base_url)).unwrap();

    let issue = tracker.get_issue(&IssueKey::from("MAR-7")).unwrap();

    assert_eq!(issue["fields"]["summary"], "Cart");
    let requests = server.finish();
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].target, "/rest/api/2/issue/MAR-7");
    assert_eq!(requests[0].header("authorization"), Some("Bearer tok-123"));
}

#[test]
fn test_update_issue_accepts_empty_response() {
    let server = serve(vec![(204, "")]);
    let tracker = HttpTracker::new(&basic_env(&server.base_url)).unwrap();
    let body = json!({"fields": {"customfield_12345": "MAR-2"}});

    tracker.update_issue(&IssueKey::from("MAR-3"), &body).unwrap();

    let requests = server.finish();
    assert_eq!(requests[0].method, "PUT");
    assert_eq!(requests[0].target, "/rest/api/2/issue/MAR-3");
    assert_eq!(requests[0].json(), body);
}

#[test]
fn test_client_error_is_remote_rejected() {
    let server = serve(vec![(
        400,
        r#"{"errorMessages":[],"errors":{"customfield_12345":"Epic does not exist"}}"#,
    )]);
    let tracker = HttpTracker::new(&basic_env(&server.base_url)).unwrap();

    let err = tracker.create_issue(&json!({"fields": {}})).unwrap_err();

    match err {
        Error::RemoteRejected {
            status,
            method,
            url,
            payload,
        } => {
            assert_eq!(status, 400);
            assert_eq!(method, "POST");
            assert_eq!(url, format!("{}/rest/api/2/issue", server.base_url));
            assert_eq!(payload["errors"]["customfield_12345"], "Epic does not exist");
        }
        other => panic!("expected RemoteRejected, got {other:?}"),
    }
    server.finish();
}

#[test]
fn test_server_error_is_transport_failure() {
    let server = serve(vec![(503, r#"{"message":"maintenance"}"#)]);
    let tracker = HttpTracker::new(&basic_env(&server.base_url)).unwrap();

    let err = tracker.get_issue(&IssueKey::from("MAR-1")).unwrap_err();

    assert!(matches!(err, Error::TransportFailure { ref method, .. } if method == "GET"));
    server.finish();
}

#[test]
fn test_connection_refused_is_transport_failure() {
    let tracker = HttpTracker::new(&basic_env(&closed_base_url())).unwrap();

    let err = tracker.get_issue(&IssueKey::from("MAR-1")).unwrap_err();

    assert!(matches!(err, Error::TransportFailure { .. }));
}

#[test]
fn test_active_epics_search_query() {
    let server = serve(vec![(
        200,
        r#"{"total":2,"issues":[{"key":"MAR-2","fields":{"summary":"Checkout"}},{"key":"MAR-5","fields":{"summary":"Search"}}]}"#,
    )]);
    let tracker = HttpTracker::new(&basic_env(&server.base_url)).unwrap();

    let epics = active_epics(&tracker, "MAR").unwrap();

    assert_eq!(epics.len(), 2);
    assert_eq!(epics[0].summary(), Some("Checkout"));
    let requests = server.finish();
    assert_eq!(
        requests[0].target,
        "/rest/api/2/search?jql=issuetype+%3D+Epic+AND+project+%3D+MAR&fields=key%2Csummary&maxResults=100"
    );
}

#[test]
fn test_future_sprints_in_returned_order() {
    let server = serve(vec![(
        200,
        r#"{"maxResults":50,"values":[{"id":31,"name":"Sprint 31","state":"future"},{"id":30,"name":"Sprint 30","state":"future"}]}"#,
    )]);
    let tracker = HttpTracker::new(&basic_env(&server.base_url)).unwrap();

    let sprints = tracker.future_sprints("999").unwrap();

    let ids: Vec<u64> = sprints.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![31, 30]);
    let requests = server.finish();
    assert_eq!(requests[0].target, "/rest/agile/1.0/board/999/sprint?state=future");
}

#[test]
fn test_rank_top_of_backlog() {
    let server = serve(vec![
        (200, r#"{"total":3,"issues":[{"key":"MAR-1"},{"key":"MAR-2"}]}"#),
        (204, ""),
    ]);
    let tracker = HttpTracker::new(&basic_env(&server.base_url)).unwrap();

    tracker
        .rank_backlog(&IssueKey::from("MAR-9"), "999", BacklogPosition::BeforeFirst)
        .unwrap();

    let requests = server.finish();
    assert_eq!(
        requests[0].target,
        "/rest/agile/1.0/board/999/backlog?startAt=0&maxResults=2&fields=key"
    );
    assert_eq!(requests[1].method, "POST");
    assert_eq!(requests[1].target, "/rest/agile/1.0/backlog/999/issue");
    assert_eq!(
        requests[1].json(),
        json!({"issues": ["MAR-9"], "rankBeforeIssue": "MAR-1"})
    );
}

#[test]
fn test_rank_bottom_of_backlog_skips_self() {
    let server = serve(vec![
        (200, r#"{"total":5,"issues":[]}"#),
        (200, r#"{"total":5,"issues":[{"key":"MAR-4"},{"key":"MAR-9"}]}"#),
        (204, ""),
    ]);
    let tracker = HttpTracker::new(&basic_env(&server.base_url)).unwrap();

    tracker
        .rank_backlog(&IssueKey::from("MAR-9"), "999", BacklogPosition::AfterLast)
        .unwrap();

    let requests = server.finish();
    assert_eq!(
        requests[0].target,
        "/rest/agile/1.0/board/999/backlog?startAt=0&maxResults=0&fields=key"
    );
    assert_eq!(
        requests[1].target,
        "/rest/agile/1.0/board/999/backlog?startAt=3&maxResults=2&fields=key"
    );
    assert_eq!(
        requests[2].json(),
        json!({"issues": ["MAR-9"], "rankAfterIssue": "MAR-4"})
    );
}

#[test]
fn test_rank_into_empty_backlog_has_no_anchor() {
    let server = serve(vec![(200, r#"{"total":0,"issues":[]}"#), (204, "")]);
    let tracker = HttpTracker::new(&basic_env(&server.base_url)).unwrap();

    tracker
        .rank_backlog(&IssueKey::from("MAR-9"), "999", BacklogPosition::BeforeFirst)
        .unwrap();

    let requests = server.finish();
    assert_eq!(requests[1].json(), json!({"issues": ["MAR-9"]}));
}

#[test]
fn test_comments_round_trip() {
    let server = serve(vec![
        (200, r#"{"comments":[{"id":"1","body":"first"}],"total":1}"#),
        (201, r#"{"id":"2","body":"looks good"}"#),
    ]);
    let tracker = HttpTracker::new(&bearer_env(&server.base_url)).unwrap();
    let key = IssueKey::from("MAR-3");

    let listed = tracker.comments(&key).unwrap();
    let added = tracker.add_comment(&key, "looks good").unwrap();

    assert_eq!(listed["comments"][0]["body"], "first");
    assert_eq!(added["id"], "2");
    let requests = server.finish();
    assert_eq!(requests[0].target, "/rest/api/2/issue/MAR-3/comment");
    assert_eq!(requests[1].method, "POST");
    assert_eq!(requests[1].json(), json!({"body": "looks good"}));
}
