// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use serde_json::{json, Value};

use crate::collaborators::{
    MemoryStore, Record, RecordStore, RecordingNotifier, RemoteCall, RemoteOutcome, ScriptedTransport,
};
use crate::config::consts::{DEFAULT_PORTFOLIO_TABLE, USER_TABLE};
use crate::config::ServiceConfig;
use crate::either::Either;
use crate::errors::ServiceError;
use crate::service::PortfolioService;
use crate::traits::Monadic;

/// Integration tests for the portfolio service using the in-memory collaborators
#[cfg(test)]
mod tests {
    use super::*;

    const HOST: i64 = 3;

    struct Harness {
        service: PortfolioService,
        transport: Arc<ScriptedTransport>,
        store: Arc<MemoryStore>,
        notifier: Arc<RecordingNotifier>,
    }

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => map,
            _ => panic!("fixture must be an object"),
        }
    }

    fn harness(outcomes: Vec<RemoteOutcome>) -> Harness {
        let transport = Arc::new(ScriptedTransport::new(outcomes));
        let store = Arc::new(MemoryStore::new());
        let notifier = Arc::new(RecordingNotifier::new());

        store
            .insert(USER_TABLE, record(json!({"username": "alice"})))
            .expect("Failed to seed user");

        let service = PortfolioService::new(
            ServiceConfig::new("https://moodle.example.edu/").with_host(HOST),
            transport.clone(),
            store.clone(),
            notifier.clone(),
        );

        Harness {
            service,
            transport,
            store,
            notifier,
        }
    }

    #[tokio::test]
    async fn test_request_pages_success_triggers_event() {
        let pages = json!([{"id": 1, "title": "Essay"}]);
        let h = harness(vec![RemoteOutcome::success(pages.clone())]);

        let result = h
            .service
            .request_pages_for_user(1, Some("essay"))
            .await
            .expect("lookup failed");

        assert!(result.is_acceptable());
        assert_eq!(result.into_inner(), Either::Right(pages.clone()));

        let calls = h.transport.calls().await;
        assert_eq!(
            calls,
            vec![(
                HOST,
                RemoteCall::new("mod/mahara/rpclib.php/get_views_for_user")
                    .param("alice")
                    .param("essay")
            )]
        );

        let events = h.notifier.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].0, "mahara_get_pages_for_user");
        assert_eq!(events[0].1, json!({"userid": 1, "pages": pages}));
    }

    #[tokio::test]
    async fn test_request_pages_failure_stays_left() {
        let h = harness(vec![RemoteOutcome::failure(json!({"code": 500}))]);

        let result = h.service.request_pages_for_user(1, None).await.unwrap();

        assert!(result.is_left());
        let message = result.fold(|error| format!("failed: {}", error["code"]), |_| "ok".to_string());
        assert_eq!(message, "failed: 500");
        assert!(h.notifier.events().is_empty());

        let calls = h.transport.calls().await;
        assert_eq!(calls[0].1.params[1], Value::Null);
    }

    #[tokio::test]
    async fn test_request_pages_unknown_user() {
        let h = harness(vec![]);

        let result = h.service.request_pages_for_user(99, None).await;

        assert!(matches!(result, Err(ServiceError::UnknownUser(99))));
        assert!(h.transport.calls().await.is_empty());
    }

    #[tokio::test]
    async fn test_submit_page_creates_then_updates_portfolio() {
        let page = json!({"id": 42, "title": "Essay", "url": "/view/42"});
        let renamed = json!({"id": 42, "title": "Essay v2", "url": "/view/42"});
        let h = harness(vec![
            RemoteOutcome::success(page),
            RemoteOutcome::success(renamed),
        ]);

        let first = h
            .service
            .request_submit_page_for_user(1, 42)
            .await
            .unwrap()
            .into_inner();
        let Either::Right(created) = first else {
            panic!("Expected Right for successful submit");
        };
        assert_eq!(created["id"], json!(1));
        assert_eq!(created["host"], json!(HOST));
        assert_eq!(created["userid"], json!(1));

        let second = h
            .service
            .request_submit_page_for_user(1, 42)
            .await
            .unwrap()
            .map(|portfolio| portfolio["title"].clone())
            .into_inner();
        assert_eq!(second, Either::Right(json!("Essay v2")));

        assert_eq!(h.store.count(DEFAULT_PORTFOLIO_TABLE), 1);
        assert_eq!(
            h.notifier.names(),
            vec![
                "mahara_submit_view_for_assessment",
                "mahara_portfolio_added",
                "mahara_submit_view_for_assessment",
                "mahara_portfolio_updated",
            ]
        );
    }

    #[tokio::test]
    async fn test_submit_page_failure_writes_nothing() {
        let h = harness(vec![RemoteOutcome::failure("view locked")]);

        let result = h.service.request_submit_page_for_user(1, 42).await.unwrap();

        assert_eq!(result.into_inner(), Either::Left(json!("view locked")));
        assert_eq!(h.store.count(DEFAULT_PORTFOLIO_TABLE), 0);
        assert!(h.notifier.events().is_empty());
    }

    #[tokio::test]
    async fn test_submit_page_with_malformed_response_is_error() {
        let h = harness(vec![RemoteOutcome::success(json!({"title": "no id"}))]);

        let result = h.service.request_submit_page_for_user(1, 42).await;

        assert!(matches!(result, Err(ServiceError::MalformedRecord(_))));
    }

    #[tokio::test]
    async fn test_release_with_and_without_user() {
        let h = harness(vec![
            RemoteOutcome::success(true),
            RemoteOutcome::failure("not submitted"),
        ]);

        let released = h
            .service
            .request_release_submitted_view(Some(1), 42, json!({"grade": "A"}))
            .await
            .unwrap();
        assert!(released.is_right());

        let refused = h
            .service
            .request_release_submitted_view(None, 43, Value::Null)
            .await
            .unwrap();
        assert!(refused.is_left());

        let calls = h.transport.calls().await;
        assert_eq!(calls[0].1.params, vec![json!(42), json!({"grade": "A"}), json!("alice")]);
        assert_eq!(calls[1].1.params, vec![json!(43), Value::Null, Value::Null]);

        let events = h.notifier.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].0, "mahara_release_submitted_view");
        assert_eq!(events[0].1, json!({"userid": 1, "viewid": 42, "host": HOST}));
    }

    #[test]
    fn test_get_portfolio_is_scoped_to_host() {
        let mut h = harness(vec![]);
        let saved = h
            .service
            .add_update_portfolio(1, &json!({"id": 7, "title": "T"}))
            .unwrap();
        let local_id = saved["id"].as_i64().unwrap();

        assert!(h.service.get_portfolio(&json!(7)).unwrap().is_defined());
        assert!(h.service.get_local_portfolio(local_id).unwrap().is_defined());
        assert!(h.service.get_local_portfolio(local_id + 1).unwrap().is_empty());

        h.service.set_host(HOST + 1);
        assert!(h.service.get_portfolio(&json!(7)).unwrap().is_empty());
    }

    #[test]
    fn test_add_update_requires_page_id() {
        let h = harness(vec![]);

        let result = h.service.add_update_portfolio(1, &json!({"id": null}));

        assert!(matches!(result, Err(ServiceError::MalformedRecord(_))));
        assert_eq!(h.store.count(DEFAULT_PORTFOLIO_TABLE), 0);
    }

    #[test]
    fn test_user_deleted_removes_all_portfolios() {
        let h = harness(vec![]);
        for view in [1, 2, 3] {
            h.service
                .add_update_portfolio(1, &json!({"id": view}))
                .unwrap();
        }
        h.service.add_update_portfolio(2, &json!({"id": 4})).unwrap();

        assert_eq!(h.service.get_users_portfolios(1).unwrap().len(), 3);
        assert!(h.service.user_deleted(1).unwrap());

        assert!(h.service.get_users_portfolios(1).unwrap().is_empty());
        assert_eq!(h.service.get_users_portfolios(2).unwrap().len(), 1);

        let deleted = h
            .notifier
            .names()
            .into_iter()
            .filter(|name| name == "mahara_portfolio_deleted")
            .count();
        assert_eq!(deleted, 3);
    }

    #[test]
    fn test_delete_portfolio_requires_id() {
        let h = harness(vec![]);

        let result = h.service.delete_portfolio(&record(json!({"page": 1})));

        assert!(matches!(result, Err(ServiceError::MalformedRecord(_))));
    }

    #[test]
    fn test_jump_url_encodes_target() {
        let h = harness(vec![]);

        assert_eq!(
            h.service.jump_url("/view/view.php?id=5"),
            "https://moodle.example.edu/auth/mnet/jump.php?hostid=3&wantsurl=%2Fview%2Fview.php%3Fid%3D5"
        );
    }
}
