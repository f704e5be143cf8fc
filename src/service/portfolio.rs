// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;
use std::time::Instant;

use serde_json::{json, Value};
use tracing::Instrument;

use crate::collaborators::{Criteria, EventNotifier, Record, RecordStore, RemoteCall, RemoteTransport};
use crate::config::consts::{JUMP_PATH, USER_TABLE};
use crate::config::ServiceConfig;
use crate::either::Either;
use crate::errors::{ServiceError, ServiceResult};
use crate::maybe::Maybe;
use crate::observability::messages::events::EventTriggered;
use crate::observability::messages::remote::{RemoteCallFailed, RemoteCallStarted, RemoteCallSucceeded};
use crate::observability::messages::store::{RecordDeleted, RecordInserted, RecordUpdated};
use crate::observability::messages::StructuredLog;
use crate::projection::RightProjection;
use crate::traits::Monadic;

/// Keeps local portfolio records in step with a remote portfolio host.
///
/// Every remote operation returns a [`RightProjection`] over the call's
/// outcome: follow-up work (events, record writes) only runs on `Right`, and a
/// failed call comes back untouched as `Left(error)` for the caller to fold.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use serde_json::json;
/// use the_monadic::collaborators::{MemoryStore, RecordingNotifier, ScriptedTransport};
/// use the_monadic::config::ServiceConfig;
/// use the_monadic::service::PortfolioService;
///
/// let service = PortfolioService::new(
///     ServiceConfig::new("https://moodle.example.edu").with_host(3),
///     Arc::new(ScriptedTransport::default()),
///     Arc::new(MemoryStore::new()),
///     Arc::new(RecordingNotifier::new()),
/// );
///
/// let saved = service
///     .add_update_portfolio(7, &json!({"id": 42, "title": "Essay", "url": "/view/42"}))
///     .unwrap();
/// assert_eq!(saved["page"], json!(42));
/// assert!(service.get_portfolio(&json!(42)).unwrap().is_defined());
/// ```
pub struct PortfolioService {
    config: ServiceConfig,
    transport: Arc<dyn RemoteTransport>,
    store: Arc<dyn RecordStore>,
    notifier: Arc<dyn EventNotifier>,
}

impl std::fmt::Debug for PortfolioService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortfolioService")
            .field("host_id", &self.config.host_id)
            .field("portfolio_table", &self.config.portfolio_table)
            .field("transport", &self.transport.name())
            .finish()
    }
}

impl PortfolioService {
    pub fn new(
        config: ServiceConfig,
        transport: Arc<dyn RemoteTransport>,
        store: Arc<dyn RecordStore>,
        notifier: Arc<dyn EventNotifier>,
    ) -> Self {
        Self {
            config,
            transport,
            store,
            notifier,
        }
    }

    pub fn host_id(&self) -> i64 {
        self.config.host_id
    }

    pub fn set_host(&mut self, host_id: i64) -> &mut Self {
        self.config.host_id = host_id;
        self
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Single sign-on link that lands the user on `wants_url` at the peer.
    pub fn jump_url(&self, wants_url: &str) -> String {
        format!(
            "{}{}?hostid={}&wantsurl={}",
            self.config.wwwroot.trim_end_matches('/'),
            JUMP_PATH,
            self.config.host_id,
            urlencoding::encode(wants_url)
        )
    }

    /// Fetch the pages a user can submit, optionally narrowed by `query`.
    ///
    /// Triggers `<prefix>_get_pages_for_user` with `{userid, pages}` on success.
    pub async fn request_pages_for_user(
        &self,
        user_id: i64,
        query: Option<&str>,
    ) -> ServiceResult<RightProjection<Value, Value>> {
        let username = self.username(user_id)?;
        let call = RemoteCall::new(&self.config.remote_methods.get_views_for_user)
            .param(username)
            .param(query.map_or(Value::Null, Value::from));

        Ok(self.call_remote(call).await.with_right().map(|pages| {
            self.trigger(
                "get_pages_for_user",
                &json!({ "userid": user_id, "pages": pages.clone() }),
            );
            pages
        }))
    }

    /// Submit a page for assessment and record it as a local portfolio.
    ///
    /// Triggers `<prefix>_submit_view_for_assessment` before the record is
    /// written. A store failure is returned as `Err`; a remote failure is
    /// returned as `Ok` wrapping `Left(error)`.
    pub async fn request_submit_page_for_user(
        &self,
        user_id: i64,
        view_id: i64,
    ) -> ServiceResult<RightProjection<Value, Record>> {
        let username = self.username(user_id)?;
        let call = RemoteCall::new(&self.config.remote_methods.submit_view_for_assessment)
            .param(username)
            .param(view_id);

        self.call_remote(call)
            .await
            .with_right()
            .map(|page| {
                self.trigger(
                    "submit_view_for_assessment",
                    &json!({ "page": page, "userid": user_id, "host": self.host_id() }),
                );
                self.add_update_portfolio(user_id, &page)
            })
            .transpose()
    }

    /// Ask the peer to release a submitted page.
    ///
    /// `user_id` is optional; without it the peer releases on behalf of nobody
    /// in particular. Triggers `<prefix>_release_submitted_view` on success.
    pub async fn request_release_submitted_view(
        &self,
        user_id: Option<i64>,
        view_id: i64,
        meta: Value,
    ) -> ServiceResult<RightProjection<Value, Value>> {
        let username = match user_id {
            Some(id) => Value::from(self.username(id)?),
            None => Value::Null,
        };
        let call = RemoteCall::new(&self.config.remote_methods.release_submitted_view)
            .param(view_id)
            .param(meta)
            .param(username);

        Ok(self.call_remote(call).await.with_right().each(|_| {
            self.trigger(
                "release_submitted_view",
                &json!({ "userid": user_id, "viewid": view_id, "host": self.host_id() }),
            );
        }))
    }

    /// Insert or update the portfolio record for a remote page.
    ///
    /// `page` must carry `id`; `title` and `url` are copied when present.
    /// Triggers `<prefix>_portfolio_added` or `<prefix>_portfolio_updated`.
    pub fn add_update_portfolio(&self, user_id: i64, page: &Value) -> ServiceResult<Record> {
        let view_id = page
            .get("id")
            .filter(|id| !id.is_null())
            .cloned()
            .ok_or_else(|| ServiceError::MalformedRecord("page has no 'id'".to_string()))?;

        self.get_portfolio(&view_id)?
            .or_else(|| {
                let mut portfolio = Record::new();
                portfolio.insert("userid".to_string(), json!(user_id));
                portfolio.insert("page".to_string(), view_id.clone());
                portfolio
            })
            .map(|portfolio| self.save_portfolio(portfolio, page))
            .get()?
    }

    fn save_portfolio(&self, mut portfolio: Record, page: &Value) -> ServiceResult<Record> {
        let table = self.config.portfolio_table.as_str();
        for field in ["title", "url"] {
            portfolio.insert(field.to_string(), page.get(field).cloned().unwrap_or(Value::Null));
        }
        portfolio.insert("host".to_string(), json!(self.host_id()));

        let event = match portfolio.get("id").and_then(Value::as_i64) {
            Some(id) => {
                self.store.update(table, &portfolio)?;
                RecordUpdated { table, id }.log();
                "portfolio_updated"
            }
            None => {
                let id = self.store.insert(table, portfolio.clone())?;
                portfolio.insert("id".to_string(), json!(id));
                RecordInserted { table, id }.log();
                "portfolio_added"
            }
        };

        self.trigger(event, &Value::Object(portfolio.clone()));
        Ok(portfolio)
    }

    /// Portfolio by its local id.
    pub fn get_local_portfolio(&self, portfolio_id: i64) -> ServiceResult<Maybe<Record>> {
        self.store.find_one(
            &self.config.portfolio_table,
            &Criteria::new().with("id", portfolio_id),
        )
    }

    /// Portfolio by remote page id, scoped to the current host.
    pub fn get_portfolio(&self, view_id: &Value) -> ServiceResult<Maybe<Record>> {
        self.store.find_one(
            &self.config.portfolio_table,
            &Criteria::new()
                .with("page", view_id.clone())
                .with("host", self.host_id()),
        )
    }

    pub fn get_users_portfolios(&self, user_id: i64) -> ServiceResult<Vec<Record>> {
        self.store.find_many(
            &self.config.portfolio_table,
            &Criteria::new().with("userid", user_id),
        )
    }

    /// Remove a portfolio record. Triggers `<prefix>_portfolio_deleted` first.
    pub fn delete_portfolio(&self, portfolio: &Record) -> ServiceResult<bool> {
        let id = portfolio
            .get("id")
            .and_then(Value::as_i64)
            .ok_or_else(|| ServiceError::MalformedRecord("portfolio has no 'id'".to_string()))?;
        let table = self.config.portfolio_table.as_str();

        self.trigger("portfolio_deleted", &Value::Object(portfolio.clone()));
        let removed = self.store.delete(table, &Criteria::new().with("id", id))?;
        RecordDeleted { table, id, removed }.log();
        Ok(removed)
    }

    /// Drop every portfolio of a user who was removed locally.
    pub fn user_deleted(&self, user_id: i64) -> ServiceResult<bool> {
        for portfolio in self.get_users_portfolios(user_id)? {
            self.delete_portfolio(&portfolio)?;
        }
        Ok(true)
    }

    async fn call_remote(&self, call: RemoteCall) -> Either<Value, Value> {
        let method = call.method.clone();
        let start_msg = RemoteCallStarted {
            host_id: self.host_id(),
            method: &method,
            param_count: call.params.len(),
        };
        start_msg.log();

        let start_time = Instant::now();
        let outcome = self
            .transport
            .invoke(self.host_id(), call)
            .instrument(start_msg.span("call_remote"))
            .await
            .into_either();

        outcome
            .as_ref()
            .with_right()
            .each(|_| {
                RemoteCallSucceeded {
                    method: &method,
                    duration: start_time.elapsed(),
                }
                .log()
            })
            .into_inner()
            .with_left()
            .each(|error| {
                RemoteCallFailed {
                    method: &method,
                    error: *error,
                }
                .log()
            });

        outcome
    }

    fn username(&self, user_id: i64) -> ServiceResult<String> {
        let user = self
            .store
            .find_one(USER_TABLE, &Criteria::new().with("id", user_id))?
            .get()
            .map_err(|_| ServiceError::UnknownUser(user_id))?;

        user.get("username")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| ServiceError::MalformedRecord(format!("user {} has no username", user_id)))
    }

    fn trigger(&self, event: &str, payload: &Value) {
        let event_name = self.config.events.event_name(event);
        EventTriggered {
            event_name: &event_name,
        }
        .log();
        self.notifier.notify(&event_name, payload);
    }
}
