//! Redis-backed submission store.
//!
//! Each submission is a JSON document held as a member of one sorted set
//! per namespace, scored by `created_at` in milliseconds:
//!
//! - `ZADD {database}:{collection} <millis> <json>` on save
//! - `ZREVRANGE {database}:{collection} 0 <limit - 1>` for the history
//!
//! The set is append-only; nothing here updates or removes members.
//! Members that do not decode as submissions are skipped when listing.

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;
use std::time::Duration;
use tokio::sync::Mutex;

use crate::config::StoreConfig;
use crate::domain::submission::Submission;
use crate::ports::{StoreError, SubmissionStore};

/// Redis document store for submissions.
///
/// The connection is opened lazily and checked with `PING`; both steps
/// share `connect_timeout`, so an unreachable server costs at most that
/// long per request. The cache lock is never held while connecting, so
/// concurrent requests each wait one timeout rather than queueing. Once
/// established the multiplexed connection is cached and cloned per
/// command. Connection-level failures drop the cache so the next call
/// reconnects.
pub struct RedisSubmissionStore {
    client: redis::Client,
    key: String,
    connect_timeout: Duration,
    conn: Mutex<Option<MultiplexedConnection>>,
}

impl RedisSubmissionStore {
    /// Creates a store from configuration without touching the network.
    ///
    /// # Errors
    ///
    /// `NotConfigured` when no URI is set, `Unavailable` when it does not
    /// parse as a Redis URL.
    pub fn new(config: &StoreConfig) -> Result<Self, StoreError> {
        let uri = config
            .uri()
            .ok_or_else(|| StoreError::not_configured("BITWISE__STORE__URI is not set"))?;
        let client = redis::Client::open(uri)
            .map_err(|e| StoreError::unavailable(format!("invalid store URI: {}", e)))?;

        Ok(Self {
            client,
            key: config.namespace(),
            connect_timeout: config.connect_timeout(),
            conn: Mutex::new(None),
        })
    }

    /// Sorted-set key holding the submissions (the namespace).
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the cached connection, connecting first if needed.
    async fn connection(&self) -> Result<MultiplexedConnection, StoreError> {
        if let Some(conn) = self.conn.lock().await.as_ref() {
            return Ok(conn.clone());
        }

        let conn = self.connect().await?;

        // Another request may have connected meanwhile; keep the first one.
        let mut cached = self.conn.lock().await;
        Ok(cached.get_or_insert(conn).clone())
    }

    /// Opens a connection and pings it within `connect_timeout`.
    async fn connect(&self) -> Result<MultiplexedConnection, StoreError> {
        let probe = async {
            let mut conn = self.client.get_multiplexed_tokio_connection().await?;
            redis::cmd("PING").query_async::<_, String>(&mut conn).await?;
            Ok::<_, redis::RedisError>(conn)
        };

        match tokio::time::timeout(self.connect_timeout, probe).await {
            Ok(Ok(conn)) => {
                tracing::debug!(key = %self.key, "Connected to document store");
                Ok(conn)
            }
            Ok(Err(e)) => Err(StoreError::unavailable(e.to_string())),
            Err(_) => Err(StoreError::unavailable(format!(
                "no response within {} ms",
                self.connect_timeout.as_millis()
            ))),
        }
    }

    /// Drops the cached connection after a connection-level failure.
    async fn forget_connection_on(&self, err: &redis::RedisError) {
        if err.is_io_error() || err.is_connection_dropped() || err.is_connection_refusal() {
            *self.conn.lock().await = None;
        }
    }
}

#[async_trait]
impl SubmissionStore for RedisSubmissionStore {
    async fn save(&self, submission: &Submission) -> Result<(), StoreError> {
        let document = serde_json::to_string(submission)
            .map_err(|e| StoreError::write_failed(format!("cannot encode submission: {}", e)))?;
        let score = submission.created_at.as_unix_millis();

        let mut conn = self.connection().await?;
        let result: Result<i64, redis::RedisError> = conn.zadd(&self.key, document, score).await;

        match result {
            Ok(_) => Ok(()),
            Err(e) => {
                self.forget_connection_on(&e).await;
                Err(StoreError::write_failed(e.to_string()))
            }
        }
    }

    async fn list_recent(&self, limit: usize) -> Result<Vec<Submission>, StoreError> {
        if limit == 0 {
            return Ok(Vec::new());
        }
        let stop = isize::try_from(limit).unwrap_or(isize::MAX) - 1;

        let mut conn = self.connection().await?;
        let result: Result<Vec<String>, redis::RedisError> =
            conn.zrevrange(&self.key, 0, stop).await;

        let documents = match result {
            Ok(documents) => documents,
            Err(e) => {
                self.forget_connection_on(&e).await;
                return Err(StoreError::read_failed(e.to_string()));
            }
        };

        Ok(decode_listing(&self.key, &documents))
    }
}

impl std::fmt::Debug for RedisSubmissionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisSubmissionStore")
            .field("key", &self.key)
            .field("connect_timeout", &self.connect_timeout)
            .finish_non_exhaustive()
    }
}

fn decode_submission(document: &str) -> Result<Submission, StoreError> {
    serde_json::from_str(document)
        .map_err(|e| StoreError::read_failed(format!("undecodable stored submission: {}", e)))
}

/// Decodes listed members in order, skipping any that are not submissions.
fn decode_listing(key: &str, documents: &[String]) -> Vec<Submission> {
    documents
        .iter()
        .filter_map(|doc| match decode_submission(doc) {
            Ok(submission) => Some(submission),
            Err(err) => {
                tracing::warn!(key = %key, "Skipping stored member: {}", err);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::{analyze, FiveNumbers};
    use crate::ports::StoreErrorKind;
    use std::time::Instant;

    fn config(uri: &str) -> StoreConfig {
        StoreConfig {
            uri: Some(uri.to_string()),
            database: "bitwise_test".to_string(),
            collection: "submissions".to_string(),
            connect_timeout_ms: 300,
        }
    }

    fn sample() -> Submission {
        let input = FiveNumbers::new(-5.0, 0.0, 12.0, 60.0, 100.0);
        Submission::new(input, analyze(&input))
    }

    /// Reserves a local port and releases it, leaving nothing listening.
    fn closed_local_port() -> u16 {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    }

    #[test]
    fn key_is_the_namespace() {
        let store = RedisSubmissionStore::new(&config("redis://127.0.0.1:6379")).unwrap();
        assert_eq!(store.key(), "bitwise_test:submissions");
    }

    #[test]
    fn missing_uri_is_not_configured() {
        let err = RedisSubmissionStore::new(&StoreConfig::default()).unwrap_err();
        assert_eq!(err.kind, StoreErrorKind::NotConfigured);
    }

    #[test]
    fn decode_rejects_foreign_documents() {
        let err = decode_submission("{\"hello\":1}").unwrap_err();
        assert_eq!(err.kind, StoreErrorKind::ReadFailed);
    }

    #[test]
    fn decode_accepts_saved_documents() {
        let submission = sample();
        let doc = serde_json::to_string(&submission).unwrap();
        assert_eq!(decode_submission(&doc).unwrap(), submission);
    }

    #[test]
    fn listing_skips_foreign_members_and_keeps_order() {
        let newer = sample();
        let older = {
            let input = FiveNumbers::new(1.0, 2.0, 3.0, 4.0, 5.0);
            Submission::recorded_at(
                input,
                analyze(&input),
                crate::domain::foundation::Timestamp::from_unix_millis(1_000),
            )
        };
        let mut broken = serde_json::to_value(&newer).unwrap();
        broken["result"]["average"] = serde_json::Value::Null;

        let documents = vec![
            serde_json::to_string(&newer).unwrap(),
            broken.to_string(),
            "not json".to_string(),
            serde_json::to_string(&older).unwrap(),
        ];

        let listed = decode_listing("bitwise_test:submissions", &documents);
        assert_eq!(listed, vec![newer, older]);
    }

    #[test]
    fn huge_inputs_are_stored_and_listed() {
        let input = FiveNumbers::from_array([1e308; 5]);
        let submission = Submission::new(input, analyze(&input));
        let documents = vec![serde_json::to_string(&submission).unwrap()];

        assert_eq!(
            decode_listing("bitwise_test:submissions", &documents),
            vec![submission]
        );
    }

    #[tokio::test]
    async fn unreachable_server_fails_open_within_timeout() {
        let uri = format!("redis://127.0.0.1:{}", closed_local_port());
        let store = RedisSubmissionStore::new(&config(&uri)).unwrap();

        let started = Instant::now();
        let save = store.save(&sample()).await.unwrap_err();
        let list = store.list_recent(50).await.unwrap_err();

        assert_eq!(save.kind, StoreErrorKind::Unavailable);
        assert_eq!(list.kind, StoreErrorKind::Unavailable);
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[tokio::test]
    async fn zero_limit_lists_nothing_without_connecting() {
        let uri = format!("redis://127.0.0.1:{}", closed_local_port());
        let store = RedisSubmissionStore::new(&config(&uri)).unwrap();
        assert!(store.list_recent(0).await.unwrap().is_empty());
    }

    /// Accepts connections and holds them open without ever replying.
    async fn silent_server() -> u16 {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        });
        port
    }

    #[tokio::test]
    async fn concurrent_calls_to_silent_server_each_wait_one_timeout() {
        let uri = format!("redis://127.0.0.1:{}", silent_server().await);
        let store = std::sync::Arc::new(RedisSubmissionStore::new(&config(&uri)).unwrap());

        let started = Instant::now();
        let mut calls = tokio::task::JoinSet::new();
        for _ in 0..5 {
            let store = store.clone();
            calls.spawn(async move {
                let result = store.list_recent(50).await;
                (result, started.elapsed())
            });
        }

        while let Some(joined) = calls.join_next().await {
            let (result, elapsed) = joined.unwrap();
            assert_eq!(result.unwrap_err().kind, StoreErrorKind::Unavailable);
            assert!(elapsed < Duration::from_millis(700), "took {:?}", elapsed);
        }
    }

    // Requires a running Redis at BITWISE_TEST_REDIS_URI (or localhost).
    #[tokio::test]
    #[ignore] // Run with: cargo test -- --ignored
    async fn saves_and_lists_newest_first_against_live_redis() {
        let uri = std::env::var("BITWISE_TEST_REDIS_URI")
            .unwrap_or_else(|_| "redis://127.0.0.1:6379".to_string());
        let mut cfg = config(&uri);
        cfg.collection = format!("run_{}", uuid::Uuid::new_v4());
        cfg.connect_timeout_ms = 2000;
        let store = RedisSubmissionStore::new(&cfg).unwrap();

        let older = {
            let input = FiveNumbers::new(1.0, 2.0, 3.0, 4.0, 5.0);
            Submission::recorded_at(
                input,
                analyze(&input),
                crate::domain::foundation::Timestamp::from_unix_millis(1_000),
            )
        };
        let newer = sample();
        store.save(&older).await.unwrap();
        store.save(&newer).await.unwrap();

        let recent = store.list_recent(50).await.unwrap();
        assert_eq!(recent, vec![newer, older]);

        let mut conn = store.connection().await.unwrap();
        let _: () = conn.del(store.key()).await.unwrap();
    }
}
