use crate::sql::base::{adapter::SqlAdapter, error::DbError};
use async_trait::async_trait;
use model::{core::value::Value, records::row::Row};
use std::{
    collections::VecDeque,
    sync::{
        Mutex,
        atomic::{AtomicBool, Ordering},
    },
};

/// In-memory adapter that replays canned result sets in order and records
/// every statement it receives.
pub(crate) struct MockAdapter {
    user: String,
    results: Mutex<VecDeque<Vec<Row>>>,
    log: Mutex<Vec<(String, Vec<Value>)>>,
    closed: AtomicBool,
}

impl MockAdapter {
    pub fn new(user: &str) -> Self {
        Self {
            user: user.to_string(),
            results: Mutex::new(VecDeque::new()),
            log: Mutex::new(Vec::new()),
            closed: AtomicBool::new(false),
        }
    }

    /// Queues the rows returned by the next query.
    pub fn with_rows(self, rows: Vec<Vec<Value>>) -> Self {
        self.results
            .lock()
            .unwrap()
            .push_back(rows.into_iter().map(Row::new).collect());
        self
    }

    pub fn statements(&self) -> Vec<(String, Vec<Value>)> {
        self.log.lock().unwrap().clone()
    }

    pub fn last_statement(&self) -> (String, Vec<Value>) {
        self.statements().pop().expect("no statement issued")
    }

    fn record(&self, sql: &str, params: Vec<Value>) -> Result<(), DbError> {
        if self.is_closed() {
            return Err(DbError::Closed);
        }
        self.log.lock().unwrap().push((sql.to_string(), params));
        Ok(())
    }
}

#[async_trait]
impl SqlAdapter for MockAdapter {
    async fn exec(&self, query: &str) -> Result<(), DbError> {
        self.record(query, Vec::new())
    }

    async fn exec_params(&self, query: &str, params: Vec<Value>) -> Result<usize, DbError> {
        self.record(query, params)?;
        Ok(1)
    }

    async fn query_params(&self, sql: &str, params: Vec<Value>) -> Result<Vec<Row>, DbError> {
        self.record(sql, params)?;
        Ok(self.results.lock().unwrap().pop_front().unwrap_or_default())
    }

    fn user(&self) -> &str {
        &self.user
    }

    fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    async fn close(&self) -> Result<(), DbError> {
        self.closed.store(true, Ordering::SeqCst);
        Ok(())
    }
}

pub(crate) fn s(v: &str) -> Value {
    Value::String(v.to_string())
}
