use crate::sql::{
    base::{
        adapter::SqlAdapter,
        error::{ConnectorError, DbError},
    },
    hana::{
        connect::ConnectArgs,
        params::{HdbParamStore, from_hdb_value},
    },
};
use async_trait::async_trait;
use hdbconnect::Connection;
use model::{core::value::Value, records::row::Row};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicBool, Ordering},
};
use tracing::{debug, info};

/// [`SqlAdapter`] over a blocking `hdbconnect` connection. Every driver call
/// runs on the blocking pool.
#[derive(Clone)]
pub struct HdbAdapter {
    conn: Arc<Mutex<Option<Connection>>>,
    user: String,
    closed: Arc<AtomicBool>,
}

impl HdbAdapter {
    /// Opens a connection from a `hana://` URL.
    pub async fn connect(url: &str) -> Result<Self, ConnectorError> {
        let args = ConnectArgs::from_url(url)?;
        Self::connect_with(&args).await
    }

    pub async fn connect_with(args: &ConnectArgs) -> Result<Self, ConnectorError> {
        let params = args.to_connect_params()?.build()?;
        let user = args.user.clone().unwrap_or_default();

        let conn = tokio::task::spawn_blocking(move || Connection::new(params))
            .await
            .map_err(|e| ConnectorError::Task(e.to_string()))??;

        info!(
            "Connected to HANA at {}:{}",
            args.host.as_deref().unwrap_or_default(),
            args.port
        );

        Ok(HdbAdapter {
            conn: Arc::new(Mutex::new(Some(conn))),
            user,
            closed: Arc::new(AtomicBool::new(false)),
        })
    }

    async fn with_connection<T, F>(&self, f: F) -> Result<T, DbError>
    where
        T: Send + 'static,
        F: FnOnce(&mut Connection) -> Result<T, DbError> + Send + 'static,
    {
        if self.is_closed() {
            return Err(DbError::Closed);
        }

        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let mut guard = conn.lock().map_err(|e| DbError::Task(e.to_string()))?;
            let conn = guard.as_mut().ok_or(DbError::Closed)?;
            f(conn)
        })
        .await
        .map_err(|e| DbError::Task(e.to_string()))?
    }
}

#[async_trait]
impl SqlAdapter for HdbAdapter {
    async fn exec(&self, query: &str) -> Result<(), DbError> {
        debug!("Executing: {}", query);
        let sql = query.to_string();
        self.with_connection(move |conn| {
            conn.exec(&sql)?;
            Ok(())
        })
        .await
    }

    async fn exec_params(&self, query: &str, params: Vec<Value>) -> Result<usize, DbError> {
        debug!("Executing: {} with {} params", query, params.len());
        let sql = query.to_string();
        let bindings = HdbParamStore::from_values(params);
        self.with_connection(move |conn| {
            let mut stmt = conn.prepare(&sql)?;
            let affected = stmt.execute(&bindings.params)?.into_affected_rows()?;
            Ok(affected.iter().sum())
        })
        .await
    }

    async fn query_params(&self, sql: &str, params: Vec<Value>) -> Result<Vec<Row>, DbError> {
        debug!("Querying: {} with {} params", sql, params.len());
        let sql = sql.to_string();
        let bindings = HdbParamStore::from_values(params);
        self.with_connection(move |conn| {
            let result_set = if bindings.is_empty() {
                conn.query(&sql)?
            } else {
                let mut stmt = conn.prepare(&sql)?;
                stmt.execute(&bindings.params)?.into_result_set()?
            };

            let mut rows = Vec::new();
            for row in result_set {
                let row = row?;
                let values = (0..row.len()).map(|i| from_hdb_value(&row[i])).collect();
                rows.push(Row::new(values));
            }
            Ok(rows)
        })
        .await
    }

    fn user(&self) -> &str {
        &self.user
    }

    fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    async fn close(&self) -> Result<(), DbError> {
        if self.closed.swap(true, Ordering::SeqCst) {
            return Ok(());
        }

        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let mut guard = conn.lock().map_err(|e| DbError::Task(e.to_string()))?;
            // Dropping the driver connection disconnects the session.
            drop(guard.take());
            Ok::<_, DbError>(())
        })
        .await
        .map_err(|e| DbError::Task(e.to_string()))??;

        info!("HANA connection closed");
        Ok(())
    }
}
