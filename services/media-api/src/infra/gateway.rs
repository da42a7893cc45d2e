//! Storage gateway over the pooled sea-orm connection.
//!
//! Every clone of the gateway shares one `DatabaseConnection` (the pool)
//! behind an `Arc`. A [`Transaction`] holds one pooled connection until it is committed, rolled back, or dropped.
//! Dropping it uncommitted rolls back and returns the connection to the pool,
//! so every early return releases.

use std::sync::Arc;

use sea_orm::{
    ConnectionTrait, DatabaseConnection, DatabaseTransaction, DbErr, QueryResult, Statement,
    TransactionTrait, Value,
};

#[derive(Clone)]
pub struct StorageGateway {
    db: Arc<DatabaseConnection>,
}

impl StorageGateway {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db: Arc::new(db) }
    }

    /// Pooled connection for single-statement queries outside a transaction.
    pub fn conn(&self) -> &DatabaseConnection {
        &self.db
    }

    fn statement<I>(&self, sql: &str, values: I) -> Statement
    where
        I: IntoIterator<Item = Value>,
    {
        Statement::from_sql_and_values(self.db.get_database_backend(), sql, values)
    }

    /// Run a parameterized query and return its rows.
    pub async fn query<I>(&self, sql: &str, values: I) -> Result<Vec<QueryResult>, DbErr>
    where
        I: IntoIterator<Item = Value>,
    {
        self.db.query_all(self.statement(sql, values)).await
    }

    /// Run a parameterized statement and return the affected row count.
    pub async fn execute<I>(&self, sql: &str, values: I) -> Result<u64, DbErr>
    where
        I: IntoIterator<Item = Value>,
    {
        let result = self.db.execute(self.statement(sql, values)).await?;
        Ok(result.rows_affected())
    }

    /// Acquire a connection and open a transaction on it.
    pub async fn begin(&self, operation: &'static str) -> Result<Transaction, DbErr> {
        let txn = self.db.begin().await?;
        tracing::debug!(operation, "transaction opened");
        Ok(Transaction { txn, operation })
    }

    pub async fn ping(&self) -> Result<(), DbErr> {
        self.db.ping().await
    }

    /// Hands back the connection once every clone of the gateway is gone.
    #[cfg(test)]
    pub fn into_inner(self) -> Option<DatabaseConnection> {
        Arc::into_inner(self.db)
    }
}

/// An open transaction bound to one pooled connection.
pub struct Transaction {
    txn: DatabaseTransaction,
    operation: &'static str,
}

impl Transaction {
    pub fn conn(&self) -> &DatabaseTransaction {
        &self.txn
    }

    /// Take a transaction-scoped advisory lock on `(key1, key2)`.
    /// Released on commit or rollback.
    pub async fn advisory_lock(&self, key1: i32, key2: i32) -> Result<(), DbErr> {
        let stmt = Statement::from_sql_and_values(
            self.txn.get_database_backend(),
            "SELECT pg_advisory_xact_lock($1, $2)",
            [Value::from(key1), Value::from(key2)],
        );
        self.txn.execute(stmt).await?;
        Ok(())
    }

    pub async fn commit(self) -> Result<(), DbErr> {
        let operation = self.operation;
        self.txn.commit().await?;
        tracing::debug!(operation, "transaction committed");
        Ok(())
    }

    pub async fn rollback(self) -> Result<(), DbErr> {
        let operation = self.operation;
        self.txn.rollback().await?;
        tracing::debug!(operation, "transaction rolled back");
        Ok(())
    }
}
