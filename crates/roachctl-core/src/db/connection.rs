//! CockroachDB sessions over the PostgreSQL wire protocol.

use async_trait::async_trait;
use futures::TryStreamExt;
use sqlx::{
    postgres::{PgConnectOptions, PgConnection, PgSslMode},
    Connection, Either, Executor,
};

use super::{catalog, rows, Connect, ResultSet, Session};
use crate::{
    config::{ConnectionParams, SslMode},
    error::{DriverResultExt, Result},
    models::DatabaseDescriptor,
};

const SHOW_DATABASES_SQL: &str = "SHOW DATABASES";

/// Opens [`CockroachSession`]s for a resolved set of connection parameters.
#[derive(Debug, Clone)]
pub struct CockroachConnector {
    params: ConnectionParams,
}

impl CockroachConnector {
    pub fn new(params: ConnectionParams) -> Self {
        Self { params }
    }

    fn connect_options(&self) -> PgConnectOptions {
        let params = &self.params;
        let mut options = PgConnectOptions::new()
            .host(&params.host)
            .port(params.port)
            .database(&params.database)
            .username(&params.user)
            .ssl_mode(pg_ssl_mode(params.ssl_mode))
            .application_name(&params.application_name);

        if let Some(password) = &params.password {
            options = options.password(password);
        }
        if let Some(path) = &params.ssl_root_cert {
            options = options.ssl_root_cert(path);
        }
        if let Some(path) = &params.ssl_cert {
            options = options.ssl_client_cert(path);
        }
        if let Some(path) = &params.ssl_key {
            options = options.ssl_client_key(path);
        }
        options
    }
}

#[async_trait]
impl Connect for CockroachConnector {
    type Session = CockroachSession;

    async fn connect(&self) -> Result<CockroachSession> {
        log::info!("Connecting to {}", self.params);
        let conn = PgConnection::connect_with(&self.connect_options())
            .await
            .connect_context()?;
        Ok(CockroachSession { conn })
    }
}

fn pg_ssl_mode(mode: SslMode) -> PgSslMode {
    match mode {
        SslMode::Disable => PgSslMode::Disable,
        SslMode::Allow => PgSslMode::Allow,
        SslMode::Prefer => PgSslMode::Prefer,
        SslMode::Require => PgSslMode::Require,
        SslMode::VerifyCa => PgSslMode::VerifyCa,
        SslMode::VerifyFull => PgSslMode::VerifyFull,
    }
}

/// One autocommit connection to a CockroachDB node.
pub struct CockroachSession {
    conn: PgConnection,
}

#[async_trait]
impl Session for CockroachSession {
    async fn list_databases(&mut self) -> Result<Vec<DatabaseDescriptor>> {
        let listing = sqlx::query(SHOW_DATABASES_SQL)
            .fetch_all(&mut self.conn)
            .await
            .catalog_context()?;

        listing.iter().map(catalog::descriptor_from_row).collect()
    }

    async fn execute(&mut self, sql: &str) -> Result<()> {
        (&mut self.conn)
            .execute(sqlx::raw_sql(sql))
            .await
            .statement_context(sql)?;
        Ok(())
    }

    // Simple query protocol: literals in the text get their type from the
    // server, and scripts with several statements run in one round trip.
    async fn query(&mut self, sql: &str) -> Result<ResultSet> {
        let mut result = ResultSet::default();
        let mut stream = (&mut self.conn).fetch_many(sqlx::raw_sql(sql));
        while let Some(item) = stream.try_next().await.statement_context(sql)? {
            match item {
                Either::Left(done) => result.rows_affected += done.rows_affected(),
                Either::Right(row) => result.rows.push(rows::decode_row(&row)?),
            }
        }
        Ok(result)
    }

    async fn close(self) -> Result<()> {
        self.conn.close().await.connect_context()
    }
}
