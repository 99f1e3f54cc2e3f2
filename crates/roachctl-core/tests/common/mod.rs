#![allow(dead_code)]

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use roachctl_core::{
    models::DatabaseDescriptor,
    sql::stored_role_name,
    Client, Connect, ResultSet, Result, RoachError, Session,
};

/// Everything the fake cluster knows and everything it was asked to do.
#[derive(Debug, Default)]
pub struct ClusterState {
    pub databases: Vec<DatabaseDescriptor>,
    pub executed: Vec<String>,
    pub queries: Vec<String>,
    pub query_response: ResultSet,
    pub connects: usize,
    pub closes: usize,
    pub fail_connect: Option<String>,
    pub fail_catalog: Option<String>,
    pub fail_statement: Option<String>,
    pub fail_fetch: Option<String>,
    pub fail_close: bool,
}

/// In-memory stand-in for a CockroachDB node.
///
/// `CREATE`, `ALTER ... OWNER TO` and `DROP DATABASE` statements are applied
/// to the catalog so that repeated reconciles observe earlier ones.
#[derive(Debug, Clone, Default)]
pub struct FakeCluster {
    state: Arc<Mutex<ClusterState>>,
}

impl FakeCluster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_database(self, name: &str, owner: &str) -> Self {
        self.state().databases.push(existing(name, owner));
        self
    }

    pub fn with_response(self, response: ResultSet) -> Self {
        self.state().query_response = response;
        self
    }

    pub fn state(&self) -> MutexGuard<'_, ClusterState> {
        self.state.lock().expect("cluster state poisoned")
    }

    pub fn client(&self) -> Client<FakeCluster> {
        Client::with_connector(self.clone())
    }

    /// Asserts every opened session was closed again.
    pub fn assert_released(&self) {
        let state = self.state();
        assert_eq!(state.connects, state.closes, "sessions left open");
    }
}

pub fn existing(name: &str, owner: &str) -> DatabaseDescriptor {
    DatabaseDescriptor {
        exists: true,
        owner: Some(owner.to_string()),
        ..DatabaseDescriptor::absent(name)
    }
}

pub struct FakeSession {
    state: Arc<Mutex<ClusterState>>,
}

impl FakeSession {
    fn state(&self) -> MutexGuard<'_, ClusterState> {
        self.state.lock().expect("cluster state poisoned")
    }
}

#[async_trait]
impl Connect for FakeCluster {
    type Session = FakeSession;

    async fn connect(&self) -> Result<FakeSession> {
        let mut state = self.state();
        if let Some(message) = &state.fail_connect {
            return Err(RoachError::Connection {
                message: message.clone(),
            });
        }
        state.connects += 1;
        Ok(FakeSession {
            state: Arc::clone(&self.state),
        })
    }
}

#[async_trait]
impl Session for FakeSession {
    async fn list_databases(&mut self) -> Result<Vec<DatabaseDescriptor>> {
        let state = self.state();
        match &state.fail_catalog {
            Some(message) => Err(RoachError::CatalogRead {
                message: message.clone(),
            }),
            None => Ok(state.databases.clone()),
        }
    }

    async fn execute(&mut self, sql: &str) -> Result<()> {
        let mut state = self.state();
        if let Some(message) = &state.fail_statement {
            return Err(RoachError::statement(sql).with_message(message.clone()));
        }
        state.executed.push(sql.to_string());
        apply_ddl(&mut state.databases, sql);
        Ok(())
    }

    async fn query(&mut self, sql: &str) -> Result<ResultSet> {
        let mut state = self.state();
        state.queries.push(sql.to_string());
        if let Some(message) = &state.fail_statement {
            return Err(RoachError::statement(sql).with_message(message.clone()));
        }
        if let Some(message) = &state.fail_fetch {
            return Err(RoachError::RowFetch {
                message: message.clone(),
            });
        }
        Ok(state.query_response.clone())
    }

    async fn close(self) -> Result<()> {
        let mut state = self.state();
        state.closes += 1;
        if state.fail_close {
            return Err(RoachError::Connection {
                message: "connection reset".to_string(),
            });
        }
        Ok(())
    }
}

/// Applies the reconciler's DDL to the fake catalog.
fn apply_ddl(databases: &mut Vec<DatabaseDescriptor>, sql: &str) {
    let Some((verb, rest)) = sql.split_once(" DATABASE \"") else {
        return;
    };
    let Some((name, tail)) = rest.split_once('"') else {
        return;
    };

    match verb {
        "CREATE" => {
            let owner = tail.strip_prefix(" OWNER ").map_or("root".to_string(), stored_role_name);
            databases.push(existing(name, &owner));
        }
        "ALTER" => {
            if let (Some(owner), Some(db)) = (
                tail.strip_prefix(" OWNER TO "),
                databases.iter_mut().find(|db| db.name == name),
            ) {
                db.owner = Some(stored_role_name(owner));
            }
        }
        "DROP" => databases.retain(|db| db.name != name),
        _ => {}
    }
}
