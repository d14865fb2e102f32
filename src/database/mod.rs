pub mod store;

#[cfg(test)]
pub mod memory;

use mongodb::bson::{doc, Document};
use mongodb::options::{ClientOptions, ServerApi, ServerApiVersion};
use mongodb::{Client, Database};
use std::sync::Arc;

use crate::models::{coffee, user};
use crate::utils::AppError;

pub use store::{DocumentStore, MongoStore};

/// The two collection handles every handler works with. Acquired once at
/// startup and shared read-only across workers.
#[derive(Clone)]
pub struct Collections {
    pub coffees: Arc<dyn DocumentStore>,
    pub users: Arc<dyn DocumentStore>,
}

impl Collections {
    pub fn new(coffees: Arc<dyn DocumentStore>, users: Arc<dyn DocumentStore>) -> Self {
        Self { coffees, users }
    }
}

#[derive(Clone)]
pub struct MongoDB {
    client: Client,
    db: Database,
}

impl MongoDB {
    /// Builds the client without touching the network beyond SRV resolution;
    /// the driver connects lazily on first use.
    pub async fn new(uri: &str, db_name: &str) -> Result<Self, AppError> {
        let mut client_options = ClientOptions::parse(uri).await?;

        client_options.server_api = Some(
            ServerApi::builder()
                .version(ServerApiVersion::V1)
                .strict(true)
                .deprecation_errors(true)
                .build(),
        );

        let client = Client::with_options(client_options)?;
        let db = client.database(db_name);

        Ok(Self { client, db })
    }

    /// Round-trips a `ping` to confirm the deployment is reachable.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await?;
        Ok(())
    }

    pub fn collections(&self) -> Collections {
        Collections::new(
            Arc::new(MongoStore::new(self.db.collection::<Document>(coffee::COLLECTION))),
            Arc::new(MongoStore::new(self.db.collection::<Document>(user::COLLECTION))),
        )
    }
}
