use migration::{Migrator, MigratorTrait};
use log::info;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

#[derive(Clone)]
pub struct DbService {
    pub(crate) db: DatabaseConnection,
}

impl DbService {
    pub async fn new<C>(opts: C) -> Result<Self, DbErr>
    where
        C: Into<ConnectOptions>,
    {
        info!("Connecting to database...");
        let db = Database::connect(opts).await?;
        info!("Running migrations...");
        Migrator::up(&db, None).await?;
        info!("Database ready.");
        Ok(Self { db })
    }
}
