#![allow(dead_code)]

use chrono::NaiveDate;
use contactbook::schema::{AddressCreate, ContactCreate};
use sqlx::SqlitePool;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::path::PathBuf;
use std::time::SystemTime;
use tokio::fs;

pub struct TestDb {
    pub pool: SqlitePool,
    path: PathBuf,
}

/// Fresh SQLite file under the temp dir with the schema applied.
pub async fn fresh_db(tag: &str) -> TestDb {
    let mut hasher = DefaultHasher::new();
    SystemTime::now().hash(&mut hasher);
    tag.hash(&mut hasher);
    std::process::id().hash(&mut hasher);
    let db_file_name = format!("test_contacts_{tag}_{}.sqlite", hasher.finish());
    let path = std::env::temp_dir().join(db_file_name);
    let database_url = format!("sqlite:{}", path.to_str().unwrap());

    let pool = contactbook::db::connect(&database_url).await.unwrap();
    TestDb { pool, path }
}

impl TestDb {
    pub async fn count(&self, table: &str) -> i64 {
        sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&self.pool)
            .await
            .unwrap()
    }

    pub async fn cleanup(self) {
        self.pool.close().await;
        let wal_path = PathBuf::from(format!("{}-wal", self.path.to_string_lossy()));
        let shm_path = PathBuf::from(format!("{}-shm", self.path.to_string_lossy()));
        let _ = fs::remove_file(&wal_path).await;
        let _ = fs::remove_file(&shm_path).await;
        fs::remove_file(&self.path).await.unwrap();
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn new_contact(name: &str, surname: &str, birthday: NaiveDate) -> ContactCreate {
    ContactCreate {
        name: name.to_string(),
        surname: surname.to_string(),
        email: format!("{}.{}@example.com", name.to_lowercase(), surname.to_lowercase()),
        birthday,
        address: None,
    }
}

pub fn kyiv_address() -> AddressCreate {
    AddressCreate {
        street: Some("Khreshchatyk 1".to_string()),
        city: Some("Kyiv".to_string()),
        postal_code: Some("01001".to_string()),
        country: Some("UA".to_string()),
    }
}
