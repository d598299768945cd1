pub mod migrations;
pub mod models;
pub mod queries;

use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;

/// Local cache of the hosted request collection plus the auxiliary status
/// map. The view engine reads its batch from here; `sync` refills it.
pub struct Store {
    conn: Mutex<Connection>,
}

impl Store {
    pub fn open(path: &Path) -> anyhow::Result<Self> {
        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;
        migrations::run_migrations(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    #[cfg(test)]
    pub fn open_in_memory() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        migrations::run_migrations(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::models::RequestRecord;
    use chrono::Utc;

    fn test_store() -> Store {
        Store::open_in_memory().expect("Failed to create test store")
    }

    #[test]
    fn test_migrations_run() {
        let store = test_store();
        let conn = store.conn.lock().unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM _migrations", [], |row| row.get(0))
            .unwrap();
        assert!(count >= 1);
    }

    #[test]
    fn test_request_crud() {
        let store = test_store();
        let record = RequestRecord {
            id: "req-1".into(),
            customer_name: Some("Alice".into()),
            user_email: Some("alice@example.com".into()),
            phone_number: Some("8801700000000".into()),
            address: Some("12 Lake Rd".into()),
            description: Some("Two units, gift wrap".into()),
            courier: Some("steadfast".into()),
            quantity: 2,
            submitted_at: Some(Utc::now()),
            product_links: vec!["https://shop.example.com/p/1".into()],
        };

        store.upsert_request(&record).unwrap();

        let fetched = store.get_request("req-1").unwrap().unwrap();
        assert_eq!(fetched.customer_name.as_deref(), Some("Alice"));
        assert_eq!(fetched.quantity, 2);
        assert_eq!(fetched.product_links.len(), 1);

        let all = store.list_requests().unwrap();
        assert_eq!(all.len(), 1);

        // Upsert with the same id replaces, not duplicates
        let mut updated = record.clone();
        updated.quantity = 5;
        store.upsert_request(&updated).unwrap();
        let all = store.list_requests().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].quantity, 5);
    }

    #[test]
    fn test_optional_fields_round_trip_as_none() {
        let store = test_store();
        let record = RequestRecord {
            id: "bare".into(),
            ..Default::default()
        };
        store.upsert_request(&record).unwrap();

        let fetched = store.get_request("bare").unwrap().unwrap();
        assert!(fetched.customer_name.is_none());
        assert!(fetched.submitted_at.is_none());
        assert_eq!(fetched.quantity, 0);
        assert!(fetched.product_links.is_empty());
    }

    #[test]
    fn test_status_map_last_write_wins_per_key() {
        let store = test_store();
        store.set_status("req-1", "Invoiced").unwrap();
        store.set_status("req-2", "Dispatched via steadfast").unwrap();
        store.set_status("req-1", "Dispatched via pathao").unwrap();

        assert_eq!(
            store.get_status("req-1").unwrap().as_deref(),
            Some("Dispatched via pathao")
        );
        // Writes to other keys are untouched
        assert_eq!(
            store.get_status("req-2").unwrap().as_deref(),
            Some("Dispatched via steadfast")
        );
        assert!(store.get_status("req-3").unwrap().is_none());

        let all = store.list_statuses().unwrap();
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn test_sync_meta() {
        let store = test_store();
        assert!(store.get_sync_meta("last_synced_at").unwrap().is_none());

        store
            .set_sync_meta("last_synced_at", "2026-01-01T00:00:00Z")
            .unwrap();
        let val = store.get_sync_meta("last_synced_at").unwrap().unwrap();
        assert_eq!(val, "2026-01-01T00:00:00Z");

        store
            .set_sync_meta("last_synced_at", "2026-06-01T00:00:00Z")
            .unwrap();
        let val = store.get_sync_meta("last_synced_at").unwrap().unwrap();
        assert_eq!(val, "2026-06-01T00:00:00Z");
    }
}
