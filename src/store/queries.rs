use chrono::{DateTime, Utc};
use rusqlite::params;

use super::Store;
use super::models::{RequestRecord, StatusEntry};

const REQUEST_COLUMNS: &str = "id, customer_name, user_email, phone_number, address, description, courier, quantity, submitted_at, product_links";

fn map_request_row(row: &rusqlite::Row) -> rusqlite::Result<RequestRecord> {
    let submitted_at: Option<String> = row.get(8)?;
    let product_links: String = row.get(9)?;
    Ok(RequestRecord {
        id: row.get(0)?,
        customer_name: row.get(1)?,
        user_email: row.get(2)?,
        phone_number: row.get(3)?,
        address: row.get(4)?,
        description: row.get(5)?,
        courier: row.get(6)?,
        quantity: row.get(7)?,
        // Unparseable timestamps degrade to absent, same as in the source
        // documents themselves.
        submitted_at: submitted_at
            .and_then(|s| DateTime::parse_from_rfc3339(&s).ok())
            .map(|dt| dt.with_timezone(&Utc)),
        product_links: serde_json::from_str(&product_links).unwrap_or_default(),
    })
}

impl Store {
    // --- Requests ---

    pub fn upsert_request(&self, record: &RequestRecord) -> anyhow::Result<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO requests (id, customer_name, user_email, phone_number, address, description, courier, quantity, submitted_at, product_links, fetched_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
             ON CONFLICT(id) DO UPDATE SET
                customer_name = excluded.customer_name,
                user_email = excluded.user_email,
                phone_number = excluded.phone_number,
                address = excluded.address,
                description = excluded.description,
                courier = excluded.courier,
                quantity = excluded.quantity,
                submitted_at = excluded.submitted_at,
                product_links = excluded.product_links,
                fetched_at = excluded.fetched_at",
            params![
                record.id,
                record.customer_name,
                record.user_email,
                record.phone_number,
                record.address,
                record.description,
                record.courier,
                record.quantity,
                record.submitted_at.map(|dt| dt.to_rfc3339()),
                serde_json::to_string(&record.product_links)?,
                Utc::now().to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    pub fn get_request(&self, id: &str) -> anyhow::Result<Option<RequestRecord>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(&format!(
            "SELECT {REQUEST_COLUMNS} FROM requests WHERE id = ?1"
        ))?;
        let mut rows = stmt.query_map(params![id], map_request_row)?;
        match rows.next() {
            Some(row) => Ok(Some(row?)),
            None => Ok(None),
        }
    }

    /// The full unfiltered batch, newest submissions first. Records without
    /// a timestamp sort last.
    pub fn list_requests(&self) -> anyhow::Result<Vec<RequestRecord>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(&format!(
            "SELECT {REQUEST_COLUMNS} FROM requests ORDER BY submitted_at DESC NULLS LAST, id"
        ))?;
        let rows = stmt.query_map([], map_request_row)?;
        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }
        Ok(records)
    }

    // --- Status map ---

    /// Upsert on the record key: last write wins for a given id, writes for
    /// different ids never touch each other.
    pub fn set_status(&self, record_id: &str, label: &str) -> anyhow::Result<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO request_status (record_id, label, updated_at)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(record_id) DO UPDATE SET
                label = excluded.label,
                updated_at = excluded.updated_at",
            params![record_id, label, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    pub fn get_status(&self, record_id: &str) -> anyhow::Result<Option<String>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare("SELECT label FROM request_status WHERE record_id = ?1")?;
        let mut rows = stmt.query_map(params![record_id], |row| row.get(0))?;
        match rows.next() {
            Some(row) => Ok(Some(row?)),
            None => Ok(None),
        }
    }

    pub fn list_statuses(&self) -> anyhow::Result<Vec<StatusEntry>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(
            "SELECT record_id, label, updated_at FROM request_status ORDER BY updated_at DESC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(StatusEntry {
                record_id: row.get(0)?,
                label: row.get(1)?,
                updated_at: row.get(2)?,
            })
        })?;
        let mut entries = Vec::new();
        for row in rows {
            entries.push(row?);
        }
        Ok(entries)
    }

    // --- Sync meta ---

    pub fn set_sync_meta(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO sync_meta (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }

    pub fn get_sync_meta(&self, key: &str) -> anyhow::Result<Option<String>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare("SELECT value FROM sync_meta WHERE key = ?1")?;
        let mut rows = stmt.query_map(params![key], |row| row.get(0))?;
        match rows.next() {
            Some(row) => Ok(Some(row?)),
            None => Ok(None),
        }
    }
}
