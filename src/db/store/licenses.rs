use super::InventoryStore;
use crate::db::models::{License, LicensePatch, NewLicense};
use crate::error::{StockroomError, classify_db_error};
use chrono::Utc;
use sqlx::{QueryBuilder, Sqlite};

impl InventoryStore {
    pub async fn list_licenses(&self) -> Result<Vec<License>, StockroomError> {
        let rows = sqlx::query_as::<_, License>(
            r#"SELECT id, name, type, key, software_name, vendor, expiration_date,
                      quantity, status, cost, created_at, updated_at
               FROM licenses
               ORDER BY created_at DESC, id DESC"#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn get_license(&self, id: i64) -> Result<Option<License>, StockroomError> {
        let row = sqlx::query_as::<_, License>(
            r#"SELECT id, name, type, key, software_name, vendor, expiration_date,
                      quantity, status, cost, created_at, updated_at
               FROM licenses WHERE id = ?"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn create_license(&self, new: NewLicense) -> Result<License, StockroomError> {
        let now = Utc::now();
        let quantity = new.quantity.unwrap_or(1);
        let status = new.status.unwrap_or_else(|| "Active".to_string());
        let cost = new.cost.unwrap_or(0.0);

        let result = sqlx::query(
            r#"INSERT INTO licenses (
                name, type, key, software_name, vendor, expiration_date,
                quantity, status, cost, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"#,
        )
        .bind(&new.name)
        .bind(&new.license_type)
        .bind(&new.key)
        .bind(&new.software_name)
        .bind(&new.vendor)
        .bind(new.expiration_date)
        .bind(quantity)
        .bind(&status)
        .bind(cost)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(classify_db_error)?;

        let row = sqlx::query_as::<_, License>(
            r#"SELECT id, name, type, key, software_name, vendor, expiration_date,
                      quantity, status, cost, created_at, updated_at
               FROM licenses WHERE id = ?"#,
        )
        .bind(result.last_insert_rowid())
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn update_license(
        &self,
        id: i64,
        patch: LicensePatch,
    ) -> Result<Option<License>, StockroomError> {
        if patch.is_empty() {
            return Err(StockroomError::Validation(
                "no fields supplied for update".to_string(),
            ));
        }

        let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE licenses SET ");
        {
            let mut set = qb.separated(", ");
            if let Some(name) = patch.name {
                set.push("name = ").push_bind_unseparated(name);
            }
            if let Some(license_type) = patch.license_type {
                set.push("type = ").push_bind_unseparated(license_type);
            }
            if let Some(key) = patch.key {
                set.push("key = ").push_bind_unseparated(key);
            }
            if let Some(software_name) = patch.software_name {
                set.push("software_name = ").push_bind_unseparated(software_name);
            }
            if let Some(vendor) = patch.vendor {
                set.push("vendor = ").push_bind_unseparated(vendor);
            }
            if let Some(expiration_date) = patch.expiration_date {
                set.push("expiration_date = ").push_bind_unseparated(expiration_date);
            }
            if let Some(quantity) = patch.quantity {
                set.push("quantity = ").push_bind_unseparated(quantity);
            }
            if let Some(status) = patch.status {
                set.push("status = ").push_bind_unseparated(status);
            }
            if let Some(cost) = patch.cost {
                set.push("cost = ").push_bind_unseparated(cost);
            }
            set.push("updated_at = ").push_bind_unseparated(Utc::now());
        }
        qb.push(" WHERE id = ").push_bind(id);

        let result = qb
            .build()
            .execute(&self.pool)
            .await
            .map_err(classify_db_error)?;
        if result.rows_affected() == 0 {
            return Ok(None);
        }
        self.get_license(id).await
    }

    pub async fn delete_license(&self, id: i64) -> Result<Option<License>, StockroomError> {
        let Some(license) = self.get_license(id).await? else {
            return Ok(None);
        };
        sqlx::query("DELETE FROM licenses WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(Some(license))
    }

    /// Substring match over name, software name, vendor, and key.
    pub async fn search_licenses(&self, query: &str) -> Result<Vec<License>, StockroomError> {
        let pattern = format!("%{query}%");
        let rows = sqlx::query_as::<_, License>(
            r#"SELECT id, name, type, key, software_name, vendor, expiration_date,
                      quantity, status, cost, created_at, updated_at
               FROM licenses
               WHERE name LIKE ? OR software_name LIKE ? OR vendor LIKE ? OR key LIKE ?
               ORDER BY created_at DESC, id DESC"#,
        )
        .bind(&pattern)
        .bind(&pattern)
        .bind(&pattern)
        .bind(&pattern)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
