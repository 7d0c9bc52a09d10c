use super::InventoryStore;
use crate::db::models::{Asset, AssetPatch, AssetStats, NewAsset};
use crate::error::{StockroomError, classify_db_error};
use chrono::Utc;
use sqlx::{QueryBuilder, Sqlite};

impl InventoryStore {
    pub async fn list_assets(&self) -> Result<Vec<Asset>, StockroomError> {
        let rows = sqlx::query_as::<_, Asset>(
            r#"SELECT id, tag, type, manufacturer, model, serial, assigned_user_name,
                      status, cost, discovered, created_at, updated_at
               FROM assets
               ORDER BY created_at DESC, id DESC"#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn get_asset(&self, id: i64) -> Result<Option<Asset>, StockroomError> {
        let row = sqlx::query_as::<_, Asset>(
            r#"SELECT id, tag, type, manufacturer, model, serial, assigned_user_name,
                      status, cost, discovered, created_at, updated_at
               FROM assets WHERE id = ?"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn get_asset_by_tag(&self, tag: &str) -> Result<Option<Asset>, StockroomError> {
        let row = sqlx::query_as::<_, Asset>(
            r#"SELECT id, tag, type, manufacturer, model, serial, assigned_user_name,
                      status, cost, discovered, created_at, updated_at
               FROM assets WHERE tag = ?"#,
        )
        .bind(tag)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Insert with defaults for omitted fields, then fetch the persisted
    /// row. `created_at` and `updated_at` are set to the same instant.
    pub async fn create_asset(&self, new: NewAsset) -> Result<Asset, StockroomError> {
        let now = Utc::now();
        let status = new.status.unwrap_or_else(|| "In Use".to_string());
        let cost = new.cost.unwrap_or(0.0);
        let discovered = new.discovered.unwrap_or(false);

        let result = sqlx::query(
            r#"INSERT INTO assets (
                tag, type, manufacturer, model, serial, assigned_user_name,
                status, cost, discovered, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"#,
        )
        .bind(&new.tag)
        .bind(&new.asset_type)
        .bind(&new.manufacturer)
        .bind(&new.model)
        .bind(&new.serial)
        .bind(&new.assigned_user_name)
        .bind(&status)
        .bind(cost)
        .bind(discovered)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(classify_db_error)?;

        let row = sqlx::query_as::<_, Asset>(
            r#"SELECT id, tag, type, manufacturer, model, serial, assigned_user_name,
                      status, cost, discovered, created_at, updated_at
               FROM assets WHERE id = ?"#,
        )
        .bind(result.last_insert_rowid())
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Apply only the fields present in the patch. Column names come
    /// exclusively from the literal pushes below; caller input is only
    /// ever bound as a value.
    pub async fn update_asset(
        &self,
        id: i64,
        patch: AssetPatch,
    ) -> Result<Option<Asset>, StockroomError> {
        if patch.is_empty() {
            return Err(StockroomError::Validation(
                "no fields supplied for update".to_string(),
            ));
        }

        let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE assets SET ");
        {
            let mut set = qb.separated(", ");
            if let Some(tag) = patch.tag {
                set.push("tag = ").push_bind_unseparated(tag);
            }
            if let Some(asset_type) = patch.asset_type {
                set.push("type = ").push_bind_unseparated(asset_type);
            }
            if let Some(manufacturer) = patch.manufacturer {
                set.push("manufacturer = ").push_bind_unseparated(manufacturer);
            }
            if let Some(model) = patch.model {
                set.push("model = ").push_bind_unseparated(model);
            }
            if let Some(serial) = patch.serial {
                set.push("serial = ").push_bind_unseparated(serial);
            }
            if let Some(assigned) = patch.assigned_user_name {
                set.push("assigned_user_name = ").push_bind_unseparated(assigned);
            }
            if let Some(status) = patch.status {
                set.push("status = ").push_bind_unseparated(status);
            }
            if let Some(cost) = patch.cost {
                set.push("cost = ").push_bind_unseparated(cost);
            }
            if let Some(discovered) = patch.discovered {
                set.push("discovered = ").push_bind_unseparated(discovered);
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
        self.get_asset(id).await
    }

    /// Remove by id, returning the deleted row.
    pub async fn delete_asset(&self, id: i64) -> Result<Option<Asset>, StockroomError> {
        let Some(asset) = self.get_asset(id).await? else {
            return Ok(None);
        };
        sqlx::query("DELETE FROM assets WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(Some(asset))
    }

    /// Substring match over tag, manufacturer, model, and assigned user.
    /// SQLite `LIKE` is case-insensitive for ASCII.
    pub async fn search_assets(&self, query: &str) -> Result<Vec<Asset>, StockroomError> {
        let pattern = format!("%{query}%");
        let rows = sqlx::query_as::<_, Asset>(
            r#"SELECT id, tag, type, manufacturer, model, serial, assigned_user_name,
                      status, cost, discovered, created_at, updated_at
               FROM assets
               WHERE tag LIKE ? OR manufacturer LIKE ? OR model LIKE ? OR assigned_user_name LIKE ?
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

    /// Aggregate counts in one pass over the table.
    pub async fn asset_stats(&self) -> Result<AssetStats, StockroomError> {
        let stats = sqlx::query_as::<_, AssetStats>(
            r#"SELECT
                   COUNT(*) AS total_assets,
                   COALESCE(SUM(CASE WHEN status = 'In Use' THEN 1 ELSE 0 END), 0) AS in_use,
                   COALESCE(SUM(CASE WHEN discovered = 1 THEN 1 ELSE 0 END), 0) AS discovered,
                   COALESCE(SUM(CASE WHEN status = 'Retired' THEN 1 ELSE 0 END), 0) AS retired
               FROM assets"#,
        )
        .fetch_one(&self.pool)
        .await?;
        Ok(stats)
    }
}
