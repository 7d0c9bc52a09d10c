use super::InventoryStore;
use crate::db::models::{NewUser, User, UserPatch};
use crate::error::{StockroomError, classify_db_error};
use chrono::Utc;
use sqlx::{QueryBuilder, Sqlite};

impl InventoryStore {
    pub async fn list_users(&self) -> Result<Vec<User>, StockroomError> {
        let rows = sqlx::query_as::<_, User>(
            r#"SELECT id, name, email, department, phone, role, status,
                      assigned_assets, created_at, updated_at
               FROM users
               ORDER BY created_at DESC, id DESC"#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn get_user(&self, id: i64) -> Result<Option<User>, StockroomError> {
        let row = sqlx::query_as::<_, User>(
            r#"SELECT id, name, email, department, phone, role, status,
                      assigned_assets, created_at, updated_at
               FROM users WHERE id = ?"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn create_user(&self, new: NewUser) -> Result<User, StockroomError> {
        let now = Utc::now();
        let status = new.status.unwrap_or_else(|| "Active".to_string());
        let assigned_assets = new.assigned_assets.unwrap_or(0);

        let result = sqlx::query(
            r#"INSERT INTO users (
                name, email, department, phone, role, status,
                assigned_assets, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)"#,
        )
        .bind(&new.name)
        .bind(&new.email)
        .bind(&new.department)
        .bind(&new.phone)
        .bind(&new.role)
        .bind(&status)
        .bind(assigned_assets)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(classify_db_error)?;

        let row = sqlx::query_as::<_, User>(
            r#"SELECT id, name, email, department, phone, role, status,
                      assigned_assets, created_at, updated_at
               FROM users WHERE id = ?"#,
        )
        .bind(result.last_insert_rowid())
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn update_user(
        &self,
        id: i64,
        patch: UserPatch,
    ) -> Result<Option<User>, StockroomError> {
        if patch.is_empty() {
            return Err(StockroomError::Validation(
                "no fields supplied for update".to_string(),
            ));
        }

        let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE users SET ");
        {
            let mut set = qb.separated(", ");
            if let Some(name) = patch.name {
                set.push("name = ").push_bind_unseparated(name);
            }
            if let Some(email) = patch.email {
                set.push("email = ").push_bind_unseparated(email);
            }
            if let Some(department) = patch.department {
                set.push("department = ").push_bind_unseparated(department);
            }
            if let Some(phone) = patch.phone {
                set.push("phone = ").push_bind_unseparated(phone);
            }
            if let Some(role) = patch.role {
                set.push("role = ").push_bind_unseparated(role);
            }
            if let Some(status) = patch.status {
                set.push("status = ").push_bind_unseparated(status);
            }
            if let Some(assigned_assets) = patch.assigned_assets {
                set.push("assigned_assets = ").push_bind_unseparated(assigned_assets);
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
        self.get_user(id).await
    }

    pub async fn delete_user(&self, id: i64) -> Result<Option<User>, StockroomError> {
        let Some(user) = self.get_user(id).await? else {
            return Ok(None);
        };
        sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(Some(user))
    }

    /// Substring match over name, email, department, and phone.
    pub async fn search_users(&self, query: &str) -> Result<Vec<User>, StockroomError> {
        let pattern = format!("%{query}%");
        let rows = sqlx::query_as::<_, User>(
            r#"SELECT id, name, email, department, phone, role, status,
                      assigned_assets, created_at, updated_at
               FROM users
               WHERE name LIKE ? OR email LIKE ? OR department LIKE ? OR phone LIKE ?
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
