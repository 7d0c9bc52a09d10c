use super::InventoryStore;
use crate::db::models::{Contract, ContractPatch, NewContract};
use crate::error::{StockroomError, classify_db_error};
use chrono::Utc;
use sqlx::{QueryBuilder, Sqlite};

impl InventoryStore {
    pub async fn list_contracts(&self) -> Result<Vec<Contract>, StockroomError> {
        let rows = sqlx::query_as::<_, Contract>(
            r#"SELECT id, name, vendor, type, start_date, end_date, value, status,
                      renewal_date, contact_person, contact_email, created_at, updated_at
               FROM contracts
               ORDER BY created_at DESC, id DESC"#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn get_contract(&self, id: i64) -> Result<Option<Contract>, StockroomError> {
        let row = sqlx::query_as::<_, Contract>(
            r#"SELECT id, name, vendor, type, start_date, end_date, value, status,
                      renewal_date, contact_person, contact_email, created_at, updated_at
               FROM contracts WHERE id = ?"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn create_contract(&self, new: NewContract) -> Result<Contract, StockroomError> {
        let now = Utc::now();
        let value = new.value.unwrap_or(0.0);
        let status = new.status.unwrap_or_else(|| "Active".to_string());

        let result = sqlx::query(
            r#"INSERT INTO contracts (
                name, vendor, type, start_date, end_date, value, status,
                renewal_date, contact_person, contact_email, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"#,
        )
        .bind(&new.name)
        .bind(&new.vendor)
        .bind(&new.contract_type)
        .bind(new.start_date)
        .bind(new.end_date)
        .bind(value)
        .bind(&status)
        .bind(new.renewal_date)
        .bind(&new.contact_person)
        .bind(&new.contact_email)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(classify_db_error)?;

        let row = sqlx::query_as::<_, Contract>(
            r#"SELECT id, name, vendor, type, start_date, end_date, value, status,
                      renewal_date, contact_person, contact_email, created_at, updated_at
               FROM contracts WHERE id = ?"#,
        )
        .bind(result.last_insert_rowid())
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn update_contract(
        &self,
        id: i64,
        patch: ContractPatch,
    ) -> Result<Option<Contract>, StockroomError> {
        if patch.is_empty() {
            return Err(StockroomError::Validation(
                "no fields supplied for update".to_string(),
            ));
        }

        let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE contracts SET ");
        {
            let mut set = qb.separated(", ");
            if let Some(name) = patch.name {
                set.push("name = ").push_bind_unseparated(name);
            }
            if let Some(vendor) = patch.vendor {
                set.push("vendor = ").push_bind_unseparated(vendor);
            }
            if let Some(contract_type) = patch.contract_type {
                set.push("type = ").push_bind_unseparated(contract_type);
            }
            if let Some(start_date) = patch.start_date {
                set.push("start_date = ").push_bind_unseparated(start_date);
            }
            if let Some(end_date) = patch.end_date {
                set.push("end_date = ").push_bind_unseparated(end_date);
            }
            if let Some(value) = patch.value {
                set.push("value = ").push_bind_unseparated(value);
            }
            if let Some(status) = patch.status {
                set.push("status = ").push_bind_unseparated(status);
            }
            if let Some(renewal_date) = patch.renewal_date {
                set.push("renewal_date = ").push_bind_unseparated(renewal_date);
            }
            if let Some(contact_person) = patch.contact_person {
                set.push("contact_person = ").push_bind_unseparated(contact_person);
            }
            if let Some(contact_email) = patch.contact_email {
                set.push("contact_email = ").push_bind_unseparated(contact_email);
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
        self.get_contract(id).await
    }

    pub async fn delete_contract(&self, id: i64) -> Result<Option<Contract>, StockroomError> {
        let Some(contract) = self.get_contract(id).await? else {
            return Ok(None);
        };
        sqlx::query("DELETE FROM contracts WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(Some(contract))
    }

    /// Substring match over name, vendor, contact person, and contact email.
    pub async fn search_contracts(&self, query: &str) -> Result<Vec<Contract>, StockroomError> {
        let pattern = format!("%{query}%");
        let rows = sqlx::query_as::<_, Contract>(
            r#"SELECT id, name, vendor, type, start_date, end_date, value, status,
                      renewal_date, contact_person, contact_email, created_at, updated_at
               FROM contracts
               WHERE name LIKE ? OR vendor LIKE ? OR contact_person LIKE ? OR contact_email LIKE ?
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
