//! SQL DDL for initializing the inventory tables.
//! SQLite-first design; can be adapted for other RDBMS.

/// Every statement is individually idempotent (`IF NOT EXISTS`), so a
/// crash mid-sequence is recovered by simply running the whole batch
/// again on the next startup.
///
/// Entities are independent: semantic references (e.g.
/// `assigned_user_name`) are by name, not foreign key.
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS assets (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    tag TEXT NOT NULL UNIQUE,
    type TEXT NOT NULL,
    manufacturer TEXT NULL,
    model TEXT NULL,
    serial TEXT NULL UNIQUE,
    assigned_user_name TEXT NULL,
    status TEXT NOT NULL DEFAULT 'In Use',
    cost REAL NOT NULL DEFAULT 0,
    discovered INTEGER NOT NULL DEFAULT 0,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_assets_tag ON assets(tag);
CREATE INDEX IF NOT EXISTS idx_assets_status ON assets(status);

CREATE TABLE IF NOT EXISTS licenses (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    type TEXT NOT NULL,
    key TEXT NULL UNIQUE,
    software_name TEXT NULL,
    vendor TEXT NULL,
    expiration_date TEXT NULL,
    quantity INTEGER NOT NULL DEFAULT 1,
    status TEXT NOT NULL DEFAULT 'Active',
    cost REAL NOT NULL DEFAULT 0,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_licenses_name ON licenses(name);
CREATE INDEX IF NOT EXISTS idx_licenses_status ON licenses(status);

CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT NULL UNIQUE,
    department TEXT NULL,
    phone TEXT NULL,
    role TEXT NULL,
    status TEXT NOT NULL DEFAULT 'Active',
    assigned_assets INTEGER NOT NULL DEFAULT 0,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_users_name ON users(name);
CREATE INDEX IF NOT EXISTS idx_users_status ON users(status);

CREATE TABLE IF NOT EXISTS contracts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    vendor TEXT NULL,
    type TEXT NULL,
    start_date TEXT NULL,
    end_date TEXT NULL,
    value REAL NOT NULL DEFAULT 0,
    status TEXT NOT NULL DEFAULT 'Active',
    renewal_date TEXT NULL,
    contact_person TEXT NULL,
    contact_email TEXT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_contracts_name ON contracts(name);
CREATE INDEX IF NOT EXISTS idx_contracts_status ON contracts(status);
"#;

/// Tables `verify_schema` checks for after initialization.
pub const REQUIRED_TABLES: [&str; 4] = ["assets", "licenses", "users", "contracts"];
