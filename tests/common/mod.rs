//! Helpers for integration tests.
#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use pushkind_catalog::db::{DbPool, establish_connection_pool};
use pushkind_catalog::models::category::NewCategory;
use pushkind_catalog::models::product::ProductChangeset;
use pushkind_catalog::models::product_category::ProductCategory;
use pushkind_catalog::schema::{categories, order_items, product_categories, products};
use tempfile::NamedTempFile;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!(); // assumes migrations/ exists

pub const EXISTING_ID: i32 = 1;
pub const NON_EXISTING_ID: i32 = 1000;
/// Product referenced by an order line in the seeded catalog.
pub const DEPENDENT_ID: i32 = 3;
pub const TOTAL_PRODUCTS: usize = 25;

pub const BOOKS: i32 = 1;
pub const ELECTRONICS: i32 = 2;
pub const COMPUTERS: i32 = 3;

/// Temporary database used in integration tests.
pub struct TestDb {
    _tempfile: NamedTempFile,
    pool: DbPool,
}

impl TestDb {
    pub fn new() -> Self {
        let tempfile = NamedTempFile::new().expect("Failed to create temp file");
        let pool = establish_connection_pool(tempfile.path().to_str().unwrap())
            .expect("Failed to establish SQLite connection.");
        let mut conn = pool
            .get()
            .expect("Failed to get SQLite connection from pool.");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("Migrations failed");
        TestDb {
            _tempfile: tempfile,
            pool,
        }
    }

    /// Database pre-filled by [`seed_catalog`].
    pub fn seeded() -> Self {
        let db = Self::new();
        seed_catalog(&db.pool());
        db
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }
}

pub fn seed_date() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2020, 7, 14)
        .and_then(|d| d.and_hms_opt(10, 0, 0))
        .unwrap()
}

const PRODUCTS: [(&str, f64, &[i32]); TOTAL_PRODUCTS] = [
    ("The Lord of the Rings", 90.5, &[BOOKS]),
    ("Smart TV", 2190.0, &[ELECTRONICS, COMPUTERS]),
    ("Macbook Pro", 1250.0, &[COMPUTERS]),
    ("PC Gamer", 1200.0, &[COMPUTERS]),
    ("Rails for Dummies", 100.99, &[BOOKS]),
    ("PC Gamer Ex", 1350.0, &[COMPUTERS]),
    ("PC Gamer X", 1350.0, &[COMPUTERS]),
    ("PC Gamer Alfa", 1850.0, &[COMPUTERS]),
    ("PC Gamer Tera", 1950.0, &[COMPUTERS]),
    ("PC Gamer Y", 1700.0, &[COMPUTERS]),
    ("PC Gamer Nitro", 1450.0, &[COMPUTERS]),
    ("PC Gamer Card", 1850.0, &[COMPUTERS]),
    ("PC Gamer Plus", 1350.0, &[COMPUTERS]),
    ("PC Gamer Hera", 2250.0, &[COMPUTERS]),
    ("PC Gamer Weed", 2200.0, &[COMPUTERS]),
    ("PC Gamer Max", 2340.0, &[COMPUTERS]),
    ("PC Gamer Turbo", 1280.0, &[COMPUTERS]),
    ("PC Gamer Hot", 1450.0, &[COMPUTERS]),
    ("PC Gamer Ez", 1750.0, &[COMPUTERS]),
    ("PC Gamer Tr", 1650.0, &[COMPUTERS]),
    ("PC Gamer Tx", 1680.0, &[COMPUTERS]),
    ("PC Gamer Tu", 1850.0, &[COMPUTERS]),
    ("PC Gamer Er", 1550.0, &[COMPUTERS]),
    ("PC Gamer Min", 1250.0, &[COMPUTERS]),
    ("PC Gamer Boo", 2350.0, &[COMPUTERS]),
];

/// Seed three categories, the 25 catalog products (ids 1..=25 in the order
/// above) and one order line pointing at [`DEPENDENT_ID`].
pub fn seed_catalog(pool: &DbPool) {
    let mut conn = pool.get().expect("Failed to get SQLite connection from pool.");

    for name in ["Books", "Electronics", "Computers"] {
        diesel::insert_into(categories::table)
            .values(&NewCategory { name })
            .execute(&mut conn)
            .expect("should insert category");
    }

    for (index, (name, price, category_ids)) in PRODUCTS.iter().enumerate() {
        let description = format!("{name} description");
        let img_url = format!("https://img.example.com/{}.jpg", index + 1);
        diesel::insert_into(products::table)
            .values(&ProductChangeset {
                name,
                description: &description,
                price: *price,
                img_url: &img_url,
                date: seed_date(),
            })
            .execute(&mut conn)
            .expect("should insert product");

        let links: Vec<ProductCategory> = category_ids
            .iter()
            .enumerate()
            .map(|(position, category_id)| ProductCategory {
                product_id: index as i32 + 1,
                category_id: *category_id,
                position: position as i32,
            })
            .collect();
        diesel::insert_into(product_categories::table)
            .values(&links)
            .execute(&mut conn)
            .expect("should link product categories");
    }

    diesel::insert_into(order_items::table)
        .values((
            order_items::product_id.eq(DEPENDENT_ID),
            order_items::quantity.eq(1),
            order_items::price.eq(1250.0),
        ))
        .execute(&mut conn)
        .expect("should insert order item");
}
