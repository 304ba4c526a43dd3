//! SQLite implementation of the persistence layer.
//!
//! Owns schema initialization, one-time catalog seeding, and all queries.
//! Reference uniqueness is a `UNIQUE` column constraint: inserting a
//! booking is the atomic insert-if-absent primitive the booking service
//! builds its retry loop on.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::domain::booking::DEFAULT_STATUS;
use crate::domain::{Booking, BookingDraft, Tour};
use crate::error::BookingError;

/// Tours inserted on first startup, in catalog order.
const SEED_TOURS: [(&str, &str, i64, &str); 6] = [
    (
        "Oslo Fjord Cruise",
        "Explore the stunning Oslo Fjord with breathtaking views and expert commentary.",
        500,
        "BIlder/Opera house from the front.jpg",
    ),
    (
        "Viking Museum Tour",
        "Dive into Norway's Viking history at the Viking Ship Museum with a knowledgeable guide.",
        400,
        "BIlder/Oslo boat port west.jpg",
    ),
    (
        "Oslo City Walking Tour",
        "Walk through the heart of Oslo and learn about its culture, history, and landmarks.",
        350,
        "BIlder/Oslo jernbanetorget restaurant.jpg",
    ),
    (
        "Royal Palace Tour",
        "Visit the Royal Palace and learn about Norway's monarchy and royal history.",
        375,
        "BIlder/Oslo city banner.jpg",
    ),
    (
        "Fram Museum Tour",
        "Explore polar exploration history at the Fram Museum, home to famous ships.",
        450,
        "BIlder/Frognerparken.jpg",
    ),
    (
        "Museum of Cultural History Tour",
        "Discover Norway's cultural heritage through exhibits and outdoor museums.",
        380,
        "BIlder/Aker Brygge.jpg",
    ),
];

/// SQLite-backed store using `sqlx::SqlitePool`.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Creates a store with an already constructed connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Opens the database at `database_url`, creating the file if missing.
    ///
    /// # Errors
    ///
    /// Returns a [`BookingError::Persistence`] if the URL is invalid or
    /// the connection cannot be established.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, BookingError> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| BookingError::Persistence(e.to_string()))?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await
            .map_err(|e| BookingError::Persistence(e.to_string()))?;

        Ok(Self::new(pool))
    }

    /// Opens an in-memory database with the schema applied.
    ///
    /// A single connection keeps the database alive for the pool's
    /// lifetime; used by tests and ephemeral deployments.
    ///
    /// # Errors
    ///
    /// Returns a [`BookingError::Persistence`] on connection or schema
    /// failure.
    pub async fn in_memory() -> Result<Self, BookingError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(|e| BookingError::Persistence(e.to_string()))?;

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .map_err(|e| BookingError::Persistence(e.to_string()))?;

        let store = Self::new(pool);
        store.init_schema().await?;
        Ok(store)
    }

    /// Creates the `tours` and `bookings` tables if they do not exist.
    ///
    /// Safe to call on every startup. The `UNIQUE` constraint on
    /// `bookings.reference` is what makes booking insertion atomic with
    /// respect to reference uniqueness.
    ///
    /// # Errors
    ///
    /// Returns a [`BookingError::Persistence`] on database failure.
    pub async fn init_schema(&self) -> Result<(), BookingError> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS tours (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                description TEXT NOT NULL,
                price INTEGER NOT NULL,
                image TEXT NOT NULL,
                created_at TEXT NOT NULL
            )",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| BookingError::Persistence(e.to_string()))?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS bookings (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                reference TEXT NOT NULL UNIQUE,
                tour_name TEXT NOT NULL,
                tour_price INTEGER NOT NULL,
                tour_date TEXT NOT NULL,
                participants INTEGER NOT NULL,
                customer_name TEXT NOT NULL,
                customer_email TEXT NOT NULL,
                customer_phone TEXT NOT NULL,
                special_requests TEXT,
                status TEXT NOT NULL DEFAULT 'confirmed',
                created_at TEXT NOT NULL
            )",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| BookingError::Persistence(e.to_string()))?;

        tracing::debug!("database schema ready");
        Ok(())
    }

    /// Inserts the fixed tour catalog if the `tours` table is empty.
    ///
    /// Idempotent: repeated calls never duplicate rows.
    ///
    /// # Errors
    ///
    /// Returns a [`BookingError::Persistence`] on database failure.
    pub async fn seed_tours(&self) -> Result<(), BookingError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM tours")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| BookingError::Persistence(e.to_string()))?;

        if count > 0 {
            return Ok(());
        }

        for (name, description, price, image) in SEED_TOURS {
            sqlx::query(
                "INSERT INTO tours (name, description, price, image, created_at) \
                 VALUES ($1, $2, $3, $4, $5)",
            )
            .bind(name)
            .bind(description)
            .bind(price)
            .bind(image)
            .bind(Utc::now())
            .execute(&self.pool)
            .await
            .map_err(|e| BookingError::Persistence(e.to_string()))?;
        }

        tracing::info!(count = SEED_TOURS.len(), "sample tours inserted");
        Ok(())
    }

    /// Returns all tours in insertion (id) order.
    ///
    /// # Errors
    ///
    /// Returns a [`BookingError::Persistence`] on database failure.
    pub async fn list_tours(&self) -> Result<Vec<Tour>, BookingError> {
        let rows = sqlx::query_as::<_, (i64, String, String, i64, String, DateTime<Utc>)>(
            "SELECT id, name, description, price, image, created_at FROM tours ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| BookingError::Persistence(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|(id, name, description, price, image, created_at)| Tour {
                id,
                name,
                description,
                price,
                image,
                created_at,
            })
            .collect())
    }

    /// Returns all bookings, newest first.
    ///
    /// Ordered by creation timestamp descending with id descending as the
    /// tie-break, so bookings created within the same second still list
    /// in reverse insertion order.
    ///
    /// # Errors
    ///
    /// Returns a [`BookingError::Persistence`] on database failure.
    pub async fn list_bookings(&self) -> Result<Vec<Booking>, BookingError> {
        type BookingRow = (
            i64,
            String,
            String,
            i64,
            String,
            i64,
            String,
            String,
            String,
            Option<String>,
            String,
            DateTime<Utc>,
        );

        let rows = sqlx::query_as::<_, BookingRow>(
            "SELECT id, reference, tour_name, tour_price, tour_date, participants, \
                    customer_name, customer_email, customer_phone, special_requests, \
                    status, created_at \
             FROM bookings ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| BookingError::Persistence(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(
                |(
                    id,
                    reference,
                    tour_name,
                    tour_price,
                    tour_date,
                    participants,
                    customer_name,
                    customer_email,
                    customer_phone,
                    special_requests,
                    status,
                    created_at,
                )| Booking {
                    id,
                    reference,
                    tour_name,
                    tour_price,
                    tour_date,
                    participants,
                    customer_name,
                    customer_email,
                    customer_phone,
                    special_requests,
                    status,
                    created_at,
                },
            )
            .collect())
    }

    /// Atomically inserts a booking under `reference`.
    ///
    /// The `UNIQUE` constraint on `reference` makes this an
    /// insert-if-absent: a duplicate reference never reaches the table,
    /// even across concurrent requests.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::ReferenceConflict`] if `reference` is
    /// already taken, [`BookingError::Persistence`] on any other database
    /// failure.
    pub async fn insert_booking(
        &self,
        draft: &BookingDraft,
        reference: &str,
    ) -> Result<Booking, BookingError> {
        let created_at = Utc::now();

        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO bookings (reference, tour_name, tour_price, tour_date, participants, \
                                   customer_name, customer_email, customer_phone, \
                                   special_requests, status, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) RETURNING id",
        )
        .bind(reference)
        .bind(&draft.tour_name)
        .bind(draft.tour_price)
        .bind(&draft.tour_date)
        .bind(draft.participants)
        .bind(&draft.customer_name)
        .bind(&draft.customer_email)
        .bind(&draft.customer_phone)
        .bind(draft.special_requests.as_deref())
        .bind(DEFAULT_STATUS)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                BookingError::ReferenceConflict(reference.to_string())
            }
            _ => BookingError::Persistence(e.to_string()),
        })?;

        Ok(Booking {
            id,
            reference: reference.to_string(),
            tour_name: draft.tour_name.clone(),
            tour_price: draft.tour_price,
            tour_date: draft.tour_date.clone(),
            participants: draft.participants,
            customer_name: draft.customer_name.clone(),
            customer_email: draft.customer_email.clone(),
            customer_phone: draft.customer_phone.clone(),
            special_requests: draft.special_requests.clone(),
            status: DEFAULT_STATUS.to_string(),
            created_at,
        })
    }

    /// Closes the connection pool, flushing outstanding work.
    ///
    /// Called on graceful shutdown before the process exits.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
