pub mod manager;
pub mod models;
pub mod store;

pub use manager::DatabaseError;
pub use store::{PgStore, Store, StoreError};
