pub mod commodities;
pub mod postgres;

pub use commodities::{CommodityStore, PgCommodityStore};
pub use postgres::{connect_or_defer, create_pool, run_migrations};
