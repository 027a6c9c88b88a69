mod env;
mod models;
mod pg_store;
mod schema;
mod store;

pub use env::PostgresEnv;
pub use models::{Character, ConversationTurn, NewTurn};
pub use pg_store::PgStore;
pub use schema::{connect, init_schema};
pub use store::ChatStore;
