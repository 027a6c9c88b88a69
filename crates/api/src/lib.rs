mod global_state;
mod response;
mod routes;
mod utils;

pub use routes::{auth_routes, character_routes, chat_routes, history_routes, misc_routes};

pub use global_state::GlobalState;
pub use response::{AppError, AppSuccess};
pub use utils::setup_tracing;
