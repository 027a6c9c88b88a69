mod auth;
mod characters;
mod chat;
mod history;
mod misc;

pub use auth::auth_routes;
pub use characters::character_routes;
pub use chat::chat_routes;
pub use history::history_routes;
pub use misc::misc_routes;
