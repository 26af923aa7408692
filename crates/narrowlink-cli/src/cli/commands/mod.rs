//! CLI command handlers, one per file.

mod classify;
mod encode;
mod message_id;
mod narrow;
mod resolve;
mod route;

pub use classify::run_classify;
pub use encode::run_encode;
pub use message_id::run_message_id;
pub use narrow::run_narrow;
pub use resolve::run_resolve;
pub use route::run_route;
