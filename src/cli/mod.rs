//! Command handlers for the promptlab binary

mod chain;
mod compare;
mod few_shot;
mod init;
mod models;
mod reason;
mod session;
#[cfg(test)]
mod test_support;
mod tips;

pub use chain::handle_chain_command;
pub use compare::handle_compare_command;
pub use few_shot::handle_few_shot_command;
pub use init::handle_init_command;
pub use models::handle_models_command;
pub use reason::handle_reason_command;
pub use session::Session;
pub use tips::handle_tips_command;
