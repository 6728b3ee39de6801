// Rosterbot - Student records API with an AI chat assistant
// Library exports

pub mod chat;
pub mod config;
pub mod providers;
pub mod server;
pub mod store;
