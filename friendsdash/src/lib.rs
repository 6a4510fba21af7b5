pub mod actions;
pub mod app;
pub mod components;
pub mod notify;
pub mod services;
pub mod store;

#[cfg(test)]
mod testing;
