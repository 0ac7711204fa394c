//! Persistence, services and checkout orchestration for the food-ordering app.

pub mod context;
pub mod database;
pub mod domain;

#[cfg(test)]
mod test;
