pub mod errors;
pub mod models;
pub mod scheduler;
pub mod state;
pub mod steps;
