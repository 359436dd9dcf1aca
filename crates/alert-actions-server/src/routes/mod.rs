pub mod available_actions;
pub mod health;
