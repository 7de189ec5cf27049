pub mod capture;
pub mod health;
