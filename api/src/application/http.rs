pub mod diary;
pub mod food;
pub mod health;
pub mod meal;
pub mod nutrition;
pub mod server;
