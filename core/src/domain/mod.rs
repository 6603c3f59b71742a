pub mod common;
pub mod diary;
pub mod food;
pub mod meal;
pub mod nutrition;
pub mod storage;
