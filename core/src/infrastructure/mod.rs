pub mod diary;
pub mod food;
pub mod llm;
pub mod meal;
pub mod storage;
