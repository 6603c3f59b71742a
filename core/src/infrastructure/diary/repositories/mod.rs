pub mod diary_repository;
