pub mod micropost_repository;
pub mod relationship_repository;
pub mod user_repository;
