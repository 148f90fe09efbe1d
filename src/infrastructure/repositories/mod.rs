//! Repository implementations using SeaORM raw statements

pub mod sql;
pub mod sql_repository;

pub use sql_repository::SqlRepository;
