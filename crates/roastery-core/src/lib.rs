pub mod catalog;
pub mod db;
pub mod error;
pub mod seed;
pub mod types;
