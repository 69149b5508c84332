pub mod cfg;
pub mod constant;
pub mod db;
pub mod error;
pub mod logging;
pub mod product;
