pub mod db;
pub mod gateway;
