mod connection;
mod error;
pub mod sql;
mod stores;
mod tables;

pub use connection::*;
pub use error::*;
pub use stores::*;
pub use tables::*;
