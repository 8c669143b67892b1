pub mod dispatch;
pub mod list;
pub mod report;
pub mod schema;
pub mod seed;
pub mod shared;
