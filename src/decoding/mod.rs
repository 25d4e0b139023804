pub mod block;
pub mod current;
pub mod error;
pub mod response;
pub mod table;
pub mod time_index;
