pub mod edit;
pub mod session;
pub mod table;
