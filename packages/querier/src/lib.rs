pub mod msg;
pub mod querier;
