use cosmwasm_std::{OverflowError, StdError};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("caller is not the owner")]
    Unauthorized {},

    #[error("caller is not the contract")]
    NotSelf {},

    #[error("exceeds maximum limit")]
    FeeExceedsMaximum {},

    #[error("invalid address")]
    InvalidAddress {},

    #[error("same address")]
    SameAddress {},

    #[error("invalid denom")]
    InvalidDenom {},

    #[error("invalid path")]
    InvalidPath {},

    #[error("invalid zero amount")]
    ZeroAmount {},

    #[error("invalid funds; expected {expected}")]
    InvalidFunds { expected: String },
}

impl From<OverflowError> for ContractError {
    fn from(o: OverflowError) -> Self {
        StdError::from(o).into()
    }
}
