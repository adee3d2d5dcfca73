use thiserror::Error;

pub type Result<T> = ::std::result::Result<T, VectorError>;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorError {
    #[error("Vector has zero magnitude")]
    ZeroMagnitude,
    #[error("Vector magnitude or a quotient of it is not finite")]
    NonFinite,
}
