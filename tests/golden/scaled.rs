// @generated by errgen from `scaled.toml`. Do not edit by hand.

use enumn::N;
use thiserror::Error;

/// Error codes with a numeric discriminant.
///
/// Each discriminant is the record's code, multiplied by its status when one is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, N)]
pub enum ApiError {
    #[error("scaled")]
    BarBaz = 6,

    #[error("bad foo")]
    Foo = 1,

}
