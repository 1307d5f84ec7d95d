// @generated by errgen from `plex_errors.yaml`. Do not edit by hand.

use enumn::N;
use thiserror::Error;

/// Error codes with a numeric discriminant.
///
/// Each discriminant is the record's code, multiplied by its status when one is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, N)]
pub enum ApiError {
    #[error("X-Plex-Client-Identifier is missing")]
    ClientIdentifierMissing = 400000,

    #[error("User could not be authenticated")]
    Unauthorized = 401401,

    #[error("The requested resource or endpoint could not be found")]
    NotFound = 404808,

    #[error("API rate limit exceeded")]
    OverRateLimit = 430287,

    #[error("Managed users aren't allowed to perform this action")]
    ForbiddenForRestrictedUsers = 406627,

    #[error("Required field cannot be blank")]
    Blank = 1010,

    #[error("The value provided for the field has already been taken")]
    Taken = 1011,

    #[error("Code not found or expired")]
    PinNotFoundOrExpired = 1020,

    #[error("Two-Factor authentication is not enabled yet")]
    MfaNotEnabled = 432550,

}
