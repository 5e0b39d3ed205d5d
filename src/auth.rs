//! Auth-domain values: the session token issued by `/auth` and the checksum derived from it.

pub mod checksum;
pub mod token;

pub use checksum::*;
pub use token::*;
