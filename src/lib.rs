pub mod canonical;
pub mod constant;
pub mod error;
pub mod hash;
pub mod s3;
pub mod signer;
pub mod timestamp;

pub use canonical::*;
pub use constant::*;
pub use error::*;
pub use s3::*;
pub use signer::*;
pub use timestamp::*;
