//! Type contract for an externally supplied address validator.
//!
//! This crate does not validate anything itself. It describes the call shape
//! of a validator that lives elsewhere (a third-party library, or a platform
//! implementation handed in over FFI) so callers get static checking of the
//! arguments and the result:
//!
//! ```
//! use address_validator::{ValidateOptions, Validator};
//!
//! fn check(validator: &dyn Validator) -> bool {
//!     validator.validate("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa", "bitcoin", Some(&ValidateOptions::prod()))
//! }
//! # let _ = check;
//! ```
//!
//! The network type is a closed set, so anything other than prod or test is
//! rejected at compile time:
//!
//! ```compile_fail
//! use address_validator::{NetworkType, ValidateOptions};
//!
//! let options = ValidateOptions::new().with_network_type(NetworkType::Staging);
//! ```

pub mod error;
pub mod network;
pub mod options;
pub mod validator;

pub use error::ValidatorError;
pub use network::NetworkType;
pub use options::ValidateOptions;
pub use validator::{from_fn, FnValidator, Validator, ValidatorExt};
