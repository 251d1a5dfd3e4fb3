use std::fmt;
use std::sync::Arc;

use address_validator::{ValidateOptions, Validator};

use crate::types::ValidateOptionsData;

/// Address validator implemented on the platform side (Swift, Kotlin) and
/// handed to Rust.
#[uniffi::export(with_foreign)]
pub trait AddressValidator: Send + Sync {
    fn validate(
        &self,
        address: String,
        currency: String,
        options: Option<ValidateOptionsData>,
    ) -> bool;
}

/// Exposes a platform [`AddressValidator`] through the Rust [`Validator`]
/// contract.
#[derive(Clone)]
pub struct ForeignValidator {
    inner: Arc<dyn AddressValidator>,
}

impl ForeignValidator {
    pub fn new(inner: Arc<dyn AddressValidator>) -> Self {
        Self { inner }
    }
}

impl Validator for ForeignValidator {
    fn validate(&self, address: &str, currency: &str, options: Option<&ValidateOptions>) -> bool {
        let options = options.copied().map(ValidateOptionsData::from);
        let valid = AddressValidator::validate(
            &*self.inner,
            address.to_string(),
            currency.to_string(),
            options,
        );
        tracing::trace!(currency, valid, "foreign address validation");
        valid
    }
}

impl fmt::Debug for ForeignValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForeignValidator").finish_non_exhaustive()
    }
}
