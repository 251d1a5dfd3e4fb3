use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use crate::network::NetworkType;
use crate::options::ValidateOptions;

/// An already-instantiated address validator.
///
/// `currency` is the validator's own token for the coin or chain whose
/// address format is checked (for example `"bitcoin"`). Passing `None` for
/// `options` leaves the validator's defaults in effect. The answer is a
/// single boolean: `true` when `address` is well formed for `currency` under
/// the selected network type.
pub trait Validator {
    fn validate(&self, address: &str, currency: &str, options: Option<&ValidateOptions>) -> bool;
}

impl<V: Validator + ?Sized> Validator for &V {
    fn validate(&self, address: &str, currency: &str, options: Option<&ValidateOptions>) -> bool {
        (**self).validate(address, currency, options)
    }
}

impl<V: Validator + ?Sized> Validator for Box<V> {
    fn validate(&self, address: &str, currency: &str, options: Option<&ValidateOptions>) -> bool {
        (**self).validate(address, currency, options)
    }
}

impl<V: Validator + ?Sized> Validator for Rc<V> {
    fn validate(&self, address: &str, currency: &str, options: Option<&ValidateOptions>) -> bool {
        (**self).validate(address, currency, options)
    }
}

impl<V: Validator + ?Sized> Validator for Arc<V> {
    fn validate(&self, address: &str, currency: &str, options: Option<&ValidateOptions>) -> bool {
        (**self).validate(address, currency, options)
    }
}

/// Convenience calls layered on top of [`Validator::validate`].
pub trait ValidatorExt: Validator {
    /// Validate with the implementation's default options.
    fn validate_default(&self, address: &str, currency: &str) -> bool {
        self.validate(address, currency, None)
    }

    /// Validate against a specific network type.
    fn validate_with_network(&self, address: &str, currency: &str, network: NetworkType) -> bool {
        let options = ValidateOptions::new().with_network_type(network);
        self.validate(address, currency, Some(&options))
    }
}

impl<V: Validator + ?Sized> ValidatorExt for V {}

/// Adapter turning a closure into a [`Validator`].
///
/// Closures cannot implement the trait directly without clashing with the
/// reference and smart-pointer impls above.
#[derive(Clone, Copy)]
pub struct FnValidator<F>(pub F);

impl<F> Validator for FnValidator<F>
where
    F: Fn(&str, &str, Option<&ValidateOptions>) -> bool,
{
    fn validate(&self, address: &str, currency: &str, options: Option<&ValidateOptions>) -> bool {
        (self.0)(address, currency, options)
    }
}

impl<F> fmt::Debug for FnValidator<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnValidator").finish_non_exhaustive()
    }
}

/// Wrap a closure as a [`Validator`].
pub fn from_fn<F>(f: F) -> FnValidator<F>
where
    F: Fn(&str, &str, Option<&ValidateOptions>) -> bool,
{
    FnValidator(f)
}
