//! Injected value-processing capabilities.
//!
//! The engine never interprets what a filter or validator does; it only
//! sequences the calls — filter first, then validator — on every value an
//! [`Arg`](crate::Arg) consumes.

/// Transforms a consumed value before validation.
pub trait Filter {
    fn apply(&self, value: &str) -> String;
}

impl<F> Filter for F
where
    F: Fn(&str) -> String,
{
    fn apply(&self, value: &str) -> String {
        self(value)
    }
}

/// Passes every value through unchanged. The default filter.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl Filter for Identity {
    fn apply(&self, value: &str) -> String {
        value.to_string()
    }
}

/// Accepts or rejects a filtered value, with a message on rejection.
pub trait Validate {
    fn check(&self, value: &str) -> Result<(), String>;
}

impl<F> Validate for F
where
    F: Fn(&str) -> Result<(), String>,
{
    fn check(&self, value: &str) -> Result<(), String> {
        self(value)
    }
}

/// Accepts every value. The default validator.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl Validate for AcceptAll {
    fn check(&self, _value: &str) -> Result<(), String> {
        Ok(())
    }
}
