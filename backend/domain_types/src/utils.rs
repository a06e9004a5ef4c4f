use crate::errors::PaymentMethodError;

pub type Error = error_stack::Report<PaymentMethodError>;

pub trait ForeignFrom<F>: Sized {
    /// Convert from a foreign type to the current type
    fn foreign_from(from: F) -> Self;
}

pub fn missing_field_err(field_name: &'static str) -> Box<dyn Fn() -> Error + 'static> {
    Box::new(move || PaymentMethodError::MissingRequiredField { field_name }.into())
}
