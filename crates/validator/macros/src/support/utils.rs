use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Fields, GenericParam};

/// Ensure input is a struct and return its fields.
pub fn require_struct_fields(input: &DeriveInput) -> syn::Result<&Fields> {
    match &input.data {
        Data::Struct(s) => Ok(&s.fields),
        _ => Err(syn::Error::new(
            input.ident.span(),
            "This derive can only be used on structs",
        )),
    }
}

/// Return named fields if struct has them; otherwise error.
pub fn require_named_fields(input: &DeriveInput) -> syn::Result<&syn::FieldsNamed> {
    let fields = require_struct_fields(input)?;
    match fields {
        Fields::Named(n) => Ok(n),
        Fields::Unnamed(_) => Err(syn::Error::new(
            fields.span(),
            "This derive requires a struct with named fields (e.g. `struct X { ... }`)",
        )),
        Fields::Unit => Err(syn::Error::new(
            fields.span(),
            "This derive requires a non-unit struct with fields",
        )),
    }
}

/// Reject lifetime parameters: inspected values are `'static`.
pub fn reject_lifetimes(input: &DeriveInput) -> syn::Result<()> {
    match input
        .generics
        .params
        .iter()
        .find(|param| matches!(param, GenericParam::Lifetime(_)))
    {
        Some(lifetime) => Err(syn::Error::new(
            lifetime.span(),
            "This derive does not support lifetime parameters",
        )),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;

    #[test]
    fn test_named_fields_accepted() {
        let input: DeriveInput = syn::parse2(quote!(struct A { x: u8 })).unwrap();
        assert_eq!(require_named_fields(&input).unwrap().named.len(), 1);
    }

    #[test]
    fn test_tuple_struct_rejected() {
        let input: DeriveInput = syn::parse2(quote!(struct A(u8);)).unwrap();
        assert!(require_named_fields(&input).is_err());
    }

    #[test]
    fn test_enum_rejected() {
        let input: DeriveInput = syn::parse2(quote!(enum A { X })).unwrap();
        let err = require_named_fields(&input).unwrap_err();
        assert_eq!(err.to_string(), "This derive can only be used on structs");
    }

    #[test]
    fn test_lifetimes_rejected() {
        let input: DeriveInput = syn::parse2(quote!(struct A<'a> { x: &'a str })).unwrap();
        assert!(reject_lifetimes(&input).is_err());
        let input: DeriveInput = syn::parse2(quote!(struct B<T> { x: T })).unwrap();
        assert!(reject_lifetimes(&input).is_ok());
    }
}
