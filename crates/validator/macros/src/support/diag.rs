use proc_macro2::TokenStream;
use quote::ToTokens;

/// Error pointing at `tokens`.
pub fn spanned<T: ToTokens>(tokens: &T, msg: impl Into<String>) -> syn::Error {
    syn::Error::new_spanned(tokens, msg.into())
}

/// Collects field errors so a single expansion reports all of them.
#[derive(Default)]
pub struct Diagnostics {
    errors: Option<syn::Error>,
}

impl Diagnostics {
    pub fn push(&mut self, err: syn::Error) {
        match &mut self.errors {
            Some(errors) => errors.combine(err),
            None => self.errors = Some(err),
        }
    }

    /// Keeps the value, or records the error and yields `None`.
    pub fn capture<T>(&mut self, result: syn::Result<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                self.push(err);
                None
            }
        }
    }

    /// `Ok` only when nothing was recorded.
    pub fn finish(self) -> syn::Result<()> {
        self.errors.map_or(Ok(()), Err)
    }
}

/// Renders `err` as `compile_error!` invocations, one per recorded error.
pub fn into_tokens(err: &syn::Error) -> TokenStream {
    err.to_compile_error()
}
