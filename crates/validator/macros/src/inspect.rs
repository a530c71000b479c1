use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;
use syn::{DeriveInput, GenericParam, parse_macro_input, parse_quote};

use crate::support::diag::{self, Diagnostics};
use crate::support::{attrs, utils};

const ATTR: &str = "validation";
const KNOWN: &[&str] = &["alias", "skip"];

pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand(input) {
        Ok(ts) => ts.into(),
        Err(e) => diag::into_tokens(&e).into(),
    }
}

/// One inspected field: Rust identifier, lookup name and externally
/// visible alias.
struct FieldEntry {
    ident: syn::Ident,
    name: String,
    alias: Option<String>,
}

fn expand(mut input: DeriveInput) -> syn::Result<TokenStream2> {
    utils::reject_lifetimes(&input)?;
    let fields = collect_fields(&input)?;

    for param in &mut input.generics.params {
        if let GenericParam::Type(ty) = param {
            ty.bounds.push(parse_quote!(::trellis_validator::Inspect));
        }
    }

    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let defs = fields.iter().map(|f| {
        let name = &f.name;
        match &f.alias {
            Some(alias) => quote!(::trellis_validator::FieldDef::aliased(#name, #alias)),
            None => quote!(::trellis_validator::FieldDef::new(#name)),
        }
    });
    let arms = fields.iter().map(|f| {
        let name = &f.name;
        let ident = &f.ident;
        quote!(#name => ::core::option::Option::Some(&self.#ident),)
    });

    Ok(quote! {
        impl #impl_generics ::trellis_validator::Inspect for #struct_name #ty_generics #where_clause {
            fn shape(&self) -> ::trellis_validator::Shape<'_> {
                ::trellis_validator::Shape::Struct(self)
            }
        }

        impl #impl_generics ::trellis_validator::Structure for #struct_name #ty_generics #where_clause {
            fn fields(&self) -> &'static [::trellis_validator::FieldDef] {
                const FIELDS: &[::trellis_validator::FieldDef] = &[#(#defs),*];
                FIELDS
            }

            fn field(
                &self,
                name: &str,
            ) -> ::core::option::Option<&dyn ::trellis_validator::Inspect> {
                match name {
                    #(#arms)*
                    _ => ::core::option::Option::None,
                }
            }
        }
    })
}

/// Reads every field's attributes. Errors from all fields are reported
/// together.
fn collect_fields(input: &DeriveInput) -> syn::Result<Vec<FieldEntry>> {
    let named = utils::require_named_fields(input)?;
    let mut entries = Vec::with_capacity(named.named.len());
    let mut errors = Diagnostics::default();

    for field in &named.named {
        if let Some(entry) = errors.capture(field_entry(field)).flatten() {
            entries.push(entry);
        }
    }

    errors.finish()?;
    Ok(entries)
}

fn field_entry(field: &syn::Field) -> syn::Result<Option<FieldEntry>> {
    let args = attrs::parse_attrs(&field.attrs, ATTR)?;
    args.deny_unknown(KNOWN)?;
    if args.has_flag("skip") {
        return Ok(None);
    }

    let Some(ident) = field.ident.clone() else {
        return Err(diag::spanned(field, "expected a named field"));
    };
    let alias = args.get_string("alias")?;
    if alias.as_deref() == Some("") {
        return Err(diag::spanned(field, "`alias` must not be empty"));
    }

    Ok(Some(FieldEntry {
        name: ident.unraw().to_string(),
        ident,
        alias,
    }))
}
