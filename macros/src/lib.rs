use proc_macro::TokenStream;
use quote::quote;
use syn::parse::Parser;

/// Generate a record type holding three channels followed by an alpha
/// channel. The field names double as the keys the record is given when it is
/// turned into an `Input`, so the dispatcher classifies it the same way as a
/// hand built record.
#[proc_macro]
pub fn gen_record(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if input.fields.len() != 4 {
        return quote! {
            compile_error!("Records must have exactly 4 fields, three channels followed by alpha.")
        }
        .into();
    }

    if !input.generics.params.is_empty() {
        return quote! {
            compile_error!("Records can not be generic.")
        }
        .into();
    }

    let field_names = input
        .fields
        .iter()
        .filter_map(|f| f.ident.clone())
        .collect::<Vec<_>>();

    if field_names.len() != 4 {
        return quote! {
            compile_error!("Record fields must be named.")
        }
        .into();
    }

    let field_types = input
        .fields
        .iter()
        .map(|f| f.ty.clone())
        .collect::<Vec<_>>();

    let keys = field_names
        .iter()
        .map(|ident| ident.to_string())
        .collect::<Vec<_>>();

    // Make sure all the fields are public.
    input.fields.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Public(Default::default());
    });

    // TODO: Check if the derives are already there.
    let attrs = match syn::Attribute::parse_outer.parse2(quote! {
        #[derive(Clone, Copy, Debug, PartialEq)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    }) {
        Ok(attrs) => attrs,
        Err(err) => return err.to_compile_error().into(),
    };
    input.attrs.extend(attrs);

    let struct_name = input.ident.clone();

    let record_impl = quote! {
        impl #struct_name {
            /// Create a new record from its three channels and alpha.
            pub fn new(#(#field_names: #field_types),*) -> Self {
                Self {
                    #(#field_names,)*
                }
            }
        }

        impl From<#struct_name> for crate::input::Input {
            fn from(value: #struct_name) -> Self {
                crate::input::Input::Record(
                    crate::input::Record::new()
                        #(.with(#keys, value.#field_names))*
                )
            }
        }
    };

    quote! {
        #input
        #record_impl
    }
    .into()
}
