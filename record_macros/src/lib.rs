use convert_case::{Case, Casing};
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;
use syn::{parse_macro_input, Data, DeriveInput, Fields, LitStr, Path};

/// Implements `crate::record::Record`, `Display` and `RenderField` for a record struct.
///
/// `#[record(frozen)]` keeps the fields private behind generated getters and a `new`
/// constructor. `#[record(validate = "path")]` runs `path(&self)` after construction.
#[proc_macro_derive(Record, attributes(record))]
pub fn derive_record(item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    expand(input).unwrap_or_else(syn::Error::into_compile_error).into()
}

fn expand(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let mut frozen = false;
    let mut validate: Option<Path> = None;
    for attr in input.attrs.iter().filter(|a| a.path().is_ident("record")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("frozen") {
                frozen = true;
                Ok(())
            } else if meta.path.is_ident("validate") {
                let path: LitStr = meta.value()?.parse()?;
                validate = Some(path.parse()?);
                Ok(())
            } else {
                Err(meta.error("expected `frozen` or `validate = \"path\"`"))
            }
        })?;
    }

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => return Err(syn::Error::new_spanned(name, "records need named fields")),
        },
        _ => return Err(syn::Error::new_spanned(name, "records must be structs")),
    };

    let idents: Vec<_> = fields.iter().filter_map(|f| f.ident.as_ref()).collect();
    let types: Vec<_> = fields.iter().map(|f| &f.ty).collect();
    let field_names: Vec<String> = idents.iter().map(|i| i.unraw().to_string()).collect();

    let type_name = name.to_string();
    let kind = type_name.to_case(Case::Kebab);

    let validate_fn = validate.map(|path| {
        quote! {
            fn validate(&self) -> ::std::result::Result<(), crate::record::RecordError> {
                #path(self)
            }
        }
    });

    let frozen_impl = frozen.then(|| {
        quote! {
            impl #impl_generics #name #ty_generics #where_clause {
                #[allow(clippy::too_many_arguments)]
                pub fn new(#(#idents: #types),*) -> Self {
                    Self { #(#idents),* }
                }

                #(
                    pub fn #idents(&self) -> &#types {
                        &self.#idents
                    }
                )*
            }
        }
    });

    Ok(quote! {
        impl #impl_generics crate::record::Record for #name #ty_generics #where_clause {
            const NAME: &'static str = #type_name;
            const KIND: &'static str = #kind;

            fn fields(&self) -> ::std::vec::Vec<crate::record::Field<'_>> {
                ::std::vec![#((#field_names, &self.#idents as &dyn crate::record::RenderField)),*]
            }

            #validate_fn
        }

        impl #impl_generics ::std::fmt::Display for #name #ty_generics #where_clause {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                crate::record::render::write_record(f, #type_name, &crate::record::Record::fields(self))
            }
        }

        impl #impl_generics crate::record::RenderField for #name #ty_generics #where_clause {
            fn render(&self) -> ::std::string::String {
                crate::record::render::inline_record(#type_name, &crate::record::Record::fields(self))
            }
        }

        #frozen_impl
    })
}
