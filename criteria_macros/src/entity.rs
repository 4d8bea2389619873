use quote::quote;
use syn::parse::ParseStream;

use crate::property;

pub struct ImplEntity {
    pub self_ty: syn::Type,
    pub property_results: Vec<syn::Result<property::PropertyMethod>>,
}

impl syn::parse::Parse for ImplEntity {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let _: syn::token::Impl = input.parse()?;
        let self_ty: syn::Type = input.parse()?;

        let content;
        let _brace_token = syn::braced!(content in input);

        let mut property_results = Vec::new();
        while !content.is_empty() {
            property_results.push(
                content
                    .parse::<syn::TraitItemMethod>()
                    .and_then(property::PropertyMethod::try_from),
            );
        }

        Ok(ImplEntity {
            self_ty,
            property_results,
        })
    }
}

pub fn gen_entity(entity_name: syn::LitStr, impl_entity: ImplEntity) -> proc_macro2::TokenStream {
    let self_ty = &impl_entity.self_ty;

    let property_methods = impl_entity.property_results.iter().map(|result| {
        result
            .as_ref()
            .map(property::gen_method)
            .unwrap_or_else(|err| err.to_compile_error())
    });

    quote! {
        impl ::criteria::Entity for #self_ty {
            const NAME: &'static str = #entity_name;
        }

        impl #self_ty {
            #(#property_methods)*
        }
    }
}
