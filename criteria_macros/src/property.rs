use quote::quote;
use syn::ext::IdentExt;
use syn::spanned::Spanned;

use crate::attr::attr_util;

pub struct PropertyMethod {
    ident: syn::Ident,
    docs: Vec<syn::Attribute>,
    property_name: syn::LitStr,
}

impl PropertyMethod {
    pub fn try_from(method: syn::TraitItemMethod) -> syn::Result<Self> {
        let sig = &method.sig;

        if !sig.inputs.is_empty() {
            return Err(syn::Error::new(sig.inputs.span(), "Expected no arguments"));
        }

        if let syn::ReturnType::Type(_, ty) = &sig.output {
            return Err(syn::Error::new(ty.span(), "Expected no return type"));
        }

        if let Some(block) = &method.default {
            return Err(syn::Error::new(block.span(), "Expected no body"));
        }

        let mut docs = Vec::new();
        let mut property_name = None;

        for attr in method.attrs {
            if attr_util::attr_has_simple_ident(&attr, "doc") {
                docs.push(attr);
            } else if attr_util::attr_has_simple_ident(&attr, "property") {
                property_name = Some(attr.parse_args::<syn::LitStr>()?);
            } else {
                return Err(syn::Error::new(attr.span(), "Unrecognized attribute"));
            }
        }

        let ident = method.sig.ident;
        // `fn r#type()` is the property "type"
        let property_name = property_name
            .unwrap_or_else(|| syn::LitStr::new(&ident.unraw().to_string(), ident.span()));

        Ok(PropertyMethod {
            ident,
            docs,
            property_name,
        })
    }
}

pub fn gen_method(method: &PropertyMethod) -> proc_macro2::TokenStream {
    let PropertyMethod {
        ident,
        docs,
        property_name,
    } = method;

    quote! {
        #(#docs)*
        pub fn #ident() -> ::criteria::Operand {
            ::criteria::Operand::new(<Self as ::criteria::Entity>::NAME, #property_name)
        }
    }
}
