#![forbid(unsafe_code)]

extern crate proc_macro;

mod entity;
mod property;

mod attr {
    pub mod attr_util;
}

use proc_macro::TokenStream;

/// Declare the queryable properties of an entity.
///
/// ```ignore
/// pub struct Person;
///
/// #[criteria::entity("Person")]
/// impl Person {
///     fn name();
///
///     #[property("birth")]
///     fn birth_date();
/// }
///
/// let born_in_june = Person::birth_date().date_to_month().is(6);
/// ```
#[proc_macro_attribute]
pub fn entity(args: TokenStream, input: TokenStream) -> TokenStream {
    let name: syn::LitStr = syn::parse_macro_input!(args as syn::LitStr);
    let impl_entity = syn::parse_macro_input!(input as entity::ImplEntity);

    let tokens = entity::gen_entity(name, impl_entity);

    TokenStream::from(tokens)
}
