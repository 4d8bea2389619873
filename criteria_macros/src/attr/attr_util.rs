/// Whether `attr` is `#[name ...]`, without any path prefix.
pub fn attr_has_simple_ident(attr: &syn::Attribute, name: &str) -> bool {
    attr.path.is_ident(name)
}
