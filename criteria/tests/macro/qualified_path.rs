mod model {
    pub struct Tag;
}

#[criteria::entity("tag")]
impl model::Tag {
    fn label();
}

fn main() {
    let operand = model::Tag::label().to_lower_case();
    assert_eq!(operand.entity_name(), "tag");
    assert_eq!(operand.property_name(), "label");
}
