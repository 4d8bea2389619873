use criteria::Entity;

pub struct Invoice;
pub struct Customer;

#[criteria::entity("Invoice")]
impl Invoice {
    fn id();

    #[property("customer")]
    fn customer_id();

    /// When the invoice was issued
    fn issued_at();
}

#[criteria::entity("Customer")]
impl Customer {
    fn id();
}

fn main() {
    let criteria = Invoice::customer_id()
        .is_property(Customer::id())
        .and(Invoice::issued_at().date_to_year().is(2021));

    assert_eq!(Invoice::NAME, "Invoice");
    assert_eq!(
        criteria.to_string(),
        "(Invoice.customer EQUALS Customer.id AND Invoice.issued_at EQUALS 2021)"
    );
}
