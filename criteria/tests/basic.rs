use criteria::database::SqlFunction;
use criteria::prelude::*;
use criteria::{And, Comparison, ComparisonValue, Or};

pub mod db {
    pub struct Person;
    pub struct Order;

    #[criteria::entity("Person")]
    impl Person {
        fn id();
        fn name();

        /// Date of birth
        #[property("birth")]
        fn birth_date();
    }

    #[criteria::entity("Order")]
    impl Order {
        fn person_id();
        fn r#type();
    }
}

/// Renders the tree the way the diagnostic dump does,
/// but through the visitor protocol.
struct Dump;

impl CriteriaVisitor for Dump {
    type Output = String;

    fn visit_and(&mut self, and: &And) -> String {
        format!("({} AND {})", and.left().accept(self), and.right().accept(self))
    }

    fn visit_or(&mut self, or: &Or) -> String {
        format!("({} OR {})", or.left().accept(self), or.right().accept(self))
    }

    fn visit_comparison(&mut self, comparison: &Comparison) -> String {
        let value = match comparison.value() {
            ComparisonValue::None => "null".to_string(),
            ComparisonValue::Value(value) => value.to_string(),
            ComparisonValue::Property(operand) => operand.to_string(),
            ComparisonValue::List(values) => format!("{:?}", values),
        };

        format!(
            "{}.{} {} {}",
            comparison.left().entity_name(),
            comparison.left().property_name(),
            comparison.operator(),
            value
        )
    }
}

/// Records the order in which the visitor handlers are invoked.
#[derive(Default)]
struct Trace(Vec<&'static str>);

impl CriteriaVisitor for Trace {
    type Output = ();

    fn visit_and(&mut self, and: &And) {
        self.0.push("and");
        and.left().accept(self);
        and.right().accept(self);
    }

    fn visit_or(&mut self, or: &Or) {
        self.0.push("or");
        or.left().accept(self);
        or.right().accept(self);
    }

    fn visit_comparison(&mut self, _: &Comparison) {
        self.0.push("comparison");
    }
}

#[test]
fn golden_traversal() {
    let criteria = property("E", "a")
        .greater_than(5)
        .and(property("E", "b").is_null());

    assert_eq!(
        criteria.accept(&mut Dump),
        "(E.a GREATER_THAN 5 AND E.b IS_NULL null)"
    );
    assert_eq!(criteria.to_string(), criteria.accept(&mut Dump));
}

#[test]
fn traversal_is_depth_first_left_to_right() {
    let criteria = property("E", "a")
        .is(1)
        .and(property("E", "b").is(2))
        .or(property("E", "c").is(3));

    let mut trace = Trace::default();
    criteria.accept(&mut trace);

    assert_eq!(trace.0, vec!["or", "and", "comparison", "comparison", "comparison"]);
}

#[test]
fn precedence_is_structural() {
    let a = property("E", "a").is(1);
    let b = property("E", "b").is(2);
    let c = property("E", "c").is(3);

    let criteria = a.clone().and(b.clone()).or(c.clone());
    assert_eq!(criteria.accept(&mut Dump), "((E.a EQUALS 1 AND E.b EQUALS 2) OR E.c EQUALS 3)");

    let criteria = a.and(b.or(c));
    assert_eq!(criteria.accept(&mut Dump), "(E.a EQUALS 1 AND (E.b EQUALS 2 OR E.c EQUALS 3))");
}

#[test]
fn in_copies_the_collection() {
    let mut ids = vec![1, 2, 3];
    let criteria = property("E", "id").is_in(&ids);

    ids.push(4);
    ids[0] = 9;

    match criteria {
        Criteria::Comparison(comparison) => assert_eq!(
            comparison.value(),
            &ComparisonValue::List(vec![Value::Int(1), Value::Int(2), Value::Int(3)])
        ),
        other => panic!("expected comparison, got {:?}", other),
    }
}

#[test]
fn is_null_reads_back_as_absent() {
    match property("E", "b").is_null() {
        Criteria::Comparison(comparison) => {
            assert_eq!(comparison.operator(), Operator::IsNull);
            assert!(comparison.value().is_none());
        }
        other => panic!("expected comparison, got {:?}", other),
    }
}

#[test]
fn leaves_own_independent_operands() {
    let year = property("E", "at").date_to_year();
    let criteria = year
        .clone()
        .is(2020)
        .or(year.to_upper_case().is("X"));

    let or = match &criteria {
        Criteria::Or(or) => or,
        other => panic!("expected Or, got {:?}", other),
    };

    let transforms = |criteria: &Criteria| match criteria {
        Criteria::Comparison(comparison) => comparison.left().transforms(),
        other => panic!("expected comparison, got {:?}", other),
    };

    assert_eq!(transforms(or.left()), vec![SqlFunction::Year]);
    assert_eq!(
        transforms(or.right()),
        vec![SqlFunction::Upper, SqlFunction::Year]
    );
}

#[test]
fn trees_can_be_shared_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Criteria>();

    let criteria = std::sync::Arc::new(
        property("E", "a").is(1).and(property("E", "b").is_not_null()),
    );

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let criteria = criteria.clone();
            std::thread::spawn(move || criteria.accept(&mut Dump))
        })
        .collect();

    for handle in handles {
        assert_eq!(
            handle.join().unwrap(),
            "(E.a EQUALS 1 AND E.b IS_NOT_NULL null)"
        );
    }
}

#[test]
fn entity_macro_generates_operands() {
    use db::{Order, Person};

    assert_eq!(<Person as Entity>::NAME, "Person");

    let operand = Person::birth_date().date_to_month();
    assert_eq!(operand.entity_name(), "Person");
    assert_eq!(operand.property_name(), "birth");
    assert_eq!(operand.transforms(), vec![SqlFunction::Month]);

    assert_eq!(Order::r#type().property_name(), "type");

    let criteria = Order::person_id().is_property(Person::id());
    assert_eq!(criteria.to_string(), "Order.person_id EQUALS Person.id");
}
