use chrono::NaiveDate;
use criteria::database::{Database, MySql, Postgres, SqlFunction};
use criteria::prelude::*;
use criteria::render::{to_sql, RenderOptions};

fn adults_named_like(pattern: &str) -> Criteria {
    property("Person", "age")
        .greater_or_equal_to(18)
        .and(property("Person", "name").to_lower_case().like(pattern))
}

#[test]
fn postgres_where_clause() {
    let criteria = adults_named_like("a%").or(property("Person", "id").is_in(&[1, 2, 3]));

    let rendered = SqlRenderer::<Postgres>::new()
        .alias("Person", "p")
        .render(&criteria)
        .unwrap();

    assert_eq!(
        rendered.sql(),
        r#"(("p"."age" >= $1 AND LOWER("p"."name") LIKE $2) OR "p"."id" IN ($3, $4, $5))"#
    );
    assert_eq!(
        rendered.params(),
        &[
            Value::Int(18),
            Value::Text("a%".into()),
            Value::Int(1),
            Value::Int(2),
            Value::Int(3)
        ]
    );
}

#[test]
fn mysql_where_clause() {
    let criteria = adults_named_like("b%").and(property("Person", "email").is_not_null());

    let rendered = to_sql::<MySql>(&criteria).unwrap();

    assert_eq!(
        rendered.sql(),
        "((`Person`.`age` >= ? AND LOWER(`Person`.`name`) LIKE ?) AND `Person`.`email` IS NOT NULL)"
    );
    assert_eq!(rendered.params().len(), 2);
}

#[test]
fn column_to_column_binds_nothing() {
    let criteria = property("Order", "shipped")
        .date_to_year()
        .greater_than_property(property("Order", "ordered").date_to_year());

    let rendered = SqlRenderer::<Postgres>::new()
        .alias("Order", "o")
        .render(&criteria)
        .unwrap();

    assert_eq!(
        rendered.sql(),
        r#"EXTRACT(YEAR FROM "o"."shipped") > EXTRACT(YEAR FROM "o"."ordered")"#
    );
    assert!(rendered.params().is_empty());
}

#[test]
fn date_parts_per_dialect() {
    let criteria = property("Event", "at")
        .date_to_iso_day_of_week()
        .is(1)
        .and(property("Event", "at").date_to_iso_week().is(52));

    let pg = to_sql::<Postgres>(&criteria).unwrap();
    assert_eq!(
        pg.sql(),
        r#"(EXTRACT(ISODOW FROM "Event"."at") = $1 AND EXTRACT(WEEK FROM "Event"."at") = $2)"#
    );

    let my = to_sql::<MySql>(&criteria).unwrap();
    assert_eq!(
        my.sql(),
        "((WEEKDAY(`Event`.`at`) + 1) = ? AND WEEK(`Event`.`at`, 3) = ?)"
    );
}

fn render_function<DB: Database>(transform: fn(Operand) -> Operand) -> String {
    let criteria = transform(property("E", "a")).is_not_null();
    to_sql::<DB>(&criteria).unwrap().into_parts().0
}

#[test]
fn every_function_per_dialect() {
    let table: Vec<(fn(Operand) -> Operand, SqlFunction, &str, &str)> = vec![
        (
            Operand::to_upper_case,
            SqlFunction::Upper,
            r#"UPPER("E"."a")"#,
            "UPPER(`E`.`a`)",
        ),
        (
            Operand::to_lower_case,
            SqlFunction::Lower,
            r#"LOWER("E"."a")"#,
            "LOWER(`E`.`a`)",
        ),
        (
            Operand::date_to_iso_day_of_week,
            SqlFunction::IsoDayOfWeek,
            r#"EXTRACT(ISODOW FROM "E"."a")"#,
            "(WEEKDAY(`E`.`a`) + 1)",
        ),
        (
            Operand::date_to_day_of_month,
            SqlFunction::DayOfMonth,
            r#"EXTRACT(DAY FROM "E"."a")"#,
            "DAYOFMONTH(`E`.`a`)",
        ),
        (
            Operand::date_to_day_of_year,
            SqlFunction::DayOfYear,
            r#"EXTRACT(DOY FROM "E"."a")"#,
            "DAYOFYEAR(`E`.`a`)",
        ),
        (
            Operand::date_to_month,
            SqlFunction::Month,
            r#"EXTRACT(MONTH FROM "E"."a")"#,
            "MONTH(`E`.`a`)",
        ),
        (
            Operand::date_to_year,
            SqlFunction::Year,
            r#"EXTRACT(YEAR FROM "E"."a")"#,
            "YEAR(`E`.`a`)",
        ),
        (
            Operand::date_to_iso_week,
            SqlFunction::IsoWeek,
            r#"EXTRACT(WEEK FROM "E"."a")"#,
            "WEEK(`E`.`a`, 3)",
        ),
        (
            Operand::time_to_hour,
            SqlFunction::Hour,
            r#"EXTRACT(HOUR FROM "E"."a")"#,
            "HOUR(`E`.`a`)",
        ),
        (
            Operand::time_to_minute,
            SqlFunction::Minute,
            r#"EXTRACT(MINUTE FROM "E"."a")"#,
            "MINUTE(`E`.`a`)",
        ),
        (
            Operand::time_to_second,
            SqlFunction::Second,
            r#"FLOOR(EXTRACT(SECOND FROM "E"."a"))"#,
            "SECOND(`E`.`a`)",
        ),
    ];

    assert_eq!(table.len(), 11);

    for (transform, function, pg, my) in table {
        assert_eq!(transform(property("E", "a")).transforms(), vec![function]);
        assert_eq!(
            render_function::<Postgres>(transform),
            format!("{} IS NOT NULL", pg)
        );
        assert_eq!(
            render_function::<MySql>(transform),
            format!("{} IS NOT NULL", my)
        );
    }
}

#[test]
fn prepend_with_offset() {
    let options = RenderOptions {
        placeholder_offset: 1,
        ..RenderOptions::default()
    };

    let born = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
    let criteria = property("Person", "birth").less_than(born);

    let rendered = SqlRenderer::<Postgres>::with_options(options)
        .alias("Person", "p")
        .render(&criteria)
        .unwrap()
        .prepend("SELECT * FROM person p WHERE p.tenant = $1 AND ");

    let (sql, params) = rendered.into_parts();
    assert_eq!(
        sql,
        r#"SELECT * FROM person p WHERE p.tenant = $1 AND "p"."birth" < $2"#
    );
    assert_eq!(params, vec![Value::Date(born)]);
}

#[cfg(feature = "postgres")]
#[test]
fn bind_into_sqlx_query() {
    use sqlx::Execute;

    let rendered = to_sql::<Postgres>(&adults_named_like("c%"))
        .unwrap()
        .prepend("SELECT id FROM \"Person\" WHERE ");

    let query = rendered.bind();
    assert_eq!(query.sql(), rendered.sql());
}
