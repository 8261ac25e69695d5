use pretty_assertions::assert_eq;
use tests::{init_logging, models::Location};

#[test]
fn select_all() {
    init_logging();

    assert_eq!(
        rowmap::select_all::<Location>().unwrap(),
        "SELECT longitude, latitude, name, visitors FROM sites;"
    );
}

#[test]
fn select_one() {
    init_logging();
    let location = Location::new(10, 20);

    assert_eq!(
        rowmap::select_one(&location).unwrap(),
        "SELECT longitude, latitude, name, visitors FROM sites WHERE longitude = 10 AND latitude = 20;"
    );
}

#[test]
fn update() {
    init_logging();
    let location = Location::named(10, 20, "Moon");

    assert_eq!(
        rowmap::update(&location).unwrap(),
        "UPDATE sites SET name = 'Moon', visitors = NULL WHERE longitude = 10 AND latitude = 20;"
    );
}

#[test]
fn insert() {
    init_logging();
    let location = Location::named(10, 20, "Moon");

    assert_eq!(
        rowmap::insert(&location).unwrap(),
        "INSERT INTO sites (longitude, latitude, name, visitors) VALUES (10, 20, 'Moon', NULL);"
    );
}

#[test]
fn delete() {
    init_logging();
    let location = Location::new(10, 20);

    assert_eq!(
        rowmap::delete(&location).unwrap(),
        "DELETE FROM sites WHERE longitude = 10 AND latitude = 20;"
    );
}

#[test]
fn present_values_are_rendered() {
    init_logging();
    let location = Location {
        visitors_per_year: Some(1_500),
        ..Location::named(-3, 0, "Sea of Tranquility")
    };

    assert_eq!(
        rowmap::update(&location).unwrap(),
        "UPDATE sites SET name = 'Sea of Tranquility', visitors = 1500 WHERE longitude = -3 AND latitude = 0;"
    );
}

#[test]
fn generation_does_not_depend_on_call_count() {
    init_logging();
    let location = Location::named(10, 20, "Moon");

    for _ in 0..3 {
        assert_eq!(
            rowmap::insert(&location).unwrap(),
            rowmap::insert(&location.clone()).unwrap()
        );
        assert_eq!(
            rowmap::select_one(&location).unwrap(),
            rowmap::select_one(&location).unwrap()
        );
    }
}

#[test]
fn schema_reflects_declaration() {
    init_logging();
    use rowmap::Entity;

    let model = Location::schema();

    assert_eq!(model.name, "tests::models::Location");
    assert_eq!(model.table_name(), Some("sites"));

    let columns: Vec<_> = model.columns().map(|field| field.column_name()).collect();
    assert_eq!(columns, ["longitude", "latitude", "name", "visitors"]);

    let keys: Vec<_> = model.keys().map(|field| field.name.as_str()).collect();
    assert_eq!(keys, ["longitude", "latitude"]);

    let visitors = model.fields[3].column.as_ref().unwrap();
    assert_eq!(visitors.ty, rowmap::stmt::Type::I64);
    assert!(visitors.nullable);
}
