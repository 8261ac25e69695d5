use tests::{
    init_logging,
    models::{KeysNotColumns, Membership, NoColumns, NoKeys, NoTable},
};

#[test]
fn no_table_fails_every_operation() {
    init_logging();
    let entity = NoTable {
        longitude: 10,
        latitude: 20,
    };

    let errors = [
        rowmap::select_all::<NoTable>().unwrap_err(),
        rowmap::select_one(&entity).unwrap_err(),
        rowmap::insert(&entity).unwrap_err(),
        rowmap::update(&entity).unwrap_err(),
        rowmap::delete(&entity).unwrap_err(),
    ];

    for err in errors {
        assert!(err.is_missing_table_metadata(), "{err}");
        assert_eq!(
            err.to_string(),
            "missing table metadata: tests::models::NoTable"
        );
    }
}

#[test]
fn no_columns() {
    init_logging();
    let entity = NoColumns {
        longitude: 10,
        latitude: 20,
    };

    assert!(rowmap::select_all::<NoColumns>()
        .unwrap_err()
        .is_missing_column_metadata());
    assert!(rowmap::select_one(&entity)
        .unwrap_err()
        .is_missing_column_metadata());
    assert!(rowmap::insert(&entity)
        .unwrap_err()
        .is_missing_column_metadata());
    assert!(rowmap::update(&entity)
        .unwrap_err()
        .is_missing_column_metadata());
    assert!(rowmap::delete(&entity)
        .unwrap_err()
        .is_missing_column_metadata());
}

#[test]
fn no_keys() {
    init_logging();
    let entity = NoKeys {
        longitude: 10,
        latitude: 20,
    };

    assert!(rowmap::select_one(&entity)
        .unwrap_err()
        .is_missing_key_metadata());
    assert!(rowmap::update(&entity)
        .unwrap_err()
        .is_missing_key_metadata());
    assert!(rowmap::delete(&entity)
        .unwrap_err()
        .is_missing_key_metadata());

    // Statements that do not address a single row still work
    assert_eq!(
        rowmap::select_all::<NoKeys>().unwrap(),
        "SELECT longitude, latitude FROM tests::models::NoKeys;"
    );
    assert_eq!(
        rowmap::insert(&entity).unwrap(),
        "INSERT INTO tests::models::NoKeys (longitude, latitude) VALUES (10, 20);"
    );
}

#[test]
fn keys_not_columns() {
    init_logging();
    let entity = KeysNotColumns {
        longitude: 10,
        latitude: 20,
    };

    let err = rowmap::select_one(&entity).unwrap_err();
    assert!(err.is_key_without_column());
    assert_eq!(
        err.to_string(),
        "key without column: tests::models::KeysNotColumns.longitude"
    );

    assert!(rowmap::update(&entity)
        .unwrap_err()
        .is_key_without_column());
    assert!(rowmap::delete(&entity)
        .unwrap_err()
        .is_key_without_column());
}

#[test]
fn update_needs_a_non_key_column() {
    init_logging();
    let membership = Membership { user: 1, group: 2 };

    let err = rowmap::update(&membership).unwrap_err();
    assert!(err.is_empty_assignments());
    assert_eq!(
        err.to_string(),
        "nothing to update: tests::models::Membership"
    );

    assert_eq!(
        rowmap::delete(&membership).unwrap(),
        "DELETE FROM memberships WHERE user_id = 1 AND group_id = 2;"
    );
}
