use pretty_assertions::assert_eq;
use tests::{init_logging, models::Profile};

fn profile() -> Profile {
    Profile {
        cache: vec![1, 2, 3],
        nickname: Some("ace".to_string()),
        id: 7,
        dirty: true,
        active: false,
        score: 4.5,
    }
}

#[test]
fn unmapped_fields_are_skipped() {
    init_logging();
    assert_eq!(
        rowmap::select_all::<Profile>().unwrap(),
        "SELECT nickname, id, active, rating FROM tests::models::Profile;"
    );
}

#[test]
fn columns_follow_declaration_order_around_keys() {
    init_logging();
    assert_eq!(
        rowmap::insert(&profile()).unwrap(),
        "INSERT INTO tests::models::Profile (nickname, id, active, rating) VALUES ('ace', 7, false, 4.5);"
    );
    assert_eq!(
        rowmap::update(&profile()).unwrap(),
        "UPDATE tests::models::Profile SET nickname = 'ace', active = false, rating = 4.5 WHERE id = 7;"
    );
}

#[test]
fn null_text_is_unquoted() {
    init_logging();
    let profile = Profile {
        nickname: None,
        ..profile()
    };

    assert_eq!(
        rowmap::insert(&profile).unwrap(),
        "INSERT INTO tests::models::Profile (nickname, id, active, rating) VALUES (NULL, 7, false, 4.5);"
    );
}

#[test]
fn escaped_serializer() {
    init_logging();
    let profile = Profile {
        nickname: Some("o'neil".to_string()),
        ..profile()
    };

    assert_eq!(
        rowmap::Serializer::escaped().select_one(&profile).unwrap(),
        "SELECT nickname, id, active, rating FROM tests::models::Profile WHERE id = 7;"
    );
    assert_eq!(
        rowmap::Serializer::escaped().update(&profile).unwrap(),
        "UPDATE tests::models::Profile SET nickname = 'o''neil', active = false, rating = 4.5 WHERE id = 7;"
    );
    assert_eq!(
        rowmap::update(&profile).unwrap(),
        "UPDATE tests::models::Profile SET nickname = 'o'neil', active = false, rating = 4.5 WHERE id = 7;"
    );
}
