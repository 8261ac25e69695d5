use rowmap::{
    schema::{Column, Field, Table},
    stmt::Primitive,
    Entity, Model,
};
use tests::init_logging;

struct Counter {
    name: &'static str,
    hits: u64,
}

impl Entity for Counter {
    fn schema() -> Model<Self> {
        Model::new("metrics::Counter")
            .table(Table::named("counters"))
            .field(
                Field::new("name")
                    .key()
                    .column(Column::of::<&str>(|e: &Counter| e.name.to_value())),
            )
            .field(Field::new("hits").column(Column::of::<u64>(|e: &Counter| e.hits.to_value())))
    }
}

#[test]
fn hand_written_descriptor() {
    init_logging();
    let counter = Counter {
        name: "logins",
        hits: 42,
    };

    assert_eq!(
        rowmap::update(&counter).unwrap(),
        "UPDATE counters SET hits = 42 WHERE name = 'logins';"
    );
    assert_eq!(
        rowmap::select_all::<Counter>().unwrap(),
        "SELECT name, hits FROM counters;"
    );
}
