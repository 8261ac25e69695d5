//! Entity types shared by the integration tests.

#[derive(Debug, Clone, rowmap::Entity)]
#[table = "sites"]
pub struct Location {
    #[column]
    #[key]
    pub longitude: i64,

    #[column]
    #[key]
    pub latitude: i64,

    #[column]
    pub name: String,

    #[column("visitors")]
    pub visitors_per_year: Option<i64>,
}

impl Location {
    pub fn new(longitude: i64, latitude: i64) -> Location {
        Location::named(longitude, latitude, "Some place")
    }

    pub fn named(longitude: i64, latitude: i64, name: &str) -> Location {
        Location {
            longitude,
            latitude,
            name: name.to_string(),
            visitors_per_year: None,
        }
    }
}

/// Columns and keys, but no table mapping.
#[derive(Debug, rowmap::Entity)]
pub struct NoTable {
    #[column]
    #[key]
    pub longitude: i64,

    #[column]
    #[key]
    pub latitude: i64,
}

/// A table mapping without a single column.
#[derive(Debug, rowmap::Entity)]
#[table("sites")]
pub struct NoColumns {
    pub longitude: i64,
    pub latitude: i64,
}

/// Columns without keys, mapped to a table named after the type.
#[derive(Debug, rowmap::Entity)]
#[table]
pub struct NoKeys {
    #[column]
    pub longitude: i64,

    #[column]
    pub latitude: i64,
}

/// A key that is not a column.
#[derive(Debug, rowmap::Entity)]
#[table]
pub struct KeysNotColumns {
    #[key]
    pub longitude: i64,

    #[column]
    pub latitude: i64,
}

/// Every column is a key.
#[derive(Debug, rowmap::Entity)]
#[table = "memberships"]
pub struct Membership {
    #[key]
    #[column("user_id")]
    pub user: u32,

    #[key]
    #[column("group_id")]
    pub group: u32,
}

/// Columns interleaved with unmapped fields, and empty name overrides.
#[derive(Debug, rowmap::Entity)]
#[table = ""]
pub struct Profile {
    pub cache: Vec<u8>,

    #[column]
    pub nickname: Option<String>,

    #[key]
    #[column]
    pub id: u64,

    pub dirty: bool,

    #[column("")]
    pub active: bool,

    #[column("rating")]
    pub score: f32,
}
