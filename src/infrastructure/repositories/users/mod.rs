mod entity;
mod orm;
mod sqlite;

pub use orm::SeaOrmUserRepository;
pub use sqlite::SqliteUserRepository;
