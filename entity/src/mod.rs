//! SeaORM entities for the user service database.

pub mod prelude;

pub mod users;
