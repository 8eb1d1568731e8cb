//! Domain layer: value objects, schemas, the form aggregate and its events.

pub mod aggregates;
pub mod events;
pub mod schema;
pub mod value_objects;
