//! Game data model and document loading.
//! Records mirror the upstream JSON data set field for field; anything the
//! schema does not know about is carried along in each record's `extra` map.

pub mod catalog;
pub mod errors;
pub mod loader;
pub mod types;

pub use catalog::Catalog;
pub use errors::DataError;
pub use loader::{
    load_collection, load_hideout_modules_from_json, load_items_from_json,
    load_projects_from_json, load_quests_from_json, parse_collection,
};
pub use types::*;
