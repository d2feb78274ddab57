//! sea-orm entities for the definitions service.

pub mod categories;
pub mod definitions;
pub mod status_definitions;
pub mod users;
