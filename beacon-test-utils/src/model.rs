//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main beacon crate to keep fixture signatures short.

pub type RegionModel = entity::region::Model;
pub type CountryModel = entity::country::Model;
pub type DistrictModel = entity::district::Model;
pub type DisasterTypeModel = entity::disaster_type::Model;
pub type UserModel = entity::beacon_user::Model;
pub type EventModel = entity::event::Model;
pub type ActionModel = entity::action::Model;
pub type SourceTypeModel = entity::source_type::Model;
