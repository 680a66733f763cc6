pub use super::action::Entity as Action;
pub use super::actions_taken::Entity as ActionsTaken;
pub use super::actions_taken_action::Entity as ActionsTakenAction;
pub use super::beacon_user::Entity as BeaconUser;
pub use super::country::Entity as Country;
pub use super::disaster_type::Entity as DisasterType;
pub use super::district::Entity as District;
pub use super::event::Entity as Event;
pub use super::event_country::Entity as EventCountry;
pub use super::event_district::Entity as EventDistrict;
pub use super::event_region::Entity as EventRegion;
pub use super::field_report::Entity as FieldReport;
pub use super::field_report_contact::Entity as FieldReportContact;
pub use super::field_report_country::Entity as FieldReportCountry;
pub use super::field_report_district::Entity as FieldReportDistrict;
pub use super::field_report_region::Entity as FieldReportRegion;
pub use super::region::Entity as Region;
pub use super::source::Entity as Source;
pub use super::source_type::Entity as SourceType;
