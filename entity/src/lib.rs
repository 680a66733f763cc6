pub mod prelude;

pub mod action;
pub mod actions_taken;
pub mod actions_taken_action;
pub mod beacon_user;
pub mod choice;
pub mod country;
pub mod disaster_type;
pub mod district;
pub mod event;
pub mod event_country;
pub mod event_district;
pub mod event_region;
pub mod field_report;
pub mod field_report_contact;
pub mod field_report_country;
pub mod field_report_district;
pub mod field_report_region;
pub mod region;
pub mod source;
pub mod source_type;
