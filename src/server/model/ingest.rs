//! Intermediate shapes a submission is split into before anything is written.

use std::collections::BTreeSet;

use chrono::NaiveDateTime;
use entity::choice::{EpiSource, RequestChoice, Visibility};

use crate::model::field_report::{
    ActionsTakenPayload, ContactPayload, ImpactFigures, RequestField, SourcePayload,
};

/// Scalar and resolved foreign key fields destined for the field report row.
///
/// `None` means "leave unchanged" on update. `visibility` and `epi_figures_source` are always
/// written since their normalizers supply a value for absent input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportFields {
    pub summary: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<NaiveDateTime>,
    pub actions_others: Option<String>,
    pub user_id: Option<i32>,
    pub dtype_id: Option<i32>,
    pub event_id: Option<i32>,
    pub visibility: Visibility,
    pub epi_figures_source: Option<EpiSource>,
    pub requests: Vec<(RequestField, RequestChoice)>,
    pub figures: ImpactFigures,
}

/// Location ids assigned to a report; a set is `None` when it was absent or empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationSets {
    pub countries: Option<BTreeSet<i32>>,
    pub regions: Option<BTreeSet<i32>>,
    pub districts: Option<BTreeSet<i32>>,
}

impl LocationSets {
    pub fn is_empty(&self) -> bool {
        self.countries.is_none() && self.regions.is_none() && self.districts.is_none()
    }
}

/// Nested collections owned by a report; a collection is `None` when it was absent or empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetaCollections {
    pub actions_taken: Option<Vec<ActionsTakenPayload>>,
    pub contacts: Option<Vec<ContactPayload>>,
    pub sources: Option<Vec<SourcePayload>>,
}
