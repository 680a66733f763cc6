use std::collections::BTreeSet;

use crate::{
    model::field_report::{FieldReportPayload, LooseId},
    server::{
        model::ingest::{LocationSets, MetaCollections, ReportFields},
        service::ingest::{normalize::NormalizedChoices, resolve::ResolvedRelations},
    },
};

/// A submission split into what is written to the report row and what is written around it.
#[derive(Debug, Clone, PartialEq)]
pub struct Partitioned {
    pub fields: ReportFields,
    pub locations: LocationSets,
    pub meta: MetaCollections,
}

/// Splits a normalized and resolved submission into its three disjoint parts.
///
/// Location sets and nested collections are only kept when present and non-empty.
pub fn partition(
    payload: FieldReportPayload,
    choices: NormalizedChoices,
    relations: &ResolvedRelations,
) -> Partitioned {
    let locations = LocationSets {
        countries: id_set(payload.countries),
        regions: id_set(payload.regions),
        districts: id_set(payload.districts),
    };

    let meta = MetaCollections {
        actions_taken: non_empty(payload.actions_taken),
        contacts: non_empty(payload.contacts),
        sources: non_empty(payload.sources),
    };

    let fields = ReportFields {
        summary: payload.summary,
        description: payload.description,
        start_date: payload.start_date.map(|date| date.0),
        actions_others: payload.actions_others,
        user_id: relations.user.as_ref().map(|user| user.id),
        dtype_id: relations.dtype.as_ref().map(|dtype| dtype.id),
        event_id: relations.event.as_ref().map(|event| event.id),
        visibility: choices.visibility,
        epi_figures_source: choices.epi_figures_source,
        requests: choices.requests,
        figures: payload.figures,
    };

    Partitioned {
        fields,
        locations,
        meta,
    }
}

fn id_set(ids: Option<Vec<LooseId>>) -> Option<BTreeSet<i32>> {
    ids.filter(|ids| !ids.is_empty())
        .map(|ids| ids.into_iter().map(|LooseId(id)| id).collect())
}

fn non_empty<T>(entries: Option<Vec<T>>) -> Option<Vec<T>> {
    entries.filter(|entries| !entries.is_empty())
}
