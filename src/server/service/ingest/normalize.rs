//! Mapping of loosely encoded enumerated fields onto their canonical values.
//!
//! Submissions carry choice values as integer codes, numeric strings or canonical tags
//! (`"public"`, `"requested"`, ...). Integer codes are the ones stored in the database, so
//! they're decoded through [`ActiveEnum::try_from_value`]; tags go through the enums' serde
//! names. Values that match neither fall back to the field's default and never fail.

use entity::choice::{EpiSource, RequestChoice, Visibility};
use sea_orm::ActiveEnum;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::model::field_report::{ChoiceInput, FieldReportPayload, RequestField};

/// Canonical values of every enumerated field in a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedChoices {
    pub visibility: Visibility,
    pub epi_figures_source: Option<EpiSource>,
    /// Only request fields present in the submission
    pub requests: Vec<(RequestField, RequestChoice)>,
}

pub struct ChoiceNormalizer;

impl ChoiceNormalizer {
    pub fn normalize(payload: &FieldReportPayload) -> NormalizedChoices {
        let requests = RequestField::ALL
            .into_iter()
            .filter_map(|field| {
                payload
                    .requests
                    .get(field)
                    .map(|input| (field, Self::request(field, input)))
            })
            .collect();

        NormalizedChoices {
            visibility: Self::visibility(payload.visibility.as_ref()),
            epi_figures_source: Self::epi_source(payload.epi_figures_source.as_ref()),
            requests,
        }
    }

    /// `2` is internal, `3` is public, anything else is membership.
    pub fn visibility(input: Option<&ChoiceInput>) -> Visibility {
        let Some(input) = input else {
            return Visibility::default();
        };

        decode::<Visibility>(input).unwrap_or_else(|| {
            warn_unrecognized("visibility", input);
            Visibility::default()
        })
    }

    /// `1` requested, `2` planned, `3` complete, anything else no.
    pub fn request(field: RequestField, input: &ChoiceInput) -> RequestChoice {
        decode::<RequestChoice>(input).unwrap_or_else(|| {
            warn_unrecognized(field.key(), input);
            RequestChoice::default()
        })
    }

    /// `0` ministry of health, `1` WHO, `2` other; anything else, including absence, is null.
    pub fn epi_source(input: Option<&ChoiceInput>) -> Option<EpiSource> {
        let input = input?;

        let source = decode::<EpiSource>(input);
        if source.is_none() {
            warn_unrecognized("epi_figures_source", input);
        }

        source
    }
}

fn decode<T>(input: &ChoiceInput) -> Option<T>
where
    T: ActiveEnum<Value = i32> + DeserializeOwned,
{
    if let Some(code) = input.as_code() {
        return i32::try_from(code)
            .ok()
            .and_then(|code| T::try_from_value(&code).ok());
    }

    input
        .as_tag()
        .and_then(|tag| serde_json::from_value(Value::String(tag)).ok())
}

fn warn_unrecognized(field: &str, input: &ChoiceInput) {
    if !input.0.is_null() {
        tracing::warn!(
            field = %field,
            value = %input.0,
            "Unrecognized choice value, using default"
        );
    }
}
