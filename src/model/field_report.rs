//! Typed shape of a field report submission.
//!
//! Submissions arrive loosely typed: choice fields may be integers, numeric strings or
//! canonical tags, and relation ids may be integers or numeric strings. Decoding into
//! [`FieldReportPayload`] fixes the set of recognized keys up front; keys outside that set
//! are ignored. Choice values stay raw ([`ChoiceInput`]) until the normalizer maps them.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{de::Error as _, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Deserialize a field that is present in the payload, keeping an explicit `null`.
///
/// Combined with `#[serde(default)]`, an absent key becomes `None` while a present `null`
/// becomes `Some(ChoiceInput(Value::Null))`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Raw value submitted for an enumerated field.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = Object)]
pub struct ChoiceInput(pub Value);

impl ChoiceInput {
    /// Integer code carried by the value, accepting JSON integers and numeric strings.
    pub fn as_code(&self) -> Option<i64> {
        match &self.0 {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Lowercase tag carried by a non-numeric string value.
    pub fn as_tag(&self) -> Option<String> {
        match &self.0 {
            Value::String(s) if s.trim().parse::<i64>().is_err() => {
                Some(s.trim().to_ascii_lowercase())
            }
            _ => None,
        }
    }
}

impl From<Value> for ChoiceInput {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Relation id submitted either as a JSON integer or a numeric string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, ToSchema)]
#[serde(transparent)]
pub struct LooseId(pub i32);

impl<'de> Deserialize<'de> for LooseId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Int(i64),
            Text(String),
        }

        let id = match RawId::deserialize(deserializer)? {
            RawId::Int(id) => i32::try_from(id)
                .map_err(|_| D::Error::custom(format!("id {} is out of range", id)))?,
            RawId::Text(text) => text
                .trim()
                .parse::<i32>()
                .map_err(|_| D::Error::custom(format!("invalid id {:?}", text)))?,
        };

        Ok(LooseId(id))
    }
}

/// Date a disaster started, accepting `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM:SS` or RFC 3339.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = String, format = DateTime)]
pub struct StartDate(pub NaiveDateTime);

impl StartDate {
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();

        if let Ok(date) = DateTime::parse_from_rfc3339(text) {
            return Some(Self(date.naive_utc()));
        }

        for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
            if let Ok(date) = NaiveDateTime::parse_from_str(text, format) {
                return Some(Self(date));
            }
        }

        NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(Self)
    }
}

impl<'de> Deserialize<'de> for StartDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;

        StartDate::parse(&text)
            .ok_or_else(|| D::Error::custom(format!("invalid start_date {:?}", text)))
    }
}

/// Assistance types a report can request, each tracked with a request status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RequestField {
    Bulletin,
    Dref,
    Appeal,
    Rdrt,
    Fact,
    IfrcStaff,
    ImminentDref,
    ForecastBasedAction,
    EruBaseCamp,
    EruBasicHealthCare,
    EruItTelecom,
    EruLogistics,
    EruDeploymentHospital,
    EruReferralHospital,
    EruRelief,
    EruWaterSanitation15,
    EruWaterSanitation40,
    EruWaterSanitation20,
}

impl RequestField {
    pub const ALL: [RequestField; 18] = [
        Self::Bulletin,
        Self::Dref,
        Self::Appeal,
        Self::Rdrt,
        Self::Fact,
        Self::IfrcStaff,
        Self::ImminentDref,
        Self::ForecastBasedAction,
        Self::EruBaseCamp,
        Self::EruBasicHealthCare,
        Self::EruItTelecom,
        Self::EruLogistics,
        Self::EruDeploymentHospital,
        Self::EruReferralHospital,
        Self::EruRelief,
        Self::EruWaterSanitation15,
        Self::EruWaterSanitation40,
        Self::EruWaterSanitation20,
    ];

    /// Payload key of the field.
    pub fn key(self) -> &'static str {
        match self {
            Self::Bulletin => "bulletin",
            Self::Dref => "dref",
            Self::Appeal => "appeal",
            Self::Rdrt => "rdrt",
            Self::Fact => "fact",
            Self::IfrcStaff => "ifrc_staff",
            Self::ImminentDref => "imminent_dref",
            Self::ForecastBasedAction => "forecast_based_action",
            Self::EruBaseCamp => "eru_base_camp",
            Self::EruBasicHealthCare => "eru_basic_health_care",
            Self::EruItTelecom => "eru_it_telecom",
            Self::EruLogistics => "eru_logistics",
            Self::EruDeploymentHospital => "eru_deployment_hospital",
            Self::EruReferralHospital => "eru_referral_hospital",
            Self::EruRelief => "eru_relief",
            Self::EruWaterSanitation15 => "eru_water_sanitation_15",
            Self::EruWaterSanitation40 => "eru_water_sanitation_40",
            Self::EruWaterSanitation20 => "eru_water_sanitation_20",
        }
    }
}

/// Raw request statuses; `None` means the key was absent from the submission.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct RequestFlagsPayload {
    #[serde(default, deserialize_with = "present")]
    pub bulletin: Option<ChoiceInput>,
    #[serde(default, deserialize_with = "present")]
    pub dref: Option<ChoiceInput>,
    #[serde(default, deserialize_with = "present")]
    pub appeal: Option<ChoiceInput>,
    #[serde(default, deserialize_with = "present")]
    pub rdrt: Option<ChoiceInput>,
    #[serde(default, deserialize_with = "present")]
    pub fact: Option<ChoiceInput>,
    #[serde(default, deserialize_with = "present")]
    pub ifrc_staff: Option<ChoiceInput>,
    #[serde(default, deserialize_with = "present")]
    pub imminent_dref: Option<ChoiceInput>,
    #[serde(default, deserialize_with = "present")]
    pub forecast_based_action: Option<ChoiceInput>,
    #[serde(default, deserialize_with = "present")]
    pub eru_base_camp: Option<ChoiceInput>,
    #[serde(default, deserialize_with = "present")]
    pub eru_basic_health_care: Option<ChoiceInput>,
    #[serde(default, deserialize_with = "present")]
    pub eru_it_telecom: Option<ChoiceInput>,
    #[serde(default, deserialize_with = "present")]
    pub eru_logistics: Option<ChoiceInput>,
    #[serde(default, deserialize_with = "present")]
    pub eru_deployment_hospital: Option<ChoiceInput>,
    #[serde(default, deserialize_with = "present")]
    pub eru_referral_hospital: Option<ChoiceInput>,
    #[serde(default, deserialize_with = "present")]
    pub eru_relief: Option<ChoiceInput>,
    #[serde(default, deserialize_with = "present")]
    pub eru_water_sanitation_15: Option<ChoiceInput>,
    #[serde(default, deserialize_with = "present")]
    pub eru_water_sanitation_40: Option<ChoiceInput>,
    #[serde(default, deserialize_with = "present")]
    pub eru_water_sanitation_20: Option<ChoiceInput>,
}

impl RequestFlagsPayload {
    pub fn get(&self, field: RequestField) -> Option<&ChoiceInput> {
        match field {
            RequestField::Bulletin => self.bulletin.as_ref(),
            RequestField::Dref => self.dref.as_ref(),
            RequestField::Appeal => self.appeal.as_ref(),
            RequestField::Rdrt => self.rdrt.as_ref(),
            RequestField::Fact => self.fact.as_ref(),
            RequestField::IfrcStaff => self.ifrc_staff.as_ref(),
            RequestField::ImminentDref => self.imminent_dref.as_ref(),
            RequestField::ForecastBasedAction => self.forecast_based_action.as_ref(),
            RequestField::EruBaseCamp => self.eru_base_camp.as_ref(),
            RequestField::EruBasicHealthCare => self.eru_basic_health_care.as_ref(),
            RequestField::EruItTelecom => self.eru_it_telecom.as_ref(),
            RequestField::EruLogistics => self.eru_logistics.as_ref(),
            RequestField::EruDeploymentHospital => self.eru_deployment_hospital.as_ref(),
            RequestField::EruReferralHospital => self.eru_referral_hospital.as_ref(),
            RequestField::EruRelief => self.eru_relief.as_ref(),
            RequestField::EruWaterSanitation15 => self.eru_water_sanitation_15.as_ref(),
            RequestField::EruWaterSanitation40 => self.eru_water_sanitation_40.as_ref(),
            RequestField::EruWaterSanitation20 => self.eru_water_sanitation_20.as_ref(),
        }
    }
}

/// Numeric impact figures; only figures present in the submission are written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
pub struct ImpactFigures {
    pub num_injured: Option<i32>,
    pub num_dead: Option<i32>,
    pub num_missing: Option<i32>,
    pub num_affected: Option<i32>,
    pub num_displaced: Option<i32>,
    pub num_assisted: Option<i32>,
    pub num_localstaff: Option<i32>,
    pub num_volunteers: Option<i32>,
    pub num_expats_delegates: Option<i32>,
    pub gov_num_dead: Option<i32>,
    pub gov_num_affected: Option<i32>,
    pub epi_cases: Option<i32>,
    pub epi_suspected_cases: Option<i32>,
    pub epi_probable_cases: Option<i32>,
    pub epi_confirmed_cases: Option<i32>,
    pub epi_num_dead: Option<i32>,
    pub dref_amount: Option<i32>,
    pub appeal_amount: Option<i32>,
}

/// A response action taken, referencing entries of the action catalog.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema)]
pub struct ActionsTakenPayload {
    #[serde(default)]
    pub actions: Vec<LooseId>,
    pub organization: Option<String>,
    pub summary: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema)]
pub struct ContactPayload {
    #[serde(default)]
    pub ctype: String,
    #[serde(default)]
    pub name: String,
    pub title: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Citation of where the reported information came from.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema)]
pub struct SourcePayload {
    /// Free text classification, created in the source type catalog on first use
    pub stype: String,
    pub spec: Option<String>,
}

/// A field report submission.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct FieldReportPayload {
    pub summary: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<StartDate>,
    pub actions_others: Option<String>,

    /// `1` membership, `2` internal, `3` public
    #[serde(default, deserialize_with = "present")]
    pub visibility: Option<ChoiceInput>,
    /// `0` ministry of health, `1` WHO, `2` other
    #[serde(default, deserialize_with = "present")]
    pub epi_figures_source: Option<ChoiceInput>,
    #[serde(flatten)]
    pub requests: RequestFlagsPayload,
    #[serde(flatten)]
    pub figures: ImpactFigures,

    pub user: Option<LooseId>,
    pub dtype: Option<LooseId>,
    pub event: Option<LooseId>,

    pub countries: Option<Vec<LooseId>>,
    pub regions: Option<Vec<LooseId>>,
    pub districts: Option<Vec<LooseId>>,

    pub actions_taken: Option<Vec<ActionsTakenPayload>>,
    pub contacts: Option<Vec<ContactPayload>>,
    pub sources: Option<Vec<SourcePayload>>,
}

impl FieldReportPayload {
    /// Decode a JSON submission, ignoring unrecognized keys.
    pub fn decode(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }
}
