mod create;
mod set_event;
mod update;

use super::*;

use entity::choice::{EpiSource, RequestChoice, Visibility};

use crate::model::field_report::{ImpactFigures, RequestField};
