mod add;
mod clear;

use std::collections::BTreeSet;

use super::*;

use crate::server::data::location::{LocationOwner, LocationRepository};
