//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with extracted arguments, except in `router` tests which send
//! requests through the full axum router.

mod field_report;

use beacon_test_utils::prelude::*;
