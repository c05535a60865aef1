use chrono::NaiveDate;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{error::AppError, model::favorite::AddFavoriteOutcome};

mod catalog;
