use crate::server::data::amenity::AmenityRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory::amenity::AmenityFactory};

mod find_by_id;
mod get_all;
