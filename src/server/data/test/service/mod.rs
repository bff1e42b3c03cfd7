use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::service::ServiceRepository,
    model::catalog::UpdateCatalogItemParams,
};

mod crud;
mod slug_map;
