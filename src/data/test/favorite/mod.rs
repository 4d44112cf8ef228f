use crate::{data::favorite::FavoriteRepository, model::favorite::AddFavoriteParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod add;
mod is_favorite;
mod list_for_user;
mod remove;
