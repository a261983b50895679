//! SeaORM adapters. Functions here return raw `DbErr`.

pub mod participants_sea;
pub mod state_sea;
pub mod votes_sea;
