#![warn(clippy::pedantic)]

pub mod bar;
pub mod bar_kind;
pub mod config;
pub mod config_error;
pub mod dedup;
pub mod gym;
pub mod loadout;
pub mod plate;
pub mod plate_set;
pub mod report;
pub mod row;
pub mod rules;
pub mod subsets;
pub mod weight;
