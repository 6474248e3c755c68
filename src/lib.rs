pub mod common;
pub mod config;
pub mod planner;
pub mod report;
pub mod stat;
pub mod world;
pub mod worldgen;
