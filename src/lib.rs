pub mod account;
pub mod args;
pub mod classify;
pub mod cli;
pub mod config;
pub mod enrich;
pub mod error;
pub mod export;
pub mod import;
pub mod ir;
pub mod normalize;
pub mod pipeline;
pub mod project;
pub mod sort;
pub mod table;
mod terminal;
