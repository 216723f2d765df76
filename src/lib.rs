//! Terminal companion for daily worship: prayer times with a live countdown,
//! a Quran browser, curated hadith and adhkar collections, and a Hijri
//! monthly planner.

pub mod api;
pub mod app;
pub mod config;
pub mod data;
pub mod hijri;
pub mod i18n;
pub mod input;
pub mod location;
pub mod prayer;
pub mod runtime;
pub mod terminal;
pub mod ui;
pub mod views;
