//! Weather lookup backend: proxies Open-Meteo geocoding and forecasts and keeps
//! a Postgres log of which cities were searched.

pub mod app;
pub mod config;
pub mod db;
pub mod error;
pub mod history;
pub mod routes;
pub mod state;
pub mod weather;
