pub mod analytics;
pub mod bar;
pub mod catalog;
pub mod chart;
pub mod dashboard;
pub mod holding;
pub mod instrument;
pub mod market;
pub mod settings;
