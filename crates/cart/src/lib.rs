pub mod abstract_trait;
pub mod aggregator;
pub mod api;
pub mod domain;
pub mod model;
pub mod service;
