pub mod abstract_trait;
pub mod api;
pub mod domain;
pub mod model;
pub mod service;
