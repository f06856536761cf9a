mod product;

pub use self::product::{Category, Product};
