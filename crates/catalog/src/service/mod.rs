mod command;
mod query;

pub use self::command::CatalogCommandService;
pub use self::query::CatalogQueryService;
