mod command;
mod query;

pub use self::command::RepairCommandService;
pub use self::query::RepairQueryService;
