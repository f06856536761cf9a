mod api;
mod service;

pub use self::api::{DynRepairApi, RepairApiTrait};
pub use self::service::{
    DynRepairCommandService, DynRepairQueryService, RepairCommandServiceTrait,
    RepairQueryServiceTrait,
};
