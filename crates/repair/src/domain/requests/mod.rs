mod repair;

pub use self::repair::{CreateRepairRequest, RepairBookingForm};
