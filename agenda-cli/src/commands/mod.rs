pub mod events;
pub mod month;
pub mod toggle;
pub mod year;
