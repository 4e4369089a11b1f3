pub mod authorize;
pub mod boot_notification;
pub mod data_transfer;
pub mod heartbeat;
pub mod meter_values;
pub mod start_transaction;
pub mod status_notification;
pub mod stop_transaction;
