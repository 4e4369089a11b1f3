mod authorization_status;
mod data_transfer_status;
mod error_code;
mod id_tag_info;
mod location;
mod measurand;
mod meter_value;
mod phase;
mod reading_context;
mod registration_status;
mod sampled_value;
mod status_info;
mod transaction_event_status;
mod unit_of_measure;
mod value_format;

pub use authorization_status::AuthorizationStatus;
pub use data_transfer_status::DataTransferStatus;
pub use error_code::ErrorCode;
pub use id_tag_info::IdTagInfo;
pub use location::Location;
pub use measurand::Measurand;
pub use meter_value::MeterValue;
pub use phase::Phase;
pub use reading_context::ReadingContext;
pub use registration_status::RegistrationStatus;
pub use sampled_value::SampledValue;
pub use status_info::StatusInfo;
pub use transaction_event_status::TransactionEventStatus;
pub use unit_of_measure::UnitOfMeasure;
pub use value_format::ValueFormat;
