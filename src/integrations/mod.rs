pub mod routing;
pub mod sms;
