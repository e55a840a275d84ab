pub mod coordinate;
pub mod daily_log;
pub mod duty_status;
pub mod status_change;
