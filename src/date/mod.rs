//! Date math, time codes and increment inference for time-series charts.

mod code;
mod increment;
mod item;
mod series;

pub use code::{date_from_time_value, pretty_time_label_from_code};
pub use increment::TimeIncrement;
pub use item::{
    add_increment_to_date, are_dates_consecutive, are_dates_equal, calendar_date, epoch_millis,
    from_epoch_millis, midpoint_of_date_range, month_name, month_name_from_date,
    pretty_time_label, relevant_date_component,
};
pub use series::{compute_time_increment, infer_time_increment, sort_dates, unique_dates};
