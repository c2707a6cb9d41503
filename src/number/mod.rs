//! Number formatting and numeric helpers.

mod format;
mod tag;
mod utils;
mod value;

pub use format::{format_number, format_number_condensed};
pub use tag::FormatTag;
pub use utils::{
    aggregate_moes, determine_dataset_decimal_precision,
    determine_dataset_decimal_precision_with_rng, gcd, round_to_precision, significant_decimals,
    sum,
};
pub use value::{RawValue, number_to_string};
