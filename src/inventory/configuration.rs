use crate::tools::env_args::retrieve_parsed_arg_value;
use derive_getters::Getters;

const LOW_STOCK_THRESHOLD_ARG: &str = "--low-stock-threshold";
pub const DEFAULT_LOW_STOCK_THRESHOLD: u32 = 5;

#[derive(Debug, Getters, Clone, Copy, PartialEq, Eq)]
pub struct InventoryConfiguration {
    /// Products whose stock is at or below this value need restocking.
    low_stock_threshold: u32,
}

impl InventoryConfiguration {
    pub fn new(low_stock_threshold: u32) -> Self {
        Self {
            low_stock_threshold,
        }
    }

    pub fn from_args() -> Self {
        Self::new(retrieve_parsed_arg_value(
            LOW_STOCK_THRESHOLD_ARG,
            DEFAULT_LOW_STOCK_THRESHOLD,
        ))
    }
}

impl Default for InventoryConfiguration {
    fn default() -> Self {
        Self::new(DEFAULT_LOW_STOCK_THRESHOLD)
    }
}
