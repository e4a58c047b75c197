//! Display formatting for terminal output

pub mod evm;
pub mod report;

pub use evm::format_evm_table;
pub use report::{
    double_separator, format_bar, format_index, format_percentage, separator, truncate,
    ReportStyle,
};
