pub mod aggregate;
pub mod config;
pub mod error;
pub mod invocation;
pub mod locate;

pub use aggregate::{AggregateReport, aggregate, combine_files, output_file_name, output_path};
pub use config::{Config, RULES_PATH_ENV};
pub use error::{AppError, Result};
pub use invocation::{InvocationArgs, RULE_EXTENSION, Selection};
pub use locate::{RuleFile, RuleSet, list_rule_files, locate_rules};
