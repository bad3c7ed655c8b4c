mod error;
mod generator;
pub mod keywords;
pub mod template;


pub use error::GenError;
pub use generator::{GenerationSummary, RuleGenerator};
pub use template::RuleTemplate;

// file names used when none are given on the command line
pub const DEFAULT_INPUT: &str = "keywords.txt";
pub const DEFAULT_OUTPUT: &str = "GeneratedRules.txt";
