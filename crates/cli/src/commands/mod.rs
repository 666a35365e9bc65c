//! Command handlers, one module per subcommand family.

pub mod get;
pub mod lookup;
pub mod section;
pub mod sections;
