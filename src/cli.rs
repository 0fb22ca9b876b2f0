mod octocrab_utils;
mod parser;
mod tracing;

pub(crate) use octocrab_utils::build_octocrab;
pub(crate) use parser::{Cli, Source};
pub(crate) use self::tracing::init as init_tracing;
