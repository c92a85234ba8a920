//! CLI command implementations.

mod set;
mod show;
mod unset;

pub(crate) use set::SetArgs;
pub(crate) use show::ShowArgs;
pub(crate) use unset::UnsetArgs;
