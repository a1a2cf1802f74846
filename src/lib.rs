pub mod core;
pub mod error;
pub mod flags;
pub mod highlight;
pub mod process;
pub mod shell;

#[cfg(test)]
pub(crate) mod test_support;
