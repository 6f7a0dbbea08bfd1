pub mod chat;
pub mod commands;
pub mod log;
pub mod ux;

#[cfg(test)]
mod test_utils;
