pub mod conflict;
pub mod health;
pub mod routine_analysis;
pub mod server;

#[cfg(test)]
pub mod test_support;
