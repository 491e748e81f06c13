pub mod health;
pub mod meal;
pub mod profile;
pub mod recipe;
pub mod sample_data;
pub mod server;

#[cfg(test)]
pub mod test;
