pub mod db;
pub mod errors;
pub mod student;

#[cfg(test)]
mod tests;
