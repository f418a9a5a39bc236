/// CRUD tests for the student entity helpers
pub mod crud_tests;
