pub mod user_repo;

pub use user_repo::{MongoUserRepository, UserRepository};
