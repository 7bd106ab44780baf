pub mod redis_visit_repository;

pub use redis_visit_repository::RedisVisitRepository;
