pub mod visit_repository;

pub use visit_repository::VisitRepository;

#[cfg(test)]
pub use visit_repository::MockVisitRepository;
