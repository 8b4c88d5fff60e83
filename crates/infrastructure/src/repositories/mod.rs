pub mod cell_repository;

pub use cell_repository::SqliteCellRepository;
