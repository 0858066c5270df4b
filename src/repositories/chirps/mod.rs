pub mod chirp_repository;

pub use chirp_repository::ChirpRepository;
