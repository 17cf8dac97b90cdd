//! Persistence adapters for the vaccine store port.

mod in_memory_vaccine_repository;

pub use in_memory_vaccine_repository::InMemoryVaccineRepository;
