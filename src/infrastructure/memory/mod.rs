//! In-memory storage backends.

mod in_memory_link_repository;

pub use in_memory_link_repository::InMemoryLinkRepository;
