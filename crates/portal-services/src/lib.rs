//! Business services for the HR portal backend.
//!
//! Thin validation-and-delegation wrappers over the storage ports:
//! - [`IdentifierResolver`]: email-or-id to canonical user id
//! - [`EnrollmentCoordinator`]: the only writer of the enrollment ledger
//! - CRUD services for users, courses, and job collections
//!
//! Services hold no state of their own; correctness under concurrent
//! callers relies on the storage layer's constraints, not in-process locks.

pub mod collections;
pub mod courses;
pub mod enrollment;
pub mod identifier;
pub mod ports;
pub mod users;

pub use collections::CollectionService;
pub use courses::CourseService;
pub use enrollment::EnrollmentCoordinator;
pub use identifier::IdentifierResolver;
pub use ports::{CollectionStore, CourseStore, EnrollmentStore, ResumeStore, UserStore};
pub use users::UserService;
