//! PostgreSQL storage adapters.
//!
//! Implements the `portal-services` store ports over sqlx. Correctness
//! under concurrent writers relies on the schema's constraints (unique
//! email, unique `(user_id, course_id)` pair, cascading foreign keys),
//! never on in-process locking.

pub mod collections;
pub mod courses;
pub mod enrollments;
pub mod error;
pub mod pool;
pub mod resumes;
pub mod users;

pub use collections::PgCollectionStore;
pub use courses::PgCourseStore;
pub use enrollments::PgEnrollmentStore;
pub use pool::{connect, ensure_schema, ping, DbConfig};
pub use resumes::PgResumeStore;
pub use users::PgUserStore;
