// src/packages/mod.rs

//! Package identities and the RPM database query boundary

pub mod identity;
pub mod rpm_query;

pub use identity::{PackageIdentity, build_specifier};
pub use rpm_query::{QueryLines, QueryRunner, RpmCommand};
