//! # rpmvercmp
//!
//! A library for ordering RPM package versions the way `rpm` itself does.
//!
//! Version and release strings are compared with [`compare_versions`], complete
//! `(epoch, version, release)` labels with [`compare_labels`]. Both are total: any pair of
//! strings has an answer, nothing ever fails.
//!
//! # Example
//!
//! ```rust
//! use std::cmp::Ordering;
//!
//! use rpmvercmp::{Dependency, Evr, compare_labels, compare_versions};
//!
//! assert_eq!(compare_versions("1.0~rc1", "1.0"), Ordering::Less);
//! assert_eq!(compare_versions("1.0^git1", "1.0"), Ordering::Greater);
//! assert_eq!(compare_versions("0.0.01.0", "0.0.1.0"), Ordering::Equal);
//!
//! // the epoch always wins
//! assert_eq!(
//!     compare_labels((Some("1"), "0.1", ""), (None, "99.9", "")),
//!     Ordering::Greater
//! );
//!
//! let installed = Evr::parse("2:4.16.1.3-29.el9");
//! assert!(installed > Evr::parse("4.18.0-1.fc38"));
//! assert!(Dependency::greater_eq("rpm", Evr::parse("2:4.16")).is_satisfied_by(&installed));
//! ```

#![allow(unknown_lints, clippy::uninlined_format_args)]

mod errors;
pub use crate::errors::*;

pub(crate) mod constants;
pub use crate::constants::*;

mod segment;
pub use crate::segment::{Segment, Segments, tokenize};

mod vercmp;
pub use crate::vercmp::{compare_versions, rpmvercmp};

mod version;
pub use crate::version::*;

mod dependency;
pub use crate::dependency::*;
