use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

use crate::constants::DependencyFlags;
use crate::version::{Evr, PackageVersion, compare_labels};

/// A versioned relationship to another package, e.g. `foo >= 1:2.0-3`.
///
/// This only answers whether a single version meets the constraint, it does not resolve
/// anything.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dependency<'a> {
    name: Cow<'a, str>,
    flags: DependencyFlags,
    evr: Evr<'a>,
}

impl<'a> Dependency<'a> {
    /// Create a dependency on a version lower than `evr`
    pub fn less<N, E>(name: N, evr: E) -> Self
    where
        N: Into<Cow<'a, str>>,
        E: Into<Evr<'a>>,
    {
        Self::new(name, DependencyFlags::LESS, evr)
    }

    /// Create a dependency on a version lower than or equal to `evr`
    pub fn less_eq<N, E>(name: N, evr: E) -> Self
    where
        N: Into<Cow<'a, str>>,
        E: Into<Evr<'a>>,
    {
        Self::new(name, DependencyFlags::LE, evr)
    }

    /// Create a dependency on exactly `evr`
    pub fn eq<N, E>(name: N, evr: E) -> Self
    where
        N: Into<Cow<'a, str>>,
        E: Into<Evr<'a>>,
    {
        Self::new(name, DependencyFlags::EQUAL, evr)
    }

    /// Create a dependency on a version greater than `evr`
    pub fn greater<N, E>(name: N, evr: E) -> Self
    where
        N: Into<Cow<'a, str>>,
        E: Into<Evr<'a>>,
    {
        Self::new(name, DependencyFlags::GREATER, evr)
    }

    /// Create a dependency on a version greater than or equal to `evr`
    pub fn greater_eq<N, E>(name: N, evr: E) -> Self
    where
        N: Into<Cow<'a, str>>,
        E: Into<Evr<'a>>,
    {
        Self::new(name, DependencyFlags::GE, evr)
    }

    /// Create an unversioned dependency, any version will do
    pub fn any<N>(name: N) -> Self
    where
        N: Into<Cow<'a, str>>,
    {
        Self::new(name, DependencyFlags::ANY, Evr::default())
    }

    pub fn new<N, E>(name: N, flags: DependencyFlags, evr: E) -> Self
    where
        N: Into<Cow<'a, str>>,
        E: Into<Evr<'a>>,
    {
        Dependency {
            name: name.into(),
            flags,
            evr: evr.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn flags(&self) -> DependencyFlags {
        self.flags
    }

    pub fn evr(&self) -> &Evr<'a> {
        &self.evr
    }

    /// Whether `candidate` meets the version constraint.
    ///
    /// Releases are only compared if both sides have one, so `foo >= 1.0` is met by `1.0-5`
    /// and `foo = 1.0-5` is met by `1.0`.
    pub fn is_satisfied_by<P: PackageVersion + ?Sized>(&self, candidate: &P) -> bool {
        let sense = self.flags.sense();
        if sense.is_empty() {
            return true;
        }

        let (epoch, version, release) = candidate.label();
        let (wanted_epoch, wanted_version, wanted_release) = self.evr.label();
        let ordering = if release.is_empty() || wanted_release.is_empty() {
            compare_labels((epoch, version, ""), (wanted_epoch, wanted_version, ""))
        } else {
            compare_labels(candidate.label(), self.evr.label())
        };

        let satisfied = match ordering {
            Ordering::Less => sense.contains(DependencyFlags::LESS),
            Ordering::Equal => sense.contains(DependencyFlags::EQUAL),
            Ordering::Greater => sense.contains(DependencyFlags::GREATER),
        };
        log::trace!(
            "{:?} {:?} {} => {}",
            candidate.label(),
            ordering,
            self,
            satisfied
        );
        satisfied
    }
}

impl PackageVersion for Dependency<'_> {
    fn epoch(&self) -> Option<&str> {
        PackageVersion::epoch(&self.evr)
    }

    fn version(&self) -> &str {
        self.evr.version()
    }

    fn release(&self) -> &str {
        self.evr.release()
    }
}

impl fmt::Display for Dependency<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.flags.sense().is_empty() {
            return f.write_str(&self.name);
        }
        write!(f, "{} {} {}", self.name, self.flags, self.evr)
    }
}
