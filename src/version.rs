use std::borrow::Cow;
use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use itertools::Itertools;

use crate::errors::{Error, Result};
use crate::vercmp::{compare_numeric, compare_versions};

/// An `(epoch, version, release)` triple as handed to [`compare_labels`].
///
/// A missing epoch is `None`, which compares the same as `Some("0")`.
pub type Label<'a> = (Option<&'a str>, &'a str, &'a str);

/// Compare two complete version identifiers.
///
/// The epoch takes absolute precedence, then the version, then the release, the latter two
/// compared with [`compare_versions`]. An epoch that is missing, empty or not a non-negative
/// integer counts as `0`, so this never fails.
pub fn compare_labels(label1: Label<'_>, label2: Label<'_>) -> Ordering {
    let (epoch1, version1, release1) = label1;
    let (epoch2, version2, release2) = label2;

    compare_numeric(epoch_digits(epoch1), epoch_digits(epoch2))
        .then_with(|| compare_versions(version1, version2))
        .then_with(|| compare_versions(release1, release2))
}

fn epoch_digits(epoch: Option<&str>) -> &str {
    match epoch {
        None | Some("") => "0",
        Some(epoch) if epoch.bytes().all(|b| b.is_ascii_digit()) => epoch,
        Some(epoch) => {
            log::debug!("Treating non-numeric epoch {:?} as 0", epoch);
            "0"
        }
    }
}

/// Anything that carries an epoch, version and release and can be ordered by them.
pub trait PackageVersion {
    /// The epoch, `None` if the package doesn't have one
    fn epoch(&self) -> Option<&str>;

    fn version(&self) -> &str;

    fn release(&self) -> &str;

    /// The `(epoch, version, release)` triple the package is ordered by
    fn label(&self) -> Label<'_> {
        (self.epoch(), self.version(), self.release())
    }
}

impl PackageVersion for Label<'_> {
    fn epoch(&self) -> Option<&str> {
        self.0
    }

    fn version(&self) -> &str {
        self.1
    }

    fn release(&self) -> &str {
        self.2
    }
}

/// Compare two optional packages. No package at all is older than any package.
pub fn compare_packages<A, B>(package1: Option<&A>, package2: Option<&B>) -> Ordering
where
    A: PackageVersion + ?Sized,
    B: PackageVersion + ?Sized,
{
    match (package1, package2) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => compare_labels(a.label(), b.label()),
    }
}

/// The package with the highest version, the first one seen if several compare equal
pub fn latest<'a, P, I>(packages: I) -> Option<&'a P>
where
    P: PackageVersion + ?Sized + 'a,
    I: IntoIterator<Item = &'a P>,
{
    packages.into_iter().reduce(|latest, package| {
        match compare_labels(package.label(), latest.label()) {
            Ordering::Greater => package,
            _ => latest,
        }
    })
}

/// Sort packages from oldest to newest. Packages that compare equal keep their order.
pub fn sort_by_version<'a, P, I>(packages: I) -> Vec<&'a P>
where
    P: PackageVersion + ?Sized + 'a,
    I: IntoIterator<Item = &'a P>,
{
    packages
        .into_iter()
        .sorted_by(|a, b| compare_labels(a.label(), b.label()))
        .collect()
}

/// A full RPM "version" specifier has 3 different components - Epoch, Version, and Release.
///
/// Epoch overrides all other fields and is generally only used as a last resort - in cases where
/// a change to the versioning scheme or packaging error creates a situation where newer packages
/// might otherwise sort as being older.
///
/// Version is the normal version string used by the upstream project. This shouldn't be tweaked
/// by the packager.
///
/// Release indicates firstly the number of times this package has been released - for instance,
/// with custom patches and backports not present in the upstream, but may also indicate other
/// details such as the OS it was built for (fc38, el9) or portions of a git commit hash.
///
/// Tilde (~) and caret (^) are special values used in particular situations. Including ~ in
/// a version is used for denoting pre-releases and will force it to sort as less than a version
/// without a tilde, e.g. 0.5.0 vs 0.5.0~rc1. Including ^ in a version is used for denoting snapshots
/// not directly associated with an upstream release and will force it to sort higher, e.g.
/// 0.5.0 vs 0.5.0^deadbeef
///
/// Equality follows the ordering, so `1.0-1` and `0:1.00-1` are equal.
#[derive(Clone, Debug, Default)]
pub struct Evr<'a> {
    epoch: Cow<'a, str>,
    version: Cow<'a, str>,
    release: Cow<'a, str>,
}

impl<'a> Evr<'a> {
    /// Create a new EVR
    pub fn new<T: Into<Cow<'a, str>>>(epoch: T, version: T, release: T) -> Evr<'a> {
        Evr {
            epoch: epoch.into(),
            version: version.into(),
            release: release.into(),
        }
    }

    /// Create an EVR parsed from a string
    pub fn parse(evr: &'a str) -> Self {
        Evr::parse_values(evr).into()
    }

    /// The epoch value, empty if none was given
    pub fn epoch(&self) -> &str {
        &self.epoch
    }

    /// The epoch as a number. No epoch at all is `0`.
    pub fn epoch_number(&self) -> Result<u64> {
        if self.epoch.is_empty() {
            return Ok(0);
        }
        if !self.epoch.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidEpoch(self.epoch.to_string()));
        }
        self.epoch
            .parse()
            .map_err(|_| Error::InvalidEpoch(self.epoch.to_string()))
    }

    /// The version value
    pub fn version(&self) -> &str {
        &self.version
    }

    /// The release value
    pub fn release(&self) -> &str {
        &self.release
    }

    /// Write an EVR string in a normalized form which always includes an epoch
    ///
    /// The standard string representation of an EVR will ignore the epoch if not set.  A package
    /// having no epoch value is equivalent to having an epoch of zero. Sometimes it is useful to
    /// write EVRs in a form such that equivalent values are represented identically, therefore,
    /// this "normalized" form will always include it.
    pub fn as_normalized_form(&self) -> String {
        let epoch = if self.epoch.is_empty() {
            "0"
        } else {
            self.epoch.as_ref()
        };

        if self.release.is_empty() {
            format!("{}:{}", epoch, self.version())
        } else {
            format!("{}:{}-{}", epoch, self.version(), self.release())
        }
    }

    /// Return the epoch, version and release values as a 3-element tuple
    pub fn values(&self) -> (&str, &str, &str) {
        (self.epoch(), self.version(), self.release())
    }

    /// Parse the epoch, version and release values and return them as a 3-element tuple
    pub fn parse_values(evr: &'a str) -> (&'a str, &'a str, &'a str) {
        let (epoch, vr) = evr.split_once(':').unwrap_or(("", evr));
        let (version, release) = vr.split_once('-').unwrap_or((vr, ""));

        (epoch, version, release)
    }

    /// Detach the EVR from the string it was parsed from
    pub fn into_owned(self) -> Evr<'static> {
        Evr {
            epoch: Cow::Owned(self.epoch.into_owned()),
            version: Cow::Owned(self.version.into_owned()),
            release: Cow::Owned(self.release.into_owned()),
        }
    }
}

impl<'a> From<(&'a str, &'a str, &'a str)> for Evr<'a> {
    fn from(val: (&'a str, &'a str, &'a str)) -> Self {
        Evr::new(val.0, val.1, val.2)
    }
}

impl FromStr for Evr<'static> {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Evr::parse(s).into_owned())
    }
}

impl PackageVersion for Evr<'_> {
    fn epoch(&self) -> Option<&str> {
        (!self.epoch.is_empty()).then_some(self.epoch.as_ref())
    }

    fn version(&self) -> &str {
        &self.version
    }

    fn release(&self) -> &str {
        &self.release
    }
}

impl PartialEq for Evr<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Evr<'_> {}

impl fmt::Display for Evr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.epoch.is_empty() {
            write!(f, "{}:", self.epoch)?;
        }

        write!(f, "{}", self.version)?;
        if !self.release.is_empty() {
            write!(f, "-{}", self.release)?;
        }
        Ok(())
    }
}

impl PartialOrd for Evr<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Evr<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_labels(self.label(), other.label())
    }
}

/// Compare two strings as RPM EVR values
pub fn rpm_evr_compare(evr1: &str, evr2: &str) -> Ordering {
    let evr1 = Evr::parse(evr1);
    let evr2 = Evr::parse(evr2);
    evr1.cmp(&evr2)
}
