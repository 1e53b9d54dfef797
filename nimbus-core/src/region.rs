/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::borrow::Cow;
use std::env;
use std::fmt::{Display, Formatter};

/// The region to send requests to.
///
/// A region must be configured on every client unless the endpoint is
/// overridden with a literal URL whose resolver ignores it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Region(
    // regions are almost always known statically; the Cow is an escape
    // hatch for the ones that aren't
    Cow<'static, str>,
);

impl AsRef<str> for Region {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Region {
    pub fn new(region: impl Into<Cow<'static, str>>) -> Self {
        Self(region.into())
    }

    pub const fn from_static(region: &'static str) -> Self {
        Self(Cow::Borrowed(region))
    }

    /// Load a region from `AWS_REGION` / `AWS_DEFAULT_REGION`.
    pub fn from_env() -> Option<Self> {
        env::var("AWS_REGION")
            .or_else(|_| env::var("AWS_DEFAULT_REGION"))
            .ok()
            .map(Region::new)
    }
}

/// The region used when signing a request.
///
/// Generally this is the configured [`Region`]; endpoint metadata may
/// override it for cross-region endpoints.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SigningRegion(Cow<'static, str>);

impl AsRef<str> for SigningRegion {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Region> for SigningRegion {
    fn from(region: Region) -> Self {
        SigningRegion(region.0)
    }
}

impl SigningRegion {
    pub const fn from_static(region: &'static str) -> Self {
        SigningRegion(Cow::Borrowed(region))
    }
}

#[cfg(test)]
mod test {
    use super::{Region, SigningRegion};

    #[test]
    fn signing_region_from_region() {
        let region = Region::new("us-west-2");
        assert_eq!(SigningRegion::from(region).as_ref(), "us-west-2");
    }
}
