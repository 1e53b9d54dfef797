/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use nimbus_core::SigningRegion;
use nimbus_endpoint::partition::{Metadata, Protocol};
use nimbus_endpoint::CredentialScope;

/// The endpoint rule used when the configuration carries no override.
///
/// Budgets is a global service: a single partition endpoint signed under
/// `us-east-1`.
pub fn default_resolver() -> Metadata {
    Metadata {
        uri_template: "budgets.amazonaws.com",
        protocol: Protocol::Https,
        credential_scope: CredentialScope::builder()
            .region(SigningRegion::from_static("us-east-1"))
            .build(),
    }
}
