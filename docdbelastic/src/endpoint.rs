/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use nimbus_endpoint::partition::{Metadata, Protocol};
use nimbus_endpoint::CredentialScope;

/// The endpoint rule used when the configuration carries no override.
pub fn default_resolver() -> Metadata {
    Metadata {
        uri_template: "docdb-elastic.{region}.amazonaws.com",
        protocol: Protocol::Https,
        credential_scope: CredentialScope::default(),
    }
}
