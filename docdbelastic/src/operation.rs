/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Operation descriptors for the DocumentDB Elastic Clusters API.

use crate::model::*;
use http::Method;
use nimbus_endpoint::SharedEndpointResolver;
use nimbus_http::operation::Operation;
use nimbus_middleware::DefaultResponseClassifier;
use nimbus_operation::{
    build_operation, BuildError, Config, JsonResponseHandler, OperationDescriptor, PathSegment,
    Protocol, QueryParam, RequiredField, SigningKind,
};

type OperationResult<O> =
    Result<Operation<JsonResponseHandler<O>, DefaultResponseClassifier>, BuildError>;

macro_rules! descriptor {
    ($name:literal, $method:expr, path: $path:expr, query: $query:expr, required: $required:expr) => {
        OperationDescriptor {
            name: $name,
            service: "docdbelastic",
            signing_name: "docdb-elastic",
            api_version: "2022-11-28",
            method: $method,
            protocol: Protocol::RestJson,
            path: $path,
            query: $query,
            required: $required,
            signing: SigningKind::SigV4,
        }
    };
}

static CREATE_CLUSTER: OperationDescriptor<CreateClusterInput> = descriptor!(
    "CreateCluster",
    Method::POST,
    path: &[PathSegment::Literal("cluster")],
    query: &[],
    required: &[
        RequiredField { name: "ClusterName", is_set: |input| input.cluster_name.is_some() },
        RequiredField { name: "AdminUserName", is_set: |input| input.admin_user_name.is_some() },
        RequiredField { name: "AdminUserPassword", is_set: |input| input.admin_user_password.is_some() },
        RequiredField { name: "AuthType", is_set: |input| input.auth_type.is_some() },
        RequiredField { name: "ShardCapacity", is_set: |input| input.shard_capacity.is_some() },
        RequiredField { name: "ShardCount", is_set: |input| input.shard_count.is_some() },
    ]
);

static GET_CLUSTER: OperationDescriptor<GetClusterInput> = descriptor!(
    "GetCluster",
    Method::GET,
    path: &[
        PathSegment::Literal("cluster"),
        PathSegment::Label { name: "ClusterArn", get: |input| input.cluster_arn.as_deref() },
    ],
    query: &[],
    required: &[RequiredField { name: "ClusterArn", is_set: |input| input.cluster_arn.is_some() }]
);

static DELETE_CLUSTER: OperationDescriptor<DeleteClusterInput> = descriptor!(
    "DeleteCluster",
    Method::DELETE,
    path: &[
        PathSegment::Literal("cluster"),
        PathSegment::Label { name: "ClusterArn", get: |input| input.cluster_arn.as_deref() },
    ],
    query: &[],
    required: &[RequiredField { name: "ClusterArn", is_set: |input| input.cluster_arn.is_some() }]
);

static LIST_CLUSTERS: OperationDescriptor<ListClustersInput> = descriptor!(
    "ListClusters",
    Method::GET,
    path: &[PathSegment::Literal("clusters")],
    query: &[
        QueryParam { name: "nextToken", get: |input| input.next_token.clone() },
        QueryParam { name: "maxResults", get: |input| input.max_results.map(|n| n.to_string()) },
    ],
    required: &[]
);

pub(crate) fn create_cluster(
    input: &CreateClusterInput,
    conf: &Config,
    resolver: &SharedEndpointResolver,
) -> OperationResult<CreateClusterOutput> {
    build_operation(input, &CREATE_CLUSTER, conf, resolver, JsonResponseHandler::new())
}

pub(crate) fn get_cluster(
    input: &GetClusterInput,
    conf: &Config,
    resolver: &SharedEndpointResolver,
) -> OperationResult<GetClusterOutput> {
    build_operation(input, &GET_CLUSTER, conf, resolver, JsonResponseHandler::new())
}

pub(crate) fn delete_cluster(
    input: &DeleteClusterInput,
    conf: &Config,
    resolver: &SharedEndpointResolver,
) -> OperationResult<DeleteClusterOutput> {
    build_operation(input, &DELETE_CLUSTER, conf, resolver, JsonResponseHandler::new())
}

pub(crate) fn list_clusters(
    input: &ListClustersInput,
    conf: &Config,
    resolver: &SharedEndpointResolver,
) -> OperationResult<ListClustersOutput> {
    build_operation(input, &LIST_CLUSTERS, conf, resolver, JsonResponseHandler::new())
}
