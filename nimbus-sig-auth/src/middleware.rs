/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::signer::{
    OperationSigningConfig, SharedSigner, SigningContext, SigningError, SigningRequirements,
};
use nimbus_core::credentials::CredentialsError;
use nimbus_core::{CredentialsProvider, SigningRegion, SigningService};
use nimbus_http::middleware::MapRequest;
use nimbus_http::operation::Request;
use std::time::SystemTime;

/// Middleware stage that signs requests.
///
/// Prior to signing, the following must be present in the property bag:
/// - [`OperationSigningConfig`]: set by the operation builder.
/// - [`SigningRegion`] and [`SigningService`]: set by the endpoint stage
///   and the operation builder respectively.
/// - A [`CredentialsProvider`] and a [`SharedSigner`], unless signing is
///   disabled for the operation or left optional and unconfigured.
///
/// A [`SystemTime`] MAY be present to pin the signing timestamp, which
/// tests use for deterministic signatures.
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct SigningStage;

#[derive(Debug, thiserror::Error)]
pub enum SigningStageError {
    #[error("no signing configuration in the property bag")]
    MissingSigningConfig,
    #[error("no signing region in the property bag")]
    MissingSigningRegion,
    #[error("no signing service in the property bag")]
    MissingSigningService,
    #[error("signing is required but no signer was configured")]
    MissingSigner,
    #[error("signing is required but no credentials provider was configured")]
    MissingCredentialsProvider,
    #[error("failed to load credentials: {0}")]
    CredentialsLoadingFailed(#[from] CredentialsError),
    #[error("the request body could not be signed by this configuration")]
    InvalidBodyType,
    #[error("signing failed: {0}")]
    SigningFailure(#[from] SigningError),
}

impl From<SigningStageError> for nimbus_types::Error {
    fn from(err: SigningStageError) -> Self {
        nimbus_types::Error::construction(err.to_string())
    }
}

impl MapRequest for SigningStage {
    type Error = SigningStageError;

    fn apply(&self, req: Request) -> Result<Request, Self::Error> {
        req.augment(|req, config| {
            let signing_config = config
                .get::<OperationSigningConfig>()
                .ok_or(SigningStageError::MissingSigningConfig)?;
            let requirements = signing_config.signing_requirements;
            if requirements == SigningRequirements::Disabled {
                return Ok(req);
            }

            let signer = match (config.get::<SharedSigner>(), requirements) {
                (Some(signer), _) => signer.clone(),
                (None, SigningRequirements::Required) => {
                    return Err(SigningStageError::MissingSigner)
                }
                (None, _) => {
                    tracing::debug!("no request signer configured, dispatching unsigned");
                    return Ok(req);
                }
            };
            let provider = match (config.get::<CredentialsProvider>(), requirements) {
                (Some(provider), _) => provider,
                (None, SigningRequirements::Required) => {
                    return Err(SigningStageError::MissingCredentialsProvider)
                }
                (None, _) => {
                    tracing::debug!("no credentials provider configured, dispatching unsigned");
                    return Ok(req);
                }
            };
            let credentials = provider.provide_credentials()?;
            let region = config
                .get::<SigningRegion>()
                .ok_or(SigningStageError::MissingSigningRegion)?;
            let service = config
                .get::<SigningService>()
                .ok_or(SigningStageError::MissingSigningService)?;
            let context = SigningContext {
                credentials: &credentials,
                region,
                service,
                time: config
                    .get::<SystemTime>()
                    .copied()
                    .unwrap_or_else(SystemTime::now),
            };

            // Extract a signable body: only preloaded bodies can be
            // signed through this interface. Streaming operations are
            // modeled as unsigned.
            let (parts, body) = req.into_parts();
            let signable_body = body.bytes().ok_or(SigningStageError::InvalidBodyType)?;
            let mut signable_request = http::Request::from_parts(parts, signable_body);
            signer.sign(&context, &mut signable_request)?;
            let (signed_parts, _) = signable_request.into_parts();
            Ok(http::Request::from_parts(signed_parts, body))
        })
    }
}

#[cfg(test)]
mod test {
    use super::{SigningStage, SigningStageError};
    use crate::signer::{
        OperationSigningConfig, SharedSigner, SignRequest, SigningContext, SigningError,
        SigningRequirements,
    };
    use http::header::AUTHORIZATION;
    use nimbus_core::{Credentials, CredentialsProvider, SigningRegion, SigningService};
    use nimbus_http::body::SdkBody;
    use nimbus_http::middleware::MapRequest;
    use nimbus_http::operation;
    use std::sync::Arc;

    struct FakeSigner;

    impl SignRequest for FakeSigner {
        fn sign(
            &self,
            context: &SigningContext<'_>,
            request: &mut http::Request<&[u8]>,
        ) -> Result<(), SigningError> {
            let header = format!(
                "FAKE4 Credential={}/{}/{}",
                context.credentials.access_key_id(),
                context.region.as_ref(),
                context.service.as_ref(),
            );
            request
                .headers_mut()
                .insert(AUTHORIZATION, header.parse().expect("valid header"));
            Ok(())
        }
    }

    fn request() -> operation::Request {
        operation::Request::new(http::Request::new(SdkBody::from("{}")))
    }

    #[test]
    fn signs_when_fully_configured() {
        let req = request();
        {
            let mut props = req.properties();
            props.insert(OperationSigningConfig::default_config());
            props.insert::<SharedSigner>(Arc::new(FakeSigner));
            props.insert::<CredentialsProvider>(Arc::new(Credentials::from_keys("akid", "sekrit")));
            props.insert(SigningRegion::from_static("us-east-1"));
            props.insert(SigningService::from_static("kinesis"));
        }
        let req = SigningStage.apply(req).expect("signs");
        assert_eq!(
            req.http().headers().get(AUTHORIZATION).unwrap(),
            "FAKE4 Credential=akid/us-east-1/kinesis"
        );
    }

    #[test]
    fn optional_signing_skips_without_a_signer() {
        let req = request();
        req.properties().insert(OperationSigningConfig::default_config());
        let req = SigningStage.apply(req).expect("dispatches unsigned");
        assert!(req.http().headers().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn disabled_signing_never_consults_the_bag() {
        let req = request();
        req.properties().insert(OperationSigningConfig::unsigned());
        let req = SigningStage.apply(req).expect("passes through");
        assert!(req.http().headers().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn required_signing_fails_closed() {
        let req = request();
        req.properties().insert(OperationSigningConfig {
            signing_requirements: SigningRequirements::Required,
        });
        let err = SigningStage.apply(req).expect_err("no signer configured");
        assert!(matches!(err, SigningStageError::MissingSigner));
    }
}
