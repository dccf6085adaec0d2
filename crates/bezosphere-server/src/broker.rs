//! Production `CredentialBroker` backed by a tonic client against the external
//! credential-issuing authority ("spanx" in the source).

use bezosphere_core::broker::{BrokerError, CredentialBroker};
use bezosphere_core::model::{CloudCredentials, User};
use tonic::transport::{Channel, ClientTlsConfig, Endpoint};

use crate::proto::broker::credential_broker_client::CredentialBrokerClient;
use crate::proto::broker::GetCredentialsRequest;

#[derive(Debug, Clone)]
pub struct SpanxCredentialBroker {
    client: CredentialBrokerClient<Channel>,
}

impl SpanxCredentialBroker {
    /// Connects against the credential-issuing authority using system root certificates to
    /// verify the peer, mirroring the production path's `grpc.WithTransportCredentials`.
    pub async fn connect(address: String) -> Result<Self, tonic::transport::Error> {
        let tls_config = ClientTlsConfig::new().with_native_roots();

        let channel = Endpoint::from_shared(address)?
            .tls_config(tls_config)?
            .connect()
            .await?;

        Ok(Self { client: CredentialBrokerClient::new(channel) })
    }
}

impl CredentialBroker for SpanxCredentialBroker {
    async fn get_credentials(&self, user: &User) -> Result<CloudCredentials, BrokerError> {
        let request = tonic::Request::new(GetCredentialsRequest {
            customer_id: user.customer_id.clone(),
            user_id: user.id.clone(),
        });

        let response = self
            .client
            .clone()
            .get_credentials(request)
            .await
            .map_err(|status| BrokerError::InvalidCredentials { reason: status.message().to_string() })?
            .into_inner();

        Ok(CloudCredentials {
            access_key_id: response.access_key_id,
            secret_access_key: response.secret_access_key,
            session_token: response.session_token,
        })
    }
}
