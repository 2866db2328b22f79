//! One-shot delivery client

use std::sync::Arc;
use std::time::Duration;

use mcforge_core::{wire, CommandBatch, DeliveryPayload, EndpointConfig};
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::timeout;
use tokio_rustls::rustls::client::{ServerCertVerified, ServerCertVerifier, WebPkiVerifier};
use tokio_rustls::rustls::{self, ClientConfig, OwnedTrustAnchor, RootCertStore, ServerName};
use tokio_rustls::TlsConnector;
use tracing::{debug, info};

use crate::errors::{DeliveryError, Result};

/// Default deadline applied to the connect and write phases
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Confirmation returned to the caller after a successful delivery
#[derive(Debug, Clone)]
pub struct DeliveryReceipt {
    /// The batch that was transmitted, echoed back for display
    pub commands: CommandBatch,
    /// Size of the frame that went over the wire
    pub bytes_sent: usize,
}

/// Client that delivers one payload per call to a configured endpoint
///
/// Each call owns its own connection and payload; there is no shared state
/// between deliveries and no retry on failure.
#[derive(Debug, Clone)]
pub struct DeliveryClient {
    endpoint: EndpointConfig,
    timeout: Duration,
}

impl DeliveryClient {
    /// Create a client for the given endpoint with the default timeout
    pub fn new(endpoint: EndpointConfig) -> Self {
        Self {
            endpoint,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the connect/write deadline
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Deliver the payload in a single attempt
    ///
    /// Connects (plain or TLS per the endpoint), writes the full frame,
    /// then shuts down the write side so the listener sees end-of-message.
    ///
    /// # Errors
    /// * `DeliveryError::Encode` - payload could not be framed
    /// * `DeliveryError::Connect` - connection establishment failed
    /// * `DeliveryError::Certificate` - TLS verification failed
    /// * `DeliveryError::Write` - frame transmission failed
    /// * `DeliveryError::Timeout` - a phase exceeded the deadline
    pub async fn send(&self, payload: DeliveryPayload) -> Result<DeliveryReceipt> {
        let frame = wire::encode_frame(&payload)?;

        debug!(
            address = %self.endpoint.address,
            port = self.endpoint.port,
            secure = self.endpoint.secure,
            bytes = frame.len(),
            "opening delivery connection"
        );

        let stream = self
            .deadline(TcpStream::connect((
                self.endpoint.address.as_str(),
                self.endpoint.port,
            )))
            .await?
            .map_err(|source| DeliveryError::Connect {
                address: self.endpoint.address.clone(),
                port: self.endpoint.port,
                source,
            })?;

        if self.endpoint.secure {
            let connector = TlsConnector::from(self.tls_config());
            let server_name = ServerName::try_from(self.endpoint.address.as_str()).map_err(
                |_| DeliveryError::InvalidServerName {
                    name: self.endpoint.address.clone(),
                },
            )?;
            let mut tls = self
                .deadline(connector.connect(server_name, stream))
                .await?
                .map_err(|err| self.classify_handshake_error(err))?;
            self.write_frame(&mut tls, &frame).await?;
        } else {
            let mut stream = stream;
            self.write_frame(&mut stream, &frame).await?;
        }

        info!(
            world = %payload.world,
            commands = payload.commands.len(),
            bytes = frame.len(),
            "delivered command batch"
        );

        Ok(DeliveryReceipt {
            commands: payload.commands,
            bytes_sent: frame.len(),
        })
    }

    /// Write the frame and half-close the write side
    async fn write_frame<S>(&self, stream: &mut S, frame: &[u8]) -> Result<()>
    where
        S: AsyncWrite + Unpin,
    {
        self.deadline(async {
            stream.write_all(frame).await?;
            stream.shutdown().await
        })
        .await?
        .map_err(|source| DeliveryError::Write { source })
    }

    /// Run a phase under the configured deadline
    async fn deadline<F: std::future::Future>(&self, fut: F) -> Result<F::Output> {
        timeout(self.timeout, fut)
            .await
            .map_err(|_| DeliveryError::Timeout {
                secs: self.timeout.as_secs(),
            })
    }

    fn tls_config(&self) -> Arc<ClientConfig> {
        Arc::new(
            ClientConfig::builder()
                .with_safe_defaults()
                .with_custom_certificate_verifier(certificate_verifier(
                    self.endpoint.reject_unauthorized,
                ))
                .with_no_client_auth(),
        )
    }

    /// Separate certificate failures from plain connection failures
    fn classify_handshake_error(&self, err: std::io::Error) -> DeliveryError {
        let is_certificate = err
            .get_ref()
            .and_then(|inner| inner.downcast_ref::<rustls::Error>())
            .is_some_and(|e| matches!(e, rustls::Error::InvalidCertificate(_)));
        if is_certificate {
            DeliveryError::Certificate {
                reason: err.to_string(),
            }
        } else {
            DeliveryError::Connect {
                address: self.endpoint.address.clone(),
                port: self.endpoint.port,
                source: err,
            }
        }
    }
}

/// Select the certificate verifier for the endpoint's trust policy
///
/// `reject_unauthorized = true` keeps full webpki verification against the
/// bundled CA roots; `false` accepts self-signed / unknown-CA certificates,
/// mirroring the listener-side `rejectUnauthorized` contract.
fn certificate_verifier(reject_unauthorized: bool) -> Arc<dyn ServerCertVerifier> {
    if reject_unauthorized {
        let mut roots = RootCertStore::empty();
        roots.add_trust_anchors(webpki_roots::TLS_SERVER_ROOTS.iter().map(|anchor| {
            OwnedTrustAnchor::from_subject_spki_name_constraints(
                anchor.subject,
                anchor.spki,
                anchor.name_constraints,
            )
        }));
        Arc::new(WebPkiVerifier::new(roots, None))
    } else {
        Arc::new(AcceptAnyCert)
    }
}

/// Verifier that accepts any server certificate (reject_unauthorized=false)
struct AcceptAnyCert;

impl ServerCertVerifier for AcceptAnyCert {
    fn verify_server_cert(
        &self,
        _end_entity: &rustls::Certificate,
        _intermediates: &[rustls::Certificate],
        _server_name: &ServerName,
        _scts: &mut dyn Iterator<Item = &[u8]>,
        _ocsp_response: &[u8],
        _now: std::time::SystemTime,
    ) -> std::result::Result<ServerCertVerified, rustls::Error> {
        Ok(ServerCertVerified::assertion())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_rustls::rustls::CertificateError;

    #[test]
    fn test_ip_addresses_are_valid_server_names() {
        assert!(ServerName::try_from("127.0.0.1").is_ok());
        assert!(ServerName::try_from("example.com").is_ok());
    }

    #[test]
    fn test_with_timeout_overrides_default() {
        let client = DeliveryClient::new(EndpointConfig::default())
            .with_timeout(Duration::from_millis(250));
        assert_eq!(client.timeout, Duration::from_millis(250));
    }

    /// Run a verifier against a certificate that is not valid DER
    fn verify_garbage_cert(
        verifier: &dyn ServerCertVerifier,
    ) -> std::result::Result<ServerCertVerified, rustls::Error> {
        let cert = rustls::Certificate(vec![0x30, 0x03, 0x02, 0x01, 0x01]);
        let name = ServerName::try_from("127.0.0.1").unwrap();
        verifier.verify_server_cert(
            &cert,
            &[],
            &name,
            &mut std::iter::empty(),
            &[],
            std::time::SystemTime::now(),
        )
    }

    #[test]
    fn test_unauthorized_certificates_accepted_when_not_rejecting() {
        let verifier = certificate_verifier(false);
        assert!(verify_garbage_cert(verifier.as_ref()).is_ok());
    }

    #[test]
    fn test_unauthorized_certificates_rejected_when_rejecting() {
        let verifier = certificate_verifier(true);
        let err = verify_garbage_cert(verifier.as_ref()).unwrap_err();
        assert!(matches!(err, rustls::Error::InvalidCertificate(_)));
    }

    #[test]
    fn test_handshake_certificate_failure_maps_to_certificate_error() {
        let client = DeliveryClient::new(EndpointConfig::default());
        let inner = rustls::Error::InvalidCertificate(CertificateError::UnknownIssuer);
        let err = std::io::Error::new(std::io::ErrorKind::InvalidData, inner);

        let classified = client.classify_handshake_error(err);
        match classified {
            DeliveryError::Certificate { reason } => {
                assert!(reason.contains("UnknownIssuer"), "reason: {reason}");
            }
            other => panic!("expected Certificate, got {other:?}"),
        }
    }

    #[test]
    fn test_handshake_io_failure_maps_to_connect_error() {
        let client = DeliveryClient::new(EndpointConfig::default());
        let err = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");

        let classified = client.classify_handshake_error(err);
        assert!(matches!(classified, DeliveryError::Connect { .. }));
    }
}
