//! Local HTTP and HTTPS fixture servers for pipeline tests.

use std::convert::Infallible;
use std::sync::Arc;

use bytes::Bytes;
use http::StatusCode;
use http_body_util::Full;
use hyper::body::Incoming;
use hyper::rt::{Read, Write};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Response};
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;
use tokio_rustls::TlsAcceptor;

/// Answer one connection with `body` and `status`, whatever the request.
async fn serve_connection<I>(io: I, status: StatusCode, body: &'static str)
where
    I: Read + Write + Unpin + Send + 'static,
{
    let svc = service_fn(move |_req: Request<Incoming>| async move {
        Ok::<_, Infallible>(
            Response::builder()
                .status(status)
                .header("content-type", "application/json")
                .body(Full::new(Bytes::from_static(body.as_bytes())))
                .unwrap(),
        )
    });
    let _ = http1::Builder::new().serve_connection(io, svc).await;
}

/// Serve `body` with `status` on every request. Returns the base URL.
pub async fn serve_with_status(status: StatusCode, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        while let Ok((stream, _)) = listener.accept().await {
            tokio::spawn(serve_connection(TokioIo::new(stream), status, body));
        }
    });

    format!("http://{addr}/")
}

/// Serve `body` with 200 OK.
pub async fn serve(body: &'static str) -> String {
    serve_with_status(StatusCode::OK, body).await
}

/// Serve `body` over HTTPS with a freshly generated self-signed certificate.
pub async fn serve_tls(body: &'static str) -> String {
    let key_pair = rcgen::KeyPair::generate().unwrap();
    let cert_params =
        rcgen::CertificateParams::new(vec!["127.0.0.1".to_string(), "localhost".to_string()])
            .unwrap();
    let cert = cert_params.self_signed(&key_pair).unwrap();

    let server_cert = rustls::pki_types::CertificateDer::from(cert.der().to_vec());
    let server_key = rustls::pki_types::PrivateKeyDer::try_from(key_pair.serialize_der()).unwrap();
    let server_config = rustls::ServerConfig::builder_with_provider(
        rustls::crypto::ring::default_provider().into(),
    )
    .with_safe_default_protocol_versions()
    .unwrap()
    .with_no_client_auth()
    .with_single_cert(vec![server_cert], server_key)
    .unwrap();
    let acceptor = TlsAcceptor::from(Arc::new(server_config));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        while let Ok((stream, _)) = listener.accept().await {
            let acceptor = acceptor.clone();
            tokio::spawn(async move {
                // A client that rejects the certificate aborts the handshake.
                if let Ok(tls) = acceptor.accept(stream).await {
                    serve_connection(TokioIo::new(tls), StatusCode::OK, body).await;
                }
            });
        }
    });

    format!("https://{addr}/")
}
