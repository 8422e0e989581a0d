mod common;

use common::{FAILURE_BODY, MockServer};
use hrms_client::{ClientConfig, HrmsClient, HrmsError, LocalStore, NoCredentials};
use reqwest::StatusCode;
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::TcpListener,
};

#[tokio::test]
async fn server_errors_reach_the_caller_intact() {
    let server = MockServer::start_failing(&["/api/employees/42"]).await;
    let client = server.client(LocalStore::new());

    let err = client.employees().by_id(42).await.unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
    match err {
        HrmsError::Status { status, url, body } => {
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert!(url.ends_with("/api/employees/42"), "url was {url}");
            assert_eq!(body, FAILURE_BODY);
        }
        other => panic!("expected a status error, got {other:?}"),
    }
}

#[tokio::test]
async fn failures_are_not_retried() {
    let server = MockServer::start_failing(&["/api/payrolls/3/status?status=PAID"]).await;
    let client = server.client(LocalStore::new());

    assert!(client.payroll().update_status(3, "PAID").await.is_err());
    assert_eq!(server.requests().len(), 1);
}

#[tokio::test]
async fn connection_refused_is_a_transport_error() {
    // Grab a free port, then close it so nothing is listening there.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = ClientConfig::new(&format!("http://{addr}/api")).unwrap();
    let client = HrmsClient::new(&config, NoCredentials).unwrap();

    let err = client.dashboard().stats().await.unwrap_err();
    assert!(matches!(err, HrmsError::HttpMiddleware(_)), "got {err:?}");
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn truncated_error_body_surfaces_the_read_failure() {
    // Announces 100 body bytes, sends 5, then hangs up.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = [0_u8; 4096];
        let _ = socket.read(&mut request).await.unwrap();
        socket
            .write_all(
                b"HTTP/1.1 500 Internal Server Error\r\nContent-Length: 100\r\n\r\nhello",
            )
            .await
            .unwrap();
        socket.shutdown().await.unwrap();
    });

    let config = ClientConfig::new(&format!("http://{addr}/api")).unwrap();
    let client = HrmsClient::new(&config, NoCredentials).unwrap();

    let err = client.employees().all().await.unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
    match err {
        HrmsError::UnreadableBody {
            status,
            url,
            partial_body,
            source,
        } => {
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert!(url.ends_with("/api/employees"), "url was {url}");
            assert!(
                "hello".starts_with(partial_body.as_str()),
                "unexpected partial body {partial_body:?}"
            );
            assert!(source.is_body() || source.is_decode(), "got {source:?}");
        }
        other => panic!("expected an unreadable body error, got {other:?}"),
    }
}
