//! WebDAV 请求测试：基于 wiremock，验证请求方法、路径、认证头与响应分类。

use wiremock::matchers::{basic_auth, body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::CloudClient;
use crate::error::CloudError;
use crate::tests::{MOCK_PASSWORD, MOCK_USERNAME, mock_client, sabre_error_body};

const NOT_FOUND: &str = r"Sabre\DAV\Exception\NotFound";

#[tokio::test]
async fn mkdir_sends_mkcol_with_basic_auth() {
    let server = MockServer::start().await;
    Mock::given(method("MKCOL"))
        .and(path("/remote.php/webdav/Test"))
        .and(basic_auth(MOCK_USERNAME, MOCK_PASSWORD))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let client = mock_client(&server);
    client.mkdir("Test").await.unwrap();
}

#[tokio::test]
async fn mkdir_surfaces_server_exception() {
    let server = MockServer::start().await;
    Mock::given(method("MKCOL"))
        .and(path("/remote.php/webdav/Test"))
        .respond_with(ResponseTemplate::new(405).set_body_string(sabre_error_body(
            r"Sabre\DAV\Exception\MethodNotAllowed",
            "The resource you tried to create already exists",
        )))
        .mount(&server)
        .await;

    let err = mock_client(&server).mkdir("Test").await.unwrap_err();
    let server_error = err.server_error().expect("应当是服务器异常");
    assert_eq!(server_error.exception, r"Sabre\DAV\Exception\MethodNotAllowed");
    assert_eq!(
        server_error.message,
        "The resource you tried to create already exists"
    );
    assert!(!err.is_not_found());
}

#[tokio::test]
async fn exception_inside_success_status_is_still_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/remote.php/webdav/Test"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(sabre_error_body(r"Sabre\DAV\Exception\Forbidden", "nope")),
        )
        .mount(&server)
        .await;

    let err = mock_client(&server).delete("Test").await.unwrap_err();
    assert!(matches!(err, CloudError::Server(ref e) if e.exception.ends_with("Forbidden")));
}

#[tokio::test]
async fn delete_sends_delete() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/remote.php/webdav/Test"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    mock_client(&server).delete("Test").await.unwrap();
}

#[tokio::test]
async fn upload_then_download_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/remote.php/webdav/Test/test.txt"))
        .and(body_string("Hello World!\n"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/remote.php/webdav/Test/test.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Hello World!\n"))
        .expect(1)
        .mount(&server)
        .await;

    let client = mock_client(&server);
    client.upload(b"Hello World!\n".to_vec(), "Test/test.txt").await.unwrap();

    let data = client.download("Test/test.txt").await.unwrap();
    assert_eq!(&data[..], b"Hello World!\n");
}

#[tokio::test]
async fn download_passes_through_xml_files() {
    let content = "<note><to>Tove</to><from>Jani</from></note>";
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/remote.php/webdav/Test/note.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string(content))
        .mount(&server)
        .await;

    let data = mock_client(&server).download("Test/note.xml").await.unwrap();
    assert_eq!(&data[..], content.as_bytes());
}

#[tokio::test]
async fn download_surfaces_decoded_exception() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/remote.php/webdav/Missing/file.txt"))
        .respond_with(
            ResponseTemplate::new(404).set_body_string(sabre_error_body(NOT_FOUND, "missing")),
        )
        .mount(&server)
        .await;

    let err = mock_client(&server).download("Missing/file.txt").await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.server_error().map(|e| e.message.as_str()), Some("missing"));
}

#[tokio::test]
async fn error_status_without_exception_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/remote.php/webdav/broken"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = mock_client(&server).download("broken").await.unwrap_err();
    match err {
        CloudError::Status { status, url } => {
            assert_eq!(status, 500);
            assert!(url.ends_with("/remote.php/webdav/broken"));
        }
        other => panic!("预期为 Status，得到 {other:?}"),
    }
}

#[tokio::test]
async fn exists_sends_depth_zero_propfind() {
    let server = MockServer::start().await;
    Mock::given(method("PROPFIND"))
        .and(path("/remote.php/webdav/Test"))
        .and(header("depth", "0"))
        .respond_with(ResponseTemplate::new(207).set_body_string(
            r#"<?xml version="1.0"?>
<d:multistatus xmlns:d="DAV:"><d:response><d:href>/remote.php/webdav/Test/</d:href>
<d:propstat><d:prop><d:resourcetype><d:collection/></d:resourcetype></d:prop>
<d:status>HTTP/1.1 200 OK</d:status></d:propstat></d:response></d:multistatus>"#,
        ))
        .mount(&server)
        .await;

    let client = mock_client(&server);
    assert!(client.exists("Test").await);
    assert!(client.try_exists("Test").await.unwrap());
}

#[tokio::test]
async fn missing_path_is_false_not_panic() {
    let server = MockServer::start().await;
    Mock::given(method("PROPFIND"))
        .and(path("/remote.php/webdav/Nope"))
        .respond_with(
            ResponseTemplate::new(404).set_body_string(sabre_error_body(NOT_FOUND, "gone")),
        )
        .mount(&server)
        .await;

    let client = mock_client(&server);
    assert!(!client.exists("Nope").await);
    assert!(!client.try_exists("Nope").await.unwrap());
}

#[tokio::test]
async fn try_exists_keeps_auth_failures_apart() {
    let server = MockServer::start().await;
    Mock::given(method("PROPFIND"))
        .respond_with(ResponseTemplate::new(401).set_body_string(sabre_error_body(
            r"Sabre\DAV\Exception\NotAuthenticated",
            "No public access to this resource.",
        )))
        .mount(&server)
        .await;

    let client = mock_client(&server);
    assert!(!client.exists("Test").await);

    let err = client.try_exists("Test").await.unwrap_err();
    assert!(err.server_error().is_some_and(|e| e.is_not_authenticated()));
}

#[tokio::test]
async fn unreachable_server_collapses_to_false() {
    // 端口 1 上没有服务
    let client = CloudClient::new("http://127.0.0.1:1/", "admin", "password").unwrap();
    assert!(!client.exists("Test").await);

    let err = client.try_exists("Test").await.unwrap_err();
    assert!(matches!(err, CloudError::Request(_)));
}

#[tokio::test]
async fn invalid_path_fails_without_network() {
    let server = MockServer::start().await;
    Mock::given(method("MKCOL"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let err = client.mkdir("../outside").await.unwrap_err();
    assert!(matches!(err, CloudError::InvalidPath(_)));
    assert!(!client.exists("../outside").await);
}

#[tokio::test]
async fn base_url_sub_path_is_kept() {
    let server = MockServer::start().await;
    Mock::given(method("MKCOL"))
        .and(path("/nextcloud/remote.php/webdav/My%20Folder"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let client = CloudClient::new(
        &format!("{}/nextcloud", server.uri()),
        MOCK_USERNAME,
        MOCK_PASSWORD,
    )
    .unwrap();
    client.mkdir("My Folder").await.unwrap();
}
