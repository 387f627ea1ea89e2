use std::io::Write;

use chamber_core::{DataSource, DocumentShape, LoadError, MemberLoader};
use tempfile::NamedTempFile;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MEMBERS: &str = r#"[
    {"name": "Harbor Coffee", "membershipLevel": "Gold", "image": "harbor.png"},
    {"name": "Zephyr Books", "level": "Bronze"},
    {"name": "Alpine Dental", "membershipLevel": "Silver Plus"},
    {"name": "Mill Street Bakery", "membershipLevel": "Member"}
]"#;

fn data_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

fn file_source(file: &NamedTempFile) -> DataSource {
    DataSource::File(file.path().to_path_buf())
}

fn names(collection: &chamber_core::MemberCollection) -> Vec<String> {
    collection.iter().map(|m| m.name.clone()).collect()
}

#[tokio::test]
async fn test_bare_array_from_file_keeps_order_and_length() {
    let file = data_file(MEMBERS);
    let loader = MemberLoader::new().unwrap();

    let collection = loader.load(&file_source(&file)).await.unwrap();
    assert_eq!(collection.len(), 4);
    assert_eq!(collection.shape(), &DocumentShape::BareArray);
    assert_eq!(
        names(&collection),
        vec!["Harbor Coffee", "Zephyr Books", "Alpine Dental", "Mill Street Bakery"]
    );
}

#[tokio::test]
async fn test_wrapper_keys_match_bare_array() {
    let loader = MemberLoader::new().unwrap();
    let bare = loader.load(&file_source(&data_file(MEMBERS))).await.unwrap();

    for key in ["members", "companies"] {
        let wrapped = data_file(&format!(r#"{{"{}": {}, "updated": "2026-01-27"}}"#, key, MEMBERS));
        let collection = loader.load(&file_source(&wrapped)).await.unwrap();
        assert_eq!(collection.members(), bare.members(), "wrapper key {key}");
    }
}

#[tokio::test]
async fn test_unknown_object_loads_empty() {
    let file = data_file(r#"{"businesses": [{"name": "Hidden"}]}"#);
    let loader = MemberLoader::new().unwrap();

    let collection = loader.load(&file_source(&file)).await.unwrap();
    assert!(collection.is_empty());
    assert!(collection.is_unrecognized());
}

#[tokio::test]
async fn test_invalid_json_is_parse_error() {
    let file = data_file(r#"[{"name": "Harbor Coffee","#);
    let loader = MemberLoader::new().unwrap();

    let err = loader.load(&file_source(&file)).await.unwrap_err();
    assert!(matches!(err, LoadError::Parse { .. }), "{err:?}");
    assert_eq!(err.resource(), file.path().display().to_string());
}

#[tokio::test]
async fn test_missing_file_is_fetch_error() {
    let dir = tempfile::tempdir().unwrap();
    let source = DataSource::File(dir.path().join("data/members.json"));
    let loader = MemberLoader::new().unwrap();

    let err = loader.load(&source).await.unwrap_err();
    assert!(matches!(err, LoadError::Fetch { status: None, .. }), "{err:?}");
}

#[tokio::test]
async fn test_http_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data/chamber.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(format!(r#"{{"companies": {}}}"#, MEMBERS)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let source = DataSource::parse(&format!("{}/data/chamber.json", server.uri()));
    let collection = MemberLoader::new().unwrap().load(&source).await.unwrap();
    assert_eq!(collection.len(), 4);
    assert_eq!(
        collection.shape(),
        &DocumentShape::Wrapped { key: "companies".to_string() }
    );
}

#[tokio::test]
async fn test_http_status_is_fetch_error_with_code() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data/members.json"))
        .respond_with(ResponseTemplate::new(404).set_body_string("members.json not found."))
        .expect(1)
        .mount(&server)
        .await;

    let url = format!("{}/data/members.json", server.uri());
    let err = MemberLoader::new()
        .unwrap()
        .load(&DataSource::parse(&url))
        .await
        .unwrap_err();

    match err {
        LoadError::Fetch { resource, status, message } => {
            assert_eq!(resource, url);
            assert_eq!(status, Some(404));
            assert_eq!(message, "members.json not found.");
        }
        other => panic!("expected fetch error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_http_invalid_body_is_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let source = DataSource::parse(&format!("{}/data/members.json", server.uri()));
    let err = MemberLoader::new().unwrap().load(&source).await.unwrap_err();
    assert!(err.is_parse());
}

#[tokio::test]
async fn test_http_server_error_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let source = DataSource::parse(&format!("{}/data/members.json", server.uri()));
    let err = MemberLoader::new().unwrap().load(&source).await.unwrap_err();
    assert_eq!(err.status(), Some(503));
}
