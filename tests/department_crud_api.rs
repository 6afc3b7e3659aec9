//! End-to-end CRUD suite for the `/departments` resource

use std::net::SocketAddr;

use orgdir_api::{ApiServer, AppState};
use orgdir_store::OrgStore;
use reqwest::StatusCode;
use serde_json::{json, Value};

async fn spawn_server() -> String {
    let addr: SocketAddr = "127.0.0.1:0".parse().unwrap();
    let server = ApiServer::bind(addr, AppState::new(OrgStore::new()))
        .await
        .expect("bind server");
    let local_addr = server.local_addr().expect("local addr");
    tokio::spawn(server.serve());
    format!("http://{}", local_addr)
}

async fn create_department(client: &reqwest::Client, base: &str, name: &str) -> Value {
    let response = client
        .post(format!("{base}/departments"))
        .json(&json!({ "name": name }))
        .send()
        .await
        .expect("post department");
    assert_eq!(response.status(), StatusCode::CREATED);
    response.json().await.expect("created body")
}

async fn get_departments(client: &reqwest::Client, base: &str) -> Vec<Value> {
    let response = client
        .get(format!("{base}/departments"))
        .send()
        .await
        .expect("list departments");
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("collection body");
    body["_embedded"]["departments"]
        .as_array()
        .cloned()
        .expect("embedded departments")
}

fn find_by_name<'a>(items: &'a [Value], name: &str) -> Option<&'a Value> {
    items.iter().find(|item| item["name"] == name)
}

fn self_href(item: &Value) -> String {
    item["_links"]["self"]["href"]
        .as_str()
        .expect("self link")
        .to_string()
}

#[tokio::test]
async fn should_get_all_departments() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    create_department(&client, &base, "Existing department").await;
    create_department(&client, &base, "Other department").await;

    let departments = get_departments(&client, &base).await;
    assert_eq!(departments.len(), 2);
}

#[tokio::test]
async fn should_get_department_by_id() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    create_department(&client, &base, "Existing department").await;

    let departments = get_departments(&client, &base).await;
    let existing = find_by_name(&departments, "Existing department").expect("seeded department");

    let response = client
        .get(format!("{base}{}", self_href(existing)))
        .send()
        .await
        .expect("get by self link");
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("item body");
    assert_eq!(body["name"], "Existing department");
    assert_eq!(body["id"], existing["id"]);
}

#[tokio::test]
async fn should_create_new_department() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let created = create_department(&client, &base, "New department").await;
    assert_eq!(created["name"], "New department");

    let departments = get_departments(&client, &base).await;
    assert!(find_by_name(&departments, "New department").is_some());
}

#[tokio::test]
async fn should_update_department() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    create_department(&client, &base, "Existing department").await;
    let departments = get_departments(&client, &base).await;
    let existing = find_by_name(&departments, "Existing department").expect("seeded department");
    let self_link = self_href(existing);

    let response = client
        .put(format!("{base}{self_link}"))
        .json(&json!({ "name": "Updated department" }))
        .send()
        .await
        .expect("put department");
    assert_eq!(response.status(), StatusCode::OK);
    let replaced: Value = response.json().await.expect("replaced body");
    assert_eq!(replaced["id"], existing["id"]);

    let departments = get_departments(&client, &base).await;
    assert!(find_by_name(&departments, "Existing department").is_none());
    assert!(find_by_name(&departments, "Updated department").is_some());
}

#[tokio::test]
async fn should_delete_department() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    create_department(&client, &base, "Existing department").await;
    let departments = get_departments(&client, &base).await;
    let existing = find_by_name(&departments, "Existing department").expect("seeded department");
    let self_link = self_href(existing);

    let response = client
        .delete(format!("{base}{self_link}"))
        .send()
        .await
        .expect("delete department");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = client
        .get(format!("{base}{self_link}"))
        .send()
        .await
        .expect("get after delete");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Whole lifecycle against one server: create two, update one via its self
/// link, delete it, and watch the collection track every step.
#[tokio::test]
async fn crud_walkthrough_tracks_collection_state() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    create_department(&client, &base, "Existing department").await;
    create_department(&client, &base, "Other department").await;

    let departments = get_departments(&client, &base).await;
    assert_eq!(departments.len(), 2);
    let existing = find_by_name(&departments, "Existing department").expect("first department");
    let self_link = self_href(existing);

    let response = client
        .put(format!("{base}{self_link}"))
        .json(&json!({ "name": "Updated department" }))
        .send()
        .await
        .expect("put department");
    assert_eq!(response.status(), StatusCode::OK);

    let departments = get_departments(&client, &base).await;
    assert!(find_by_name(&departments, "Existing department").is_none());
    assert!(find_by_name(&departments, "Updated department").is_some());

    let response = client
        .delete(format!("{base}{self_link}"))
        .send()
        .await
        .expect("delete department");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = client
        .get(format!("{base}{self_link}"))
        .send()
        .await
        .expect("get after delete");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
