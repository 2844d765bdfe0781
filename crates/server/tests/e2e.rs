use std::net::SocketAddr;

use migration::MigratorTrait;
use models::db::{connect_with_config, DatabaseConfig};
use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;

use server::routes::ServerState;

struct TestApp {
    base_url: String,
}

impl TestApp {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Real router over a fresh, migrated in-memory SQLite database.
async fn start_server() -> anyhow::Result<TestApp> {
    let db = connect_with_config(&DatabaseConfig::in_memory()).await?;
    migration::Migrator::up(&db, None).await?;

    let app = server::startup::app(ServerState { db }, "target/e2e-static-missing");
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

fn client() -> reqwest::Client {
    reqwest::Client::builder().build().expect("reqwest client")
}

async fn create_category(c: &reqwest::Client, app: &TestApp, name: &str) -> anyhow::Result<Value> {
    let res = c.post(app.url("/api/admin/services/categories")).json(&json!({"name": name})).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    Ok(body["data"].clone())
}

async fn create_service(c: &reqwest::Client, app: &TestApp, name: &str, category: &str) -> anyhow::Result<Value> {
    let res = c
        .post(app.url("/api/admin/services"))
        .json(&json!({"name": name, "categoryName": category, "description": "Drafted by experts"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    Ok(res.json::<Value>().await?["data"].clone())
}

#[tokio::test]
async fn e2e_public_health_and_metrics() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(app.url("/health")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["status"], "ok");

    let res = client().get(app.url("/metrics")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert!(res.text().await?.contains("legal_catalog_http_requests_total"));
    Ok(())
}

#[tokio::test]
async fn e2e_rename_category_moves_services() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();
    let drafting = create_category(&c, &app, "Drafting").await?;
    let old_id = drafting["id"].as_str().unwrap_or_default().to_string();
    let svc = create_service(&c, &app, "Gift Deed", "Drafting").await?;

    let res = c
        .patch(app.url(&format!("/api/admin/services/categories/{old_id}")))
        .json(&json!({"name": "Document Drafting"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["name"], "Document Drafting");
    assert_eq!(body["data"]["slug"], "document-drafting");
    assert!(body["data"]["createdAt"].is_string());
    assert_ne!(body["data"]["id"], old_id.as_str());

    let res = c.get(app.url(&format!("/api/admin/services/{}", svc["id"].as_str().unwrap_or_default()))).send().await?;
    let moved = res.json::<Value>().await?;
    assert_eq!(moved["data"]["categoryName"], "Document Drafting");

    let res = c.get(app.url("/api/admin/services/categories")).send().await?;
    let names: Vec<Value> = res.json::<Value>().await?["data"]
        .as_array()
        .cloned()
        .unwrap_or_default()
        .into_iter()
        .map(|c| c["name"].clone())
        .collect();
    assert_eq!(names, vec![json!("Document Drafting")]);

    // the old id is gone
    let res = c
        .patch(app.url(&format!("/api/admin/services/categories/{old_id}")))
        .json(&json!({"name": "Drafting"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    let body = res.json::<Value>().await?;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Category not found");
    Ok(())
}

#[tokio::test]
async fn e2e_rename_conflict_and_validation() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();
    create_category(&c, &app, "Drafting").await?;
    let property = create_category(&c, &app, "Property").await?;
    let id = property["id"].as_str().unwrap_or_default().to_string();
    let path = format!("/api/admin/services/categories/{id}");

    let res = c.patch(app.url(&path)).json(&json!({"name": "Drafting"})).send().await?;
    assert_eq!(res.status(), HttpStatusCode::CONFLICT);
    let body = res.json::<Value>().await?;
    assert_eq!(body["success"], false);
    assert!(body["message"].as_str().is_some_and(|m| !m.is_empty()));

    let res = c.patch(app.url(&path)).json(&json!({"name": "   "})).send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    assert_eq!(res.json::<Value>().await?["message"], "Category name is required");

    let res = c.patch(app.url(&path)).json(&json!({})).send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);

    let res = c
        .patch(app.url("/api/admin/services/categories/not-a-uuid"))
        .json(&json!({"name": "Anything"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    assert_eq!(res.json::<Value>().await?["success"], false);

    // both categories unchanged
    let res = c.get(app.url("/api/admin/services/categories")).send().await?;
    let list = res.json::<Value>().await?;
    assert_eq!(list["data"].as_array().map(|a| a.len()), Some(2));
    assert_eq!(list["data"][1]["id"], id.as_str());
    Ok(())
}

#[tokio::test]
async fn e2e_delete_category_guarded_by_services() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();
    let cat = create_category(&c, &app, "Legal Notices").await?;
    let cat_path = format!("/api/admin/services/categories/{}", cat["id"].as_str().unwrap_or_default());
    let svc = create_service(&c, &app, "Draft Legal Notice", "Legal Notices").await?;

    let res = c.delete(app.url(&cat_path)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::CONFLICT);
    assert_eq!(
        res.json::<Value>().await?["message"],
        "Cannot delete category with existing services. Move or delete services first."
    );

    let res = c.delete(app.url(&format!("/api/admin/services/{}", svc["id"].as_str().unwrap_or_default()))).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    let res = c.delete(app.url(&cat_path)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body, json!({"success": true}));

    let res = c.delete(app.url(&cat_path)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn e2e_public_service_detail() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();
    create_category(&c, &app, "Property Services").await?;
    let svc = create_service(&c, &app, "Title Search Report", "Property Services").await?;
    let res = c
        .post(app.url(&format!("/api/admin/services/{}/prices", svc["id"].as_str().unwrap_or_default())))
        .json(&json!({"name": "Basic Package", "price": 2500, "discountAmount": 500, "isCompulsory": true}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    let res = c.get(app.url("/api/services/property-services/title-search-report")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["data"]["category"]["slug"], "property-services");
    assert_eq!(body["data"]["price"][0]["price"], 2500);

    let res = c.get(app.url("/api/services/property-services/unknown")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn e2e_forms_and_subcategories() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();
    let res = c
        .post(app.url("/api/admin/forms"))
        .json(&json!({
            "name": "Legal Notice Form",
            "type": "SERVICE_FORM",
            "schemaJson": {"fields": [{"type": "textarea", "name": "noticeDetails", "label": "Notice Details"}]}
        }))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Value>().await?["data"]["type"], "SERVICE_FORM");

    let res = c.get(app.url("/api/admin/forms?type=LAWYER_REGISTRATION")).send().await?;
    assert_eq!(res.json::<Value>().await?["data"], json!([]));

    create_category(&c, &app, "Drafting").await?;
    let res = c
        .post(app.url("/api/admin/services/subcategories"))
        .json(&json!({"name": "Rent Agreements", "categoryName": "Drafting"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let res = c.get(app.url("/api/admin/services/subcategories?categoryName=Drafting")).send().await?;
    let body = res.json::<Value>().await?;
    assert_eq!(body["data"][0]["slug"], "rent-agreements");

    let res = c
        .post(app.url("/api/admin/services/subcategories"))
        .json(&json!({"name": "Rent Agreements"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    Ok(())
}
