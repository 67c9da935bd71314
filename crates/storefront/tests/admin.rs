mod common;

use common::{ADMIN_EMAIL, USER_EMAIL, spawn_app, token_for};
use reqwest::multipart::{Form, Part};
use serde_json::Value;

#[tokio::test]
async fn admin_routes_require_admin_role() {
    let app = spawn_app().await;

    let res = app
        .client
        .get(app.url("/api/admin/users"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 401);

    let res = app
        .client
        .get(app.url("/api/admin/users"))
        .bearer_auth(token_for(USER_EMAIL))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 403);
}

#[tokio::test]
async fn inventory_reports_stock_levels() {
    let app = spawn_app().await;

    let body: Value = app
        .client
        .get(app.url("/api/admin/products"))
        .bearer_auth(token_for(ADMIN_EMAIL))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["data"]["total"], 4);
    assert_eq!(body["data"]["low_stock"], 2);
    assert_eq!(body["data"]["out_of_stock"], 1);

    let body: Value = app
        .client
        .get(app.url("/api/admin/products?search=filters"))
        .bearer_auth(token_for(ADMIN_EMAIL))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["data"]["products"][0]["name"], "Air Filter");
    assert_eq!(body["data"]["products"][0]["status"], "Out of Stock");
}

#[tokio::test]
async fn users_and_bookings_are_searchable() {
    let app = spawn_app().await;

    let users: Value = app
        .client
        .get(app.url("/api/admin/users?search=sarah"))
        .bearer_auth(token_for(ADMIN_EMAIL))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(users["data"]["users"].as_array().unwrap().len(), 1);
    assert_eq!(users["data"]["active"], 4);

    let bookings: Value = app
        .client
        .get(app.url("/api/admin/bookings?search=brake"))
        .bearer_auth(token_for(ADMIN_EMAIL))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(bookings["data"]["bookings"][0]["customer_name"], "Sarah Johnson");
    assert_eq!(bookings["data"]["scheduled"], 1);
}

#[tokio::test]
async fn profile_uses_metadata_name() {
    let app = spawn_app().await;

    let body: Value = app
        .client
        .get(app.url("/api/admin/profile"))
        .bearer_auth(token_for(ADMIN_EMAIL))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["data"]["name"], "Chidi");
}

fn product_form() -> Form {
    Form::new()
        .text("name", "Spark Plugs")
        .text("category", "Engine")
        .text("brand", "NGK")
        .text("price", "3500")
        .text("stock", "40")
        .text("description", "Iridium plugs")
}

#[tokio::test]
async fn add_product_uploads_image_then_inserts_row() {
    let app = spawn_app().await;

    let form = product_form().part(
        "image",
        Part::bytes(vec![0u8; 64])
            .file_name("plugs.png")
            .mime_str("image/png")
            .unwrap(),
    );

    let res = app
        .client
        .post(app.url("/api/admin/products"))
        .bearer_auth(token_for(ADMIN_EMAIL))
        .multipart(form)
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 201);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["data"]["name"], "Spark Plugs");
    assert_eq!(body["data"]["category"], "engine");
    assert_eq!(body["data"]["image"], "https://media.test/plugs.png");

    let uploads = app.media.uploads.lock().await.clone();
    assert_eq!(uploads, vec![("plugs.png".to_string(), 64)]);

    let rows = app.products.rows().await;
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0].name.as_deref(), Some("Spark Plugs"));
    assert_eq!(rows[0].stock_count(), 40);
}

#[tokio::test]
async fn add_product_without_image_is_rejected() {
    let app = spawn_app().await;

    let res = app
        .client
        .post(app.url("/api/admin/products"))
        .bearer_auth(token_for(ADMIN_EMAIL))
        .multipart(product_form())
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 400);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], "image: Image is required");
    assert!(app.media.uploads.lock().await.is_empty());
}

fn image_part() -> Part {
    Part::bytes(vec![0u8; 16])
        .file_name("plugs.png")
        .mime_str("image/png")
        .unwrap()
}

#[tokio::test]
async fn add_product_requires_price_and_stock() {
    let app = spawn_app().await;

    let without_price = Form::new()
        .text("name", "Spark Plugs")
        .text("category", "Engine")
        .text("brand", "NGK")
        .text("stock", "40")
        .part("image", image_part());

    let res = app
        .client
        .post(app.url("/api/admin/products"))
        .bearer_auth(token_for(ADMIN_EMAIL))
        .multipart(without_price)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 400);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], "price: Price is required");

    let blank_stock = Form::new()
        .text("name", "Spark Plugs")
        .text("category", "Engine")
        .text("brand", "NGK")
        .text("price", "3500")
        .text("stock", " ")
        .part("image", image_part());

    let res = app
        .client
        .post(app.url("/api/admin/products"))
        .bearer_auth(token_for(ADMIN_EMAIL))
        .multipart(blank_stock)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 400);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], "stock: Stock is required");

    assert!(app.media.uploads.lock().await.is_empty());
    assert_eq!(app.products.rows().await.len(), 4);
}

#[tokio::test]
async fn add_product_rejects_non_finite_price() {
    let app = spawn_app().await;

    let form = product_form()
        .text("original_price", "inf")
        .part("image", image_part());
    let res = app
        .client
        .post(app.url("/api/admin/products"))
        .bearer_auth(token_for(ADMIN_EMAIL))
        .multipart(form)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 400);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], "original_price: Invalid number");

    let form = Form::new()
        .text("name", "Spark Plugs")
        .text("category", "Engine")
        .text("brand", "NGK")
        .text("price", "NaN")
        .text("stock", "40")
        .part("image", image_part());
    let res = app
        .client
        .post(app.url("/api/admin/products"))
        .bearer_auth(token_for(ADMIN_EMAIL))
        .multipart(form)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 400);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], "price: Invalid number");

    assert_eq!(app.products.rows().await.len(), 4);
}
