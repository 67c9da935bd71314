mod common;

use common::{TestApp, spawn_app};
use serde_json::{Value, json};

async fn new_cart(app: &TestApp) -> String {
    let res = app.client.post(app.url("/api/carts")).send().await.unwrap();
    assert_eq!(res.status(), 201);
    let body: Value = res.json().await.unwrap();
    body["data"]["cart_id"].as_str().unwrap().to_string()
}

async fn add(app: &TestApp, cart_id: &str, product_id: &str) -> reqwest::Response {
    app.client
        .post(app.url(&format!("/api/carts/{cart_id}/items")))
        .json(&json!({ "product_id": product_id }))
        .send()
        .await
        .unwrap()
}

#[tokio::test]
async fn adding_the_same_product_twice_increments_quantity() {
    let app = spawn_app().await;
    let cart_id = new_cart(&app).await;

    add(&app, &cart_id, "2").await;
    let res = add(&app, &cart_id, "2").await;

    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["data"]["items"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"]["items"][0]["quantity"], 2);
    assert_eq!(body["data"]["item_count"], 2);
    assert_eq!(body["data"]["subtotal"], 24000.0);
    assert_eq!(body["data"]["total"], 26000.0);
}

#[tokio::test]
async fn out_of_stock_product_is_rejected() {
    let app = spawn_app().await;
    let cart_id = new_cart(&app).await;

    let res = add(&app, &cart_id, "3").await;

    assert_eq!(res.status(), 409);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], "This item is currently out of stock.");
}

#[tokio::test]
async fn unknown_cart_is_not_found() {
    let app = spawn_app().await;

    let res = app
        .client
        .get(app.url("/api/carts/missing"))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 404);
}

#[tokio::test]
async fn pickup_drops_the_delivery_fee() {
    let app = spawn_app().await;
    let cart_id = new_cart(&app).await;
    add(&app, &cart_id, "1").await;

    let body: Value = app
        .client
        .get(app.url(&format!("/api/carts/{cart_id}?delivery=pickup")))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["data"]["delivery_fee"], 0.0);
    assert_eq!(body["data"]["total"], 15000.0);
}

#[tokio::test]
async fn quantity_updates_and_removal() {
    let app = spawn_app().await;
    let cart_id = new_cart(&app).await;
    add(&app, &cart_id, "1").await;
    add(&app, &cart_id, "2").await;

    let item_url = app.url(&format!("/api/carts/{cart_id}/items/1"));

    let body: Value = app
        .client
        .put(&item_url)
        .json(&json!({ "quantity": 3 }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["data"]["item_count"], 4);

    let body: Value = app
        .client
        .patch(&item_url)
        .json(&json!({ "delta": -10 }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["data"]["item_count"], 1);

    let res = app
        .client
        .delete(app.url(&format!("/api/carts/{cart_id}/items/2")))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["data"]["items"], json!([]));
}

#[tokio::test]
async fn checkout_gates_run_in_order() {
    let app = spawn_app().await;
    let cart_id = new_cart(&app).await;
    let checkout_url = app.url(&format!("/api/carts/{cart_id}/checkout"));

    let checkout = |body: Value| {
        let req = app.client.post(&checkout_url).json(&body);
        async move {
            let res = req.send().await.unwrap();
            let status = res.status();
            let body: Value = res.json().await.unwrap();
            (status, body)
        }
    };

    let (status, body) = checkout(json!({})).await;
    assert_eq!(status, 400);
    assert_eq!(
        body["message"],
        "Please add items to your cart before checking out."
    );

    add(&app, &cart_id, "1").await;

    let (_, body) = checkout(json!({ "name": "Ada" })).await;
    assert_eq!(body["message"], "Please fill in your name and phone number.");

    let (_, body) = checkout(json!({ "name": "Ada", "phone": "0803" })).await;
    assert_eq!(body["message"], "Please provide your delivery address.");

    let (status, body) = checkout(json!({
        "name": "Ada",
        "phone": "0803",
        "delivery": "pickup",
        "payment": "transfer"
    }))
    .await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["total"], 15000.0);
    assert_eq!(body["data"]["payment"], "transfer");
    assert_eq!(
        body["data"]["message"],
        "Your order of ₦15,000 has been placed successfully. We'll contact you shortly."
    );

    let cart: Value = app
        .client
        .get(app.url(&format!("/api/carts/{cart_id}")))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(cart["data"]["item_count"], 0);
}

#[tokio::test]
async fn delivery_checkout_adds_fee() {
    let app = spawn_app().await;
    let cart_id = new_cart(&app).await;
    add(&app, &cart_id, "4").await;

    let body: Value = app
        .client
        .post(app.url(&format!("/api/carts/{cart_id}/checkout")))
        .json(&json!({
            "name": "Ada",
            "phone": "0803",
            "address": "12 Marina Road, Lagos"
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["data"]["delivery"], "delivery");
    assert_eq!(body["data"]["delivery_fee"], 2000.0);
    assert_eq!(body["data"]["total"], 67000.0);
    assert_eq!(body["data"]["payment_label"], "Cash on Delivery");
}

#[tokio::test]
async fn deleted_cart_is_gone() {
    let app = spawn_app().await;
    let cart_id = new_cart(&app).await;
    let url = app.url(&format!("/api/carts/{cart_id}"));

    let res = app.client.delete(&url).send().await.unwrap();
    assert_eq!(res.status(), 200);

    let res = app.client.get(&url).send().await.unwrap();
    assert_eq!(res.status(), 404);

    let res = app.client.delete(&url).send().await.unwrap();
    assert_eq!(res.status(), 404);
}

#[tokio::test]
async fn oversized_quantity_is_rejected() {
    let app = spawn_app().await;
    let cart_id = new_cart(&app).await;
    add(&app, &cart_id, "1").await;
    let item_url = app.url(&format!("/api/carts/{cart_id}/items/1"));

    let res = app
        .client
        .put(&item_url)
        .json(&json!({ "quantity": 4294967295u32 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 400);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], "quantity: Quantity cannot exceed 999");

    let res = app
        .client
        .put(&item_url)
        .json(&json!({ "quantity": 999 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);

    let res = add(&app, &cart_id, "1").await;
    assert_eq!(res.status(), 400);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], "You can add at most 999 of an item.");

    let cart: Value = app
        .client
        .get(app.url(&format!("/api/carts/{cart_id}")))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(cart["data"]["items"][0]["quantity"], 999);
}

#[tokio::test]
async fn large_quantities_keep_count_and_total_consistent() {
    let app = spawn_app().await;
    let cart_id = new_cart(&app).await;

    for product_id in ["1", "4"] {
        add(&app, &cart_id, product_id).await;
        let res = app
            .client
            .put(app.url(&format!("/api/carts/{cart_id}/items/{product_id}")))
            .json(&json!({ "quantity": 999 }))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), 200);
    }

    let res = app
        .client
        .patch(app.url(&format!("/api/carts/{cart_id}/items/4")))
        .json(&json!({ "delta": 1000 }))
        .send()
        .await
        .unwrap();
    let body: Value = res.json().await.unwrap();

    assert_eq!(body["data"]["item_count"], 1998);
    assert_eq!(body["data"]["subtotal"], 79_920_000.0);
    let subtotal = body["data"]["subtotal"].as_f64().unwrap();
    let fee = body["data"]["delivery_fee"].as_f64().unwrap();
    assert_eq!(body["data"]["total"].as_f64().unwrap(), subtotal + fee);
}
