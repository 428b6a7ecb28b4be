use axum_storeops_api::{
    db::{create_orm_conn, create_pool, run_migrations},
    dto::{deliveries::SaveDeliveryRequest, suppliers::SaveSupplierRequest},
    entity::users::ActiveModel as UserActive,
    error::AppError,
    middleware::auth::AuthUser,
    services::{delivery_service, supplier_service},
    state::AppState,
};
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ConnectionTrait, Set, Statement};
use uuid::Uuid;

// Admin CRUD over drivers and suppliers, including the stored uniqueness
// rule the client pre-check cannot guarantee on its own.
#[tokio::test]
async fn delivery_and_supplier_crud_flow() -> anyhow::Result<()> {
    let database_url = match std::env::var("TEST_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
    {
        Ok(url) => url,
        Err(_) => {
            eprintln!(
                "Skipping test: set TEST_DATABASE_URL or DATABASE_URL to run integration flow tests."
            );
            return Ok(());
        }
    };

    let state = setup_state(&database_url).await?;
    let admin_id = create_admin(&state).await?;
    let auth_admin = AuthUser {
        user_id: admin_id,
        role: "admin".into(),
    };

    // Create a driver.
    let created = delivery_service::create_delivery(
        &state,
        &auth_admin,
        delivery_request("Nimal Perera", "AB1234"),
    )
    .await?;
    let driver = created.data.expect("created driver");
    assert_eq!(driver.order_status, "pending");

    // A second driver with the same name, even differently cased, is
    // rejected by the store.
    let duplicate = delivery_service::create_delivery(
        &state,
        &auth_admin,
        delivery_request("nimal perera", "CD5678"),
    )
    .await;
    assert!(matches!(duplicate, Err(AppError::BadRequest(_))));

    // Field rules hold server-side as well.
    let bad_vehicle = delivery_service::create_delivery(
        &state,
        &auth_admin,
        delivery_request("Kamal Silva", "A123"),
    )
    .await;
    assert!(matches!(bad_vehicle, Err(AppError::Validation(_))));

    // Updating keeps the driver's own name available to itself.
    let mut update = delivery_request("Nimal Perera", "AB1234");
    update.order_status = "in-progress".into();
    update.assigned_orders = vec![Uuid::new_v4()];
    let updated = delivery_service::update_delivery(&state, &auth_admin, driver.id, update).await?;
    let updated = updated.data.expect("updated driver");
    assert_eq!(updated.order_status, "in-progress");
    assert_eq!(updated.assigned_orders.len(), 1);

    // Delete, then confirm the listing is empty and a re-delete is 404.
    delivery_service::delete_delivery(&state, &auth_admin, driver.id).await?;
    let listed = delivery_service::list_deliveries(&state, &auth_admin).await?;
    assert!(listed.data.expect("deliveries").items.is_empty());
    let missing = delivery_service::delete_delivery(&state, &auth_admin, driver.id).await;
    assert!(matches!(missing, Err(AppError::NotFound)));

    // Same contract for suppliers.
    let created = supplier_service::create_supplier(
        &state,
        &auth_admin,
        supplier_request("Fresh Farms"),
    )
    .await?;
    let supplier = created.data.expect("created supplier");

    let duplicate = supplier_service::create_supplier(
        &state,
        &auth_admin,
        supplier_request("FRESH FARMS"),
    )
    .await;
    assert!(matches!(duplicate, Err(AppError::BadRequest(_))));

    let mut update = supplier_request("Fresh Farms");
    update.company = "Fresh Farms Holdings".into();
    let updated = supplier_service::update_supplier(&state, &auth_admin, supplier.id, update).await?;
    assert_eq!(
        updated.data.expect("updated supplier").company,
        "Fresh Farms Holdings"
    );

    supplier_service::delete_supplier(&state, &auth_admin, supplier.id).await?;
    let listed = supplier_service::list_suppliers(&state, &auth_admin).await?;
    assert!(listed.data.expect("suppliers").items.is_empty());

    Ok(())
}

fn delivery_request(name: &str, vehicle_id: &str) -> SaveDeliveryRequest {
    SaveDeliveryRequest {
        name: name.into(),
        address: "12, Lake Road, Colombo".into(),
        mobile: "0771234501".into(),
        vehicle_id: vehicle_id.into(),
        category: "bike".into(),
        order_status: "pending".into(),
        assigned_orders: vec![],
    }
}

fn supplier_request(name: &str) -> SaveSupplierRequest {
    SaveSupplierRequest {
        name: name.into(),
        address: "3, Market Lane, Colombo".into(),
        mobile: "0771234601".into(),
        item_id: "ITM-001".into(),
        email: "sales@freshfarms.lk".into(),
        company: "Fresh Farms Ltd".into(),
    }
}

async fn setup_state(database_url: &str) -> anyhow::Result<AppState> {
    let pool = create_pool(database_url, 5).await?;
    let orm = create_orm_conn(database_url).await?;
    run_migrations(&orm).await?;

    let backend = orm.get_database_backend();
    orm.execute(Statement::from_string(
        backend,
        "TRUNCATE TABLE orders, feedback, deliveries, suppliers, audit_logs, users RESTART IDENTITY CASCADE",
    ))
    .await?;

    Ok(AppState { pool, orm })
}

async fn create_admin(state: &AppState) -> anyhow::Result<Uuid> {
    let user = UserActive {
        id: Set(Uuid::new_v4()),
        username: Set("manager".into()),
        first_name: Set("Test".into()),
        last_name: Set("Account".into()),
        email: Set("admin@example.com".into()),
        mobile: Set("0770000000".into()),
        password_hash: Set("dummy".into()),
        role: Set("admin".into()),
        created_at: NotSet,
    }
    .insert(&state.orm)
    .await?;

    Ok(user.id)
}
