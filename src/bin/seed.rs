use argon2::{
    Argon2, PasswordHasher,
    password_hash::{rand_core::OsRng, SaltString},
};
use axum_storeops_api::{
    config::AppConfig,
    db::create_pool,
};
use uuid::Uuid;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let pool = create_pool(&config.database_url, config.max_db_connections).await?;
    // Ensure migrations are applied.
    sqlx::migrate!("./migrations").run(&pool).await?;

    let admin_id = ensure_admin(&pool, "storeadmin", "admin@example.com", "admin123").await?;
    let user_id = ensure_user(&pool, "customer", "user@example.com", "user123").await?;
    seed_deliveries(&pool).await?;
    seed_suppliers(&pool).await?;

    println!("Seed completed. Admin ID: {admin_id}, User ID: {user_id}");
    Ok(())
}

async fn ensure_admin(
    pool: &sqlx::PgPool,
    username: &str,
    email: &str,
    password: &str,
) -> anyhow::Result<Uuid> {
    ensure_user_with_role(pool, username, email, password, "admin").await
}

async fn ensure_user(
    pool: &sqlx::PgPool,
    username: &str,
    email: &str,
    password: &str,
) -> anyhow::Result<Uuid> {
    ensure_user_with_role(pool, username, email, password, "user").await
}

async fn ensure_user_with_role(
    pool: &sqlx::PgPool,
    username: &str,
    email: &str,
    password: &str,
    role: &str,
) -> anyhow::Result<Uuid> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!(e.to_string()))?
        .to_string();

    let row: Option<(Uuid,)> = sqlx::query_as(
        r#"
        INSERT INTO users (id, username, first_name, last_name, email, mobile, password_hash, role)
        VALUES ($1, $2, 'Seed', 'Account', $3, '0770000000', $4, $5)
        ON CONFLICT (email) DO UPDATE SET role = EXCLUDED.role
        RETURNING id
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(username)
    .bind(email)
    .bind(password_hash)
    .bind(role)
    .fetch_optional(pool)
    .await?;

    // If user already exists, fetch id
    let user_id = match row {
        Some((id,)) => id,
        None => {
            let existing: (Uuid,) = sqlx::query_as("SELECT id FROM users WHERE email = $1")
                .bind(email)
                .fetch_one(pool)
                .await?;
            existing.0
        }
    };

    println!("Ensured user {email} (role={role})");
    Ok(user_id)
}

async fn seed_deliveries(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    let drivers = vec![
        ("Nimal Perera", "12, Lake Road, Colombo", "0771234501", "AB1234", "bike"),
        ("Kamal Silva", "45, Hill Street, Kandy", "0771234502", "CD5678", "car"),
        ("Sunil Fernando", "8, Beach Road, Galle", "0771234503", "EF9012", "truck"),
    ];

    for (name, address, mobile, vehicle_id, category) in drivers {
        sqlx::query(
            r#"
            INSERT INTO deliveries (id, name, address, mobile, vehicle_id, category)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (name) DO NOTHING
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(address)
        .bind(mobile)
        .bind(vehicle_id)
        .bind(category)
        .execute(pool)
        .await?;
    }

    println!("Seeded deliveries");
    Ok(())
}

async fn seed_suppliers(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    let suppliers = vec![
        ("Fresh Farms", "3, Market Lane, Colombo", "0771234601", "ITM-001", "sales@freshfarms.lk", "Fresh Farms Ltd"),
        ("Green Grocers", "21, Main Street, Matara", "0771234602", "ITM-002", "orders@greengrocers.lk", "Green Grocers Pvt"),
    ];

    for (name, address, mobile, item_id, email, company) in suppliers {
        sqlx::query(
            r#"
            INSERT INTO suppliers (id, name, address, mobile, item_id, email, company)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (name) DO NOTHING
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(address)
        .bind(mobile)
        .bind(item_id)
        .bind(email)
        .bind(company)
        .execute(pool)
        .await?;
    }

    println!("Seeded suppliers");
    Ok(())
}
