use actix_web::{get, web, App, HttpRequest, HttpServer, Responder};
use planhub::configuration::{get_configuration, DatabaseSettings, Settings};
use planhub::forms;
use sqlx::{Connection, Executor, PgConnection, PgPool};
use std::net::TcpListener;

pub struct TestApp {
    pub address: String,
    pub db_pool: PgPool,
}

impl TestApp {
    /// Insert an account row the admin gate can resolve. Accounts are
    /// provisioned externally in production, tests seed them directly.
    pub async fn seed_user(&self, user_id: &str, is_admin: bool) {
        sqlx::query(
            r#"
            INSERT INTO users (id, email, first_name, last_name, is_admin)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(user_id)
        .bind(format!("{}@example.com", user_id))
        .bind("Test")
        .bind("User")
        .bind(is_admin)
        .execute(&self.db_pool)
        .await
        .expect("Failed to seed user");
    }
}

pub async fn spawn_app_with_configuration(mut configuration: Settings) -> TestApp {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");

    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);
    configuration.database.database_name = uuid::Uuid::new_v4().to_string();

    let connection_pool = configure_database(&configuration.database).await;

    let server = planhub::startup::run(listener, connection_pool.clone(), configuration)
        .await
        .expect("Failed to bind address.");

    let _ = tokio::spawn(server);
    println!("Used Port: {}", port);

    TestApp {
        address,
        db_pool: connection_pool,
    }
}

pub async fn spawn_app() -> TestApp {
    let mut configuration = get_configuration().expect("Failed to get configuration");

    let listener = std::net::TcpListener::bind("127.0.0.1:0")
        .expect("Failed to bind port for the account service mock");

    configuration.auth_url = format!(
        "http://127.0.0.1:{}/me",
        listener.local_addr().unwrap().port()
    );
    println!(
        "Account service mock is running on: {}",
        configuration.auth_url
    );

    let _ = tokio::spawn(mock_account_server(listener));
    // Give the mock server a brief moment to start listening
    tokio::time::sleep(std::time::Duration::from_millis(200)).await;

    spawn_app_with_configuration(configuration).await
}

pub async fn configure_database(config: &DatabaseSettings) -> PgPool {
    let mut connection = PgConnection::connect(&config.connection_string_without_db())
        .await
        .expect("Failed to connect to postgres");

    connection
        .execute(format!(r#"CREATE DATABASE "{}""#, config.database_name).as_str())
        .await
        .expect("Failed to create database");

    let connection_pool = PgPool::connect(&config.connection_string())
        .await
        .expect("Failed to connect to database pool");

    sqlx::migrate!("./migrations")
        .run(&connection_pool)
        .await
        .expect("Failed to migrate database");

    connection_pool
}

// The bearer token doubles as the account id, so every test picks its
// caller by choosing a token.
#[get("")]
async fn mock_account(req: HttpRequest) -> actix_web::Result<impl Responder> {
    let account_id = req
        .headers()
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .unwrap_or("anonymous")
        .to_string();

    let mut account = forms::user::Account::default();
    account.id = account_id.clone();
    account.email = format!("{}@example.com", account_id);
    account.first_name = "Test".to_string();
    account.last_name = "Caller".to_string();
    account.email_confirmed = true;

    Ok(web::Json(forms::UserForm { user: account }))
}

fn mock_account_server(listener: TcpListener) -> actix_web::dev::Server {
    HttpServer::new(|| App::new().service(web::scope("/me").service(mock_account)))
        .listen(listener)
        .expect("Failed to listen on the account service mock port")
        .run()
}
