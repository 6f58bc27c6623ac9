use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tienda_probe=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let Ok(database_url) = std::env::var("DATABASE_URL") else {
        tracing::error!("DATABASE_URL must be set");
        return ExitCode::FAILURE;
    };

    match tienda_probe::check_url(&database_url).await {
        Ok(juegos) => {
            tracing::info!(count = juegos.len(), "Connection succeeded");
            for juego in &juegos {
                tracing::info!(
                    juego_id = juego.juego_id,
                    nombre = %juego.nombre,
                    precio = juego.precio,
                    stock = juego.stock,
                    "juego"
                );
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Connection failed");
            ExitCode::FAILURE
        }
    }
}
