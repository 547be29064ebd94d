//! Fetch a user, enrich it, and keep only admins, without a single `?`
//! reaching `main`.
//!
//! Run with `cargo run -p paw-result --example workflow`.

use paw_result::prelude::*;
use std::time::Duration;

#[derive(Debug, Clone)]
struct User {
    id: String,
    name: String,
}

#[derive(Debug)]
struct Admin {
    user: User,
    role: &'static str,
}

async fn fetch_user_data(user_id: &str) -> Result<User, Fault> {
    let user_id = user_id.to_string();
    safe_async(|| async move {
        // Simulated API call
        tokio::time::sleep(Duration::from_millis(100)).await;

        if user_id == "invalid" {
            panic!("Invalid user ID");
        }

        User {
            name: format!("User {user_id}"),
            id: user_id,
        }
    })
    .await
}

async fn process_user_workflow(user_id: &str) -> Result<Admin, Fault> {
    fetch_user_data(user_id)
        .await
        .tap(|user| tracing::info!(name = %user.name, "processing user"))
        .and_then(|user| {
            if user.name.contains("admin") {
                Ok(Admin { user, role: "admin" })
            } else {
                Err(Fault::error("User is not an admin"))
            }
        })
        .trace_err("user workflow")
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let outcomes = vec![
        process_user_workflow("admin-1").await,
        process_user_workflow("42").await,
        process_user_workflow("invalid").await,
    ];

    for outcome in &outcomes {
        let line = outcome.as_ref().match_with(
            |admin| format!("{} ({}) is {}", admin.user.name, admin.user.id, admin.role),
            |fault| format!("rejected: {fault} [{}]", fault.kind()),
        );
        println!("{line}");
    }

    let (admins, failures) = partition(outcomes);
    println!("admins: {}, failures: {}", admins.len(), failures.len());

    let checks = (
        "8080".parse::<u16>().map_err(|e| e.to_string()),
        "true".parse::<bool>().map_err(|e| e.to_string()),
    )
        .combine();
    println!("combined parse: {checks:?}");
}
