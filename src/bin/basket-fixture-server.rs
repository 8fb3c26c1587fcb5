//! In-memory basket-item server honouring the API contract the checker
//! verifies. Development and test use only.

use std::collections::{BTreeMap, HashSet};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::{Context, Result};
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use basket_check::report::now_ts;
use tokio::sync::RwLock;

#[path = "basket_fixture_server/types.rs"]
mod types;
use self::types::*;
#[path = "basket_fixture_server/http_error.rs"]
mod http_error;
use self::http_error::*;
#[path = "basket_fixture_server/rules.rs"]
mod rules;
use self::rules::*;
#[path = "basket_fixture_server/identity.rs"]
mod identity;
use self::identity::*;
#[path = "basket_fixture_server/handlers_items.rs"]
mod handlers_items;
use self::handlers_items::*;
#[path = "basket_fixture_server/routes.rs"]
mod routes;
use self::routes::*;
#[path = "basket_fixture_server/runtime.rs"]
mod runtime;

#[tokio::main]
async fn main() {
    if let Err(err) = runtime::run().await {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}
