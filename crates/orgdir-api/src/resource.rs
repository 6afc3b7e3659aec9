//! Generic CRUD projection
//!
//! One set of handlers parameterized by a store [`Collection`]; registering a
//! new aggregate is one `routes(...)` call, no per-type handler code.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use orgdir_domain::RecordId;
use orgdir_store::Collection;

use crate::{
    error::{ApiError, ApiResult},
    models::{HalCollection, HalItem},
};

/// CRUD routes for one collection. Mount under `/{SEGMENT}`.
pub fn routes<C: Collection>(collection: C) -> Router {
    Router::new()
        .route("/", get(list::<C>).post(create::<C>))
        .route(
            "/:id",
            get(get_one::<C>).put(replace::<C>).delete(remove::<C>),
        )
        .with_state(collection)
}

async fn list<C: Collection>(
    State(collection): State<C>,
) -> ApiResult<Json<HalCollection<C::Entity>>> {
    let records = collection.list().await;
    Ok(Json(HalCollection::new(C::SEGMENT, records)))
}

async fn get_one<C: Collection>(
    State(collection): State<C>,
    Path(id): Path<String>,
) -> ApiResult<Json<HalItem<C::Entity>>> {
    let id = parse_id::<C>(&id)?;
    let record = collection.get(id).await?;
    Ok(Json(HalItem::new(C::SEGMENT, record)))
}

async fn create<C: Collection>(
    State(collection): State<C>,
    Json(draft): Json<C::Draft>,
) -> ApiResult<Response> {
    let record = collection.insert(draft).await?;
    let item = HalItem::new(C::SEGMENT, record);
    let location = item.links.self_link.href.clone();
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(item),
    )
        .into_response())
}

async fn replace<C: Collection>(
    State(collection): State<C>,
    Path(id): Path<String>,
    Json(draft): Json<C::Draft>,
) -> ApiResult<Json<HalItem<C::Entity>>> {
    let id = parse_id::<C>(&id)?;
    let record = collection.replace(id, draft).await?;
    Ok(Json(HalItem::new(C::SEGMENT, record)))
}

async fn remove<C: Collection>(
    State(collection): State<C>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_id::<C>(&id)?;
    collection.remove(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// An identifier that does not parse names no existing record.
fn parse_id<C: Collection>(raw: &str) -> ApiResult<RecordId> {
    RecordId::from_string(raw).map_err(|_| ApiError::NotFound(format!("{}/{}", C::SEGMENT, raw)))
}
