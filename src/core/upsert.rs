use crate::domain::model::{
    CreatePayload, DeployableItem, RemoteEntity, UpdatePayload, UpsertOutcome, DRAFT_STATUS,
};
use crate::domain::ports::WordPressApi;
use crate::utils::error::{DeployError, Result};
use reqwest::Method;
use serde_json::Value;
use url::form_urlencoded::byte_serialize;

pub const API_PREFIX: &str = "/wp-json/wp/v2";

pub fn collection_endpoint(collection: &str) -> String {
    format!("{}/{}", API_PREFIX, collection)
}

pub fn lookup_endpoint(collection: &str, slug: &str) -> String {
    let encoded: String = byte_serialize(slug.as_bytes()).collect();
    format!("{}?slug={}", collection_endpoint(collection), encoded)
}

pub fn entity_endpoint(collection: &str, id: u64) -> String {
    format!("{}/{}", collection_endpoint(collection), id)
}

/// Finds the remote entity by slug and updates it, or creates a new draft.
pub async fn upsert<A>(api: &A, item: &DeployableItem) -> Result<UpsertOutcome>
where
    A: WordPressApi + ?Sized,
{
    // An empty slug lookup matches every entity of the collection.
    if item.slug.trim().is_empty() {
        return Err(DeployError::InvalidItemError {
            message: format!("{} \"{}\" has an empty slug", item.kind, item.title),
        });
    }

    let collection = item.kind.collection();

    let existing = api
        .request(&lookup_endpoint(collection, &item.slug), Method::GET, None)
        .await?;

    match first_match(&existing)? {
        Some(id) => {
            let payload = serde_json::to_value(UpdatePayload {
                title: &item.title,
                content: &item.content,
                status: DRAFT_STATUS,
            })?;
            api.request(&entity_endpoint(collection, id), Method::PUT, Some(&payload))
                .await?;
            tracing::info!("✅ Updated {}: {} (ID: {})", item.kind, item.title, id);
            Ok(UpsertOutcome {
                id,
                was_created: false,
            })
        }
        None => {
            let payload = serde_json::to_value(CreatePayload {
                title: &item.title,
                content: &item.content,
                slug: &item.slug,
                status: DRAFT_STATUS,
            })?;
            let created = api
                .request(&collection_endpoint(collection), Method::POST, Some(&payload))
                .await?;
            let id = entity_id(&created)?;
            tracing::info!("✅ Created new {}: {} (ID: {})", item.kind, item.title, id);
            Ok(UpsertOutcome {
                id,
                was_created: true,
            })
        }
    }
}

/// Id of the first entity in a slug lookup; later matches are ignored.
fn first_match(response: &Value) -> Result<Option<u64>> {
    let entities = response
        .as_array()
        .ok_or_else(|| DeployError::UnexpectedResponseError {
            message: "slug lookup did not return a list".to_string(),
        })?;

    match entities.first() {
        Some(entity) => entity_id(entity).map(Some),
        None => Ok(None),
    }
}

fn entity_id(entity: &Value) -> Result<u64> {
    serde_json::from_value::<RemoteEntity>(entity.clone())
        .map(|remote| remote.id)
        .map_err(|e| DeployError::UnexpectedResponseError {
            message: format!("entity without a numeric id: {}", e),
        })
}
