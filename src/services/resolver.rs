use crate::errors::CaptureError;
use crate::models::{EntityClass, ResolvedEntity};
use crate::services::backend::BackendClient;

/// Resolves a free-text name to a backend entity of the given class.
///
/// When the search returns several candidates the first one in the
/// backend's order wins — there is no scoring or confirmation step, so two
/// relationships sharing a first name silently act on whichever the
/// backend lists first. Known limitation, kept deliberately.
pub async fn resolve_entity(
    backend: &dyn BackendClient,
    class: EntityClass,
    name: &str,
) -> Result<ResolvedEntity, CaptureError> {
    let found = match class {
        EntityClass::Relationship => backend
            .search_relationships(name)
            .await?
            .into_iter()
            .next()
            .map(|r| ResolvedEntity {
                id: r.id,
                name: r.name,
            }),
        EntityClass::Helper => backend
            .search_helpers(name)
            .await?
            .into_iter()
            .next()
            .map(|h| ResolvedEntity {
                id: h.id,
                name: h.name,
            }),
    };

    found.ok_or_else(|| CaptureError::EntityNotFound {
        class,
        name: name.to_string(),
    })
}
