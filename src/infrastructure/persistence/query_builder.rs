use crate::domain::value_objects::AssetKind;

/// SQL fragments shared by the asset repository.
///
/// Table names come from [`AssetKind::collection`], never from request input;
/// every value is bound as a parameter.
pub struct QueryBuilder;

impl QueryBuilder {
    pub fn asset_insert(kind: AssetKind) -> String {
        format!(
            "INSERT INTO {} (id, filename, content) VALUES ($1, $2, $3)",
            kind.collection()
        )
    }

    pub fn asset_select_by_id(kind: AssetKind) -> String {
        format!(
            "SELECT id, filename, content FROM {} WHERE id = $1",
            kind.collection()
        )
    }

    pub fn asset_replace(kind: AssetKind) -> String {
        format!(
            "UPDATE {} SET filename = $2, content = $3 WHERE id = $1",
            kind.collection()
        )
    }

    pub fn asset_delete(kind: AssetKind) -> String {
        format!("DELETE FROM {} WHERE id = $1", kind.collection())
    }
}
