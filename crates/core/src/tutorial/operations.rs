use super::error::TutorialError;
use super::keys;
use super::types::{EntityKey, Tutorial, TutorialEntity};

/// Parses a tutorial id taken from a request path.
///
/// Only the canonical decimal form is accepted, so `01` or `+1` never alias
/// the row key `1`.
pub fn parse_id(id: &str) -> Result<i64, TutorialError> {
    match id.parse::<i64>() {
        Ok(parsed) if keys::id_row_key(parsed) == id => Ok(parsed),
        _ => Err(TutorialError::InvalidId(id.to_string())),
    }
}

/// Computes the next tutorial id from the row keys present in the partition.
///
/// Takes the numeric maximum of the integer row keys plus one, or 1 when there
/// are none. Ids of deleted tutorials below the maximum are never reused.
/// Fails when the maximum is `i64::MAX`, which a numeric title can produce.
pub fn next_id<'a>(row_keys: impl IntoIterator<Item = &'a str>) -> Result<i64, TutorialError> {
    match row_keys
        .into_iter()
        .filter_map(|row_key| row_key.parse::<i64>().ok())
        .max()
    {
        None => Ok(1),
        Some(max) => max
            .checked_add(1)
            .ok_or(TutorialError::IdsExhausted(max)),
    }
}

/// Keeps only the id-keyed rows, dropping the title-keyed duplicates.
pub fn id_rows(entities: Vec<TutorialEntity>) -> Vec<TutorialEntity> {
    entities
        .into_iter()
        .filter(|entity| keys::is_id_row_key(&entity.row_key))
        .collect()
}

/// Converts stored rows into the public tutorial shape.
pub fn into_tutorials(entities: Vec<TutorialEntity>) -> Vec<Tutorial> {
    entities
        .into_iter()
        .map(TutorialEntity::into_tutorial)
        .collect()
}

/// Splits row keys into delete batches of at most `max` keys each.
pub fn delete_batches(keys: &[EntityKey], max: usize) -> Vec<&[EntityKey]> {
    keys.chunks(max.max(1)).collect()
}

/// Merges an incoming row into an existing one with insert-or-merge semantics.
///
/// Fields that are null on the incoming row (only `description` can be) keep
/// the existing value.
pub fn merge_entity(existing: &TutorialEntity, incoming: &TutorialEntity) -> TutorialEntity {
    let mut merged = incoming.clone();
    if merged.tutorial.description.is_none() {
        merged.tutorial.description = existing.tutorial.description.clone();
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("1"), Ok(1));
        assert_eq!(parse_id("250"), Ok(250));
        assert_eq!(
            parse_id("abc"),
            Err(TutorialError::InvalidId("abc".to_string()))
        );
        assert_eq!(parse_id(""), Err(TutorialError::InvalidId(String::new())));
    }

    #[test]
    fn test_parse_id_rejects_non_canonical_forms() {
        for id in ["01", "+1", " 1", "1 ", "-0"] {
            assert_eq!(
                parse_id(id),
                Err(TutorialError::InvalidId(id.to_string())),
                "{id:?}"
            );
        }
        assert_eq!(parse_id("-3"), Ok(-3));
        assert_eq!(parse_id("0"), Ok(0));
    }

    #[test]
    fn test_next_id_empty_partition() {
        assert_eq!(next_id(Vec::<&str>::new()), Ok(1));
    }

    #[test]
    fn test_next_id_ignores_title_rows() {
        assert_eq!(next_id(["Intro", "Advanced"]), Ok(1));
        assert_eq!(next_id(["1", "Intro", "2", "Advanced"]), Ok(3));
    }

    #[test]
    fn test_next_id_uses_numeric_max() {
        // "9" sorts after "10" as a string
        assert_eq!(next_id(["9", "10", "2"]), Ok(11));
    }

    #[test]
    fn test_next_id_does_not_reuse_gaps() {
        assert_eq!(next_id(["1", "3"]), Ok(4));
    }

    #[test]
    fn test_next_id_at_max_is_exhausted() {
        assert_eq!(
            next_id(["1", "9223372036854775807"]),
            Err(TutorialError::IdsExhausted(i64::MAX))
        );
        assert_eq!(next_id(["9223372036854775806"]), Ok(i64::MAX));
    }

    #[test]
    fn test_id_rows_filters_title_rows() {
        let tutorial = Tutorial::new(1, "A");
        let rows = vec![
            TutorialEntity::id_row(tutorial.clone()),
            TutorialEntity::title_row(tutorial),
        ];

        let filtered = id_rows(rows);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].row_key, "1");
    }

    #[test]
    fn test_id_rows_only_titles_is_empty() {
        let rows = vec![
            TutorialEntity::title_row(Tutorial::new(1, "A")),
            TutorialEntity::title_row(Tutorial::new(2, "B")),
        ];

        assert!(id_rows(rows).is_empty());
    }

    #[test]
    fn test_delete_batches_sizes() {
        let keys: Vec<EntityKey> = (1..=250).map(EntityKey::id_row).collect();

        let sizes: Vec<usize> = delete_batches(&keys, 100).iter().map(|b| b.len()).collect();

        assert_eq!(sizes, vec![100, 100, 50]);
    }

    #[test]
    fn test_delete_batches_empty() {
        assert!(delete_batches(&[], 100).is_empty());
    }

    #[test]
    fn test_merge_entity_keeps_existing_description() {
        let existing = TutorialEntity::id_row(Tutorial::new(1, "A").with_description("Old"));
        let incoming = TutorialEntity::id_row(Tutorial::new(1, "B").with_published(true));

        let merged = merge_entity(&existing, &incoming);

        assert_eq!(merged.tutorial.title, "B");
        assert_eq!(merged.tutorial.description.as_deref(), Some("Old"));
        assert!(merged.tutorial.published);
    }

    #[test]
    fn test_merge_entity_overwrites_description() {
        let existing = TutorialEntity::id_row(Tutorial::new(1, "A").with_description("Old"));
        let incoming = TutorialEntity::id_row(Tutorial::new(1, "A").with_description("New"));

        let merged = merge_entity(&existing, &incoming);

        assert_eq!(merged.tutorial.description.as_deref(), Some("New"));
    }
}
