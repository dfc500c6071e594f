//! Cosine-similarity ranking over stored records.

use tracing::warn;

use crate::error::{Result, SimilarityError};
use crate::traits::RecordStore;
use crate::types::{BlogRecord, QueryVector, RankedRecord};

/// Cosine similarity between two vectors.
///
/// A zero-norm vector on either side yields 0.0 by definition rather
/// than dividing by zero.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a * norm_b)
}

/// Load every stored record and rank the embedded ones against the query.
pub async fn rank<S: RecordStore>(
    store: &S,
    query: &QueryVector,
    top_n: usize,
) -> Result<Vec<RankedRecord>> {
    let records = store.load_all().await?;
    if records.is_empty() {
        warn!("no records found in store");
        return Ok(Vec::new());
    }

    let ranked = rank_records(records, query, top_n)?;
    if ranked.is_empty() {
        warn!("no records with embeddings found");
    }
    Ok(ranked)
}

/// Rank records already in memory, preserving store order on ties.
///
/// Records without an embedding are excluded, not scored as zero. A
/// record embedded with a different model (or vector length) than the
/// query fails the whole ranking: scores across models are undefined.
pub fn rank_records(
    records: Vec<BlogRecord>,
    query: &QueryVector,
    top_n: usize,
) -> std::result::Result<Vec<RankedRecord>, SimilarityError> {
    let mut ranked = Vec::new();
    for record in records {
        if !record.has_embedding() {
            continue;
        }
        if record.embedding_model != query.embedding_model {
            return Err(SimilarityError::ModelMismatch {
                query: query.embedding_model.clone(),
                record: record.embedding_model.clone(),
                url: record.url,
            });
        }
        if record.embedding.len() != query.embedding.len() {
            return Err(SimilarityError::DimensionMismatch {
                query: query.embedding.len(),
                record: record.embedding.len(),
                url: record.url,
            });
        }

        let score = cosine_similarity(&query.embedding, &record.embedding);
        ranked.push(RankedRecord { record, score });
    }

    // Stable sort: ties keep store iteration order.
    ranked.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranked.truncate(top_n);
    Ok(ranked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn record(url: &str, embedding: Vec<f32>) -> BlogRecord {
        BlogRecord {
            url: url.to_string(),
            title: "T".to_string(),
            date: "2024-01-01".to_string(),
            content: "c".to_string(),
            summary: "s".to_string(),
            embedding,
            embedding_model: "test-model".to_string(),
            processed_date: Utc::now(),
        }
    }

    fn query(embedding: Vec<f32>) -> QueryVector {
        QueryVector {
            original_text: "q".to_string(),
            normalized_text: "q".to_string(),
            embedding,
            embedding_model: "test-model".to_string(),
        }
    }

    #[test]
    fn test_cosine_self_similarity_is_one() {
        let v = vec![0.3, -1.2, 4.5, 0.01];
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_orthogonal_and_opposite() {
        let a = vec![1.0, 0.0];
        assert!(cosine_similarity(&a, &[0.0, 1.0]).abs() < 1e-6);
        assert!((cosine_similarity(&a, &[-1.0, 0.0]) + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_zero_norm_is_zero() {
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 2.0]), 0.0);
    }

    #[test]
    fn test_rank_orthogonal_pair() {
        let records = vec![
            record("https://a.example", vec![1.0, 0.0]),
            record("https://b.example", vec![0.0, 1.0]),
        ];
        let ranked = rank_records(records, &query(vec![1.0, 0.0]), 2).unwrap();

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].record.url, "https://a.example");
        assert!((ranked[0].score - 1.0).abs() < 1e-6);
        assert_eq!(ranked[1].record.url, "https://b.example");
        assert!(ranked[1].score.abs() < 1e-6);
    }

    #[test]
    fn test_rank_respects_top_n_and_excludes_unembedded() {
        let records = vec![
            record("https://a.example", vec![1.0, 0.0]),
            record("https://none.example", vec![]),
            record("https://b.example", vec![0.5, 0.5]),
            record("https://c.example", vec![0.0, 1.0]),
        ];

        let ranked = rank_records(records.clone(), &query(vec![1.0, 0.0]), 2).unwrap();
        assert_eq!(ranked.len(), 2);

        // Fewer qualifying records than requested returns all of them.
        let ranked = rank_records(records, &query(vec![1.0, 0.0]), 10).unwrap();
        assert_eq!(ranked.len(), 3);
        assert!(ranked.iter().all(|r| r.record.url != "https://none.example"));
    }

    #[test]
    fn test_rank_top_n_zero() {
        let records = vec![record("https://a.example", vec![1.0])];
        assert!(rank_records(records, &query(vec![1.0]), 0)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_rank_is_sorted_descending_and_stable_on_ties() {
        let records = vec![
            record("https://low.example", vec![0.1, 0.9]),
            record("https://tie-one.example", vec![2.0, 0.0]),
            record("https://tie-two.example", vec![5.0, 0.0]),
        ];
        let ranked = rank_records(records, &query(vec![1.0, 0.0]), 3).unwrap();

        let scores: Vec<f32> = ranked.iter().map(|r| r.score).collect();
        assert!(scores.windows(2).all(|pair| pair[0] >= pair[1]));
        // Both tie records score 1.0; store order decides.
        assert_eq!(ranked[0].record.url, "https://tie-one.example");
        assert_eq!(ranked[1].record.url, "https://tie-two.example");
    }

    #[test]
    fn test_model_mismatch_fails_fast() {
        let mut other = record("https://a.example", vec![1.0, 0.0]);
        other.embedding_model = "other-model".to_string();

        let err = rank_records(vec![other], &query(vec![1.0, 0.0]), 5).unwrap_err();
        assert!(matches!(err, SimilarityError::ModelMismatch { .. }));
    }

    #[test]
    fn test_dimension_mismatch_fails_fast() {
        let records = vec![record("https://a.example", vec![1.0, 0.0, 0.0])];
        let err = rank_records(records, &query(vec![1.0, 0.0]), 5).unwrap_err();
        assert!(matches!(err, SimilarityError::DimensionMismatch { .. }));
    }

    #[test]
    fn test_degraded_zero_vector_sinks_to_bottom() {
        let records = vec![
            record("https://degraded.example", vec![0.0, 0.0]),
            record("https://good.example", vec![1.0, 0.0]),
        ];
        let ranked = rank_records(records, &query(vec![1.0, 0.0]), 2).unwrap();
        assert_eq!(ranked[0].record.url, "https://good.example");
        assert_eq!(ranked[1].score, 0.0);
    }
}
