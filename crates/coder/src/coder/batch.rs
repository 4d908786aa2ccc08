//! Parallel code construction for many independent texts.

use super::{build_table, CoderConfig};
use huffcode_core::{CodeTable, HuffmanBuilder};
use log::debug;
use rayon::prelude::*;

/// Build one code table per text in parallel.
///
/// Each text is coded on its own; the result at index `i` belongs to
/// `texts[i]` and is `None` for an empty text.
pub fn code_batch<T>(texts: &[T], config: &CoderConfig) -> Vec<Option<CodeTable>>
where
    T: AsRef<str> + Sync,
{
    let builder = HuffmanBuilder::new(config.merge_strategy);
    debug!(
        "coding batch of {} texts with {} merging",
        texts.len(),
        config.merge_strategy
    );

    texts
        .par_iter()
        .map(|text| build_table(text.as_ref(), &builder))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use huffcode_core::MergeStrategy;

    #[test]
    fn test_batch_matches_sequential() {
        let texts = vec![
            "aaab".to_string(),
            String::new(),
            "abracadabra".to_string(),
            "zzzz".to_string(),
        ];
        let config = CoderConfig::default();

        let tables = code_batch(&texts, &config);
        assert_eq!(tables.len(), 4);

        let builder = HuffmanBuilder::new(config.merge_strategy);
        for (text, table) in texts.iter().zip(&tables) {
            assert_eq!(table, &build_table(text, &builder));
        }
        assert!(tables[1].is_none());
        assert_eq!(tables[3].as_ref().map(|t| t.is_degenerate()), Some(true));
    }

    #[test]
    fn test_batch_with_str_slices() {
        let config = CoderConfig {
            merge_strategy: MergeStrategy::SortedReduction,
            ..Default::default()
        };
        let tables = code_batch(&["ab", "aab"], &config);

        assert_eq!(tables[0].as_ref().and_then(|t| t.code_of('b')), Some("1"));
        assert_eq!(tables[1].as_ref().and_then(|t| t.code_of('a')), Some("0"));
    }
}
