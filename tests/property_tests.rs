use dupline::cli::SortOrder;
use dupline::duplicates::group_duplicates;
use dupline::scanner::{collect_files, LineIndex, ScanConfig};
use proptest::prelude::*;
use std::collections::HashMap;
use std::fs;
use std::io::Cursor;
use std::path::Path;
use tempfile::TempDir;

fn files_strategy() -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(prop::collection::vec("[ab ]{0,2}", 0..12), 0..5)
}

fn build_index(files: &[Vec<String>]) -> LineIndex {
    let mut index = LineIndex::new();
    for (i, lines) in files.iter().enumerate() {
        let content: String = lines.iter().map(|l| format!("{l}\n")).collect();
        index
            .index_reader(Path::new(&format!("f{i}")), Cursor::new(content.into_bytes()))
            .unwrap();
    }
    index
}

proptest! {
    #[test]
    fn test_total_lines_is_sum_of_lines(files in files_strategy()) {
        let index = build_index(&files);
        let expected: usize = files.iter().map(Vec::len).sum();

        prop_assert_eq!(index.total_lines(), expected as u64);
    }

    #[test]
    fn test_groups_match_occurrence_counts(files in files_strategy()) {
        let index = build_index(&files);
        let (groups, stats) = group_duplicates(&index, SortOrder::FirstSeen);

        let mut counts: HashMap<&str, usize> = HashMap::new();
        for lines in &files {
            for line in lines {
                *counts.entry(line.as_str()).or_default() += 1;
            }
        }

        let expected_groups = counts.values().filter(|&&n| n >= 2).count();
        let expected_lines: usize = counts.values().filter(|&&n| n >= 2).sum();
        prop_assert_eq!(stats.duplicate_groups, expected_groups as u64);
        prop_assert_eq!(stats.duplicate_lines, expected_lines as u64);
        prop_assert_eq!(groups.len(), expected_groups);

        for group in &groups {
            let content = String::from_utf8(group.content.clone()).unwrap();
            // Invariant: each group lists every occurrence, and only duplicates are listed
            prop_assert_eq!(group.len(), counts[content.as_str()]);
            prop_assert!(group.len() >= 2);
        }
    }

    #[test]
    fn test_first_seen_order_is_sorted(files in files_strategy()) {
        let index = build_index(&files);
        let (groups, _) = group_duplicates(&index, SortOrder::FirstSeen);

        let firsts: Vec<(String, u64)> = groups
            .iter()
            .map(|g| (g.locations[0].path.to_string_lossy().into_owned(), g.locations[0].line))
            .collect();
        let mut sorted = firsts.clone();
        sorted.sort_by_key(|(path, line)| (path[1..].parse::<usize>().unwrap(), *line));
        prop_assert_eq!(firsts, sorted);
    }

    #[test]
    fn test_extension_filter_dot_idempotent(ext in "[a-z]{1,3}") {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(format!("match.{ext}")), "x\n").unwrap();
        fs::write(dir.path().join("other.zzzz"), "x\n").unwrap();

        let dirs = vec![dir.path().to_path_buf()];
        let bare = collect_files(&ScanConfig::new(dirs.clone(), Vec::new(), vec![ext.clone()])).unwrap();
        let dotted = collect_files(&ScanConfig::new(dirs, Vec::new(), vec![format!(".{ext}")])).unwrap();

        prop_assert_eq!(bare.len(), 1);
        prop_assert_eq!(bare, dotted);
    }
}
