use numscope_analyze::{
    AnalysisKind, AnalysisPipeline, AnalysisReport, Analyzer, Dataset, DuplicateValue,
    DuplicatesAnalyzer, MissingAnalyzer, PipelineConfig, SearchAnalyzer, SearchConfig,
    StatisticsAnalyzer,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn rng() -> StdRng {
    StdRng::seed_from_u64(2024)
}

#[test]
fn test_duplicates_reports_value_counts() {
    let dataset = Dataset::new(vec![1, 2, 2, 3, 3, 3]);
    let report = DuplicatesAnalyzer::new(&dataset).find_duplicates();

    assert_eq!(
        report.duplicates,
        vec![
            DuplicateValue { value: 2, count: 2 },
            DuplicateValue { value: 3, count: 3 },
        ]
    );
    assert_eq!(report.extra_occurrences(), 3);

    let none = DuplicatesAnalyzer::new(&Dataset::new(vec![1, 2, 3])).find_duplicates();
    assert!(!none.has_duplicates());
    assert!(none.to_string().ends_with("none"));
}

#[test]
fn test_missing_reports_gaps() {
    let report = MissingAnalyzer::new(&Dataset::new(vec![1, 3, 6])).find_missing();
    assert_eq!(report.values().collect::<Vec<_>>(), vec![2, 4, 5]);
    assert_eq!(report.total_missing, 3);

    let single = MissingAnalyzer::new(&Dataset::new(vec![5])).find_missing();
    assert_eq!(single.total_missing, 0);
    assert!(single.to_string().ends_with("none"));
}

#[test]
fn test_search_full_coverage_and_empty() {
    let full: Dataset = (0..1000).collect();
    let report = SearchAnalyzer::new(&full, rng()).probe();
    assert_eq!(report.found, 100);

    let empty = SearchAnalyzer::new(&Dataset::default(), rng()).probe();
    assert_eq!(empty.found, 0);
}

#[test]
fn test_search_custom_probe_range() {
    let dataset = Dataset::new(vec![5]);
    let config = SearchConfig::builder()
        .probes(25usize)
        .probe_min(5)
        .probe_max(5)
        .build()
        .unwrap();
    let report = SearchAnalyzer::with_config(&dataset, rng(), config).probe();

    assert_eq!(report.probes, 25);
    assert_eq!(report.found, 25);
}

#[test]
fn test_statistics_examples() {
    let s = StatisticsAnalyzer::new(&Dataset::new(vec![1, 2, 2, 3]))
        .summarize()
        .summary
        .unwrap();
    assert_eq!((s.min, s.max, s.mode, s.mode_count), (1, 3, 2, 2));
    assert_eq!(s.mean, 2.0);
    assert_eq!(s.median, 2.0);

    let s = StatisticsAnalyzer::new(&Dataset::new(vec![4]))
        .summarize()
        .summary
        .unwrap();
    assert_eq!((s.min, s.max, s.mode, s.mode_count), (4, 4, 4, 1));
    assert_eq!((s.mean, s.median), (4.0, 4.0));

    let s = StatisticsAnalyzer::new(&Dataset::new(vec![1, 1, 2, 2]))
        .summarize()
        .summary
        .unwrap();
    assert_eq!(s.mode, 1);
}

#[test]
fn test_analyzers_do_not_share_data() {
    let original = Dataset::new(vec![9, 3, 7, 1]);

    let mut stats = StatisticsAnalyzer::new(&original);
    let missing = MissingAnalyzer::new(&original);
    let duplicates = DuplicatesAnalyzer::new(&original);

    stats.summarize();

    assert_eq!(stats.values(), &[1, 3, 7, 9]);
    assert_eq!(missing.values(), &[9, 3, 7, 1]);
    assert_eq!(duplicates.values(), &[9, 3, 7, 1]);
    assert_eq!(original.as_slice(), &[9, 3, 7, 1]);
}

#[test]
fn test_search_sorts_at_construction_only_its_copy() {
    let original = Dataset::new(vec![4, 2, 8]);
    let search = SearchAnalyzer::new(&original, rng());
    let missing = MissingAnalyzer::new(&original);

    assert_eq!(search.values(), &[2, 4, 8]);
    assert_eq!(missing.values(), &[4, 2, 8]);
}

#[test]
fn test_analyze_is_repeatable() {
    let dataset = Dataset::new(vec![5, 1, 5, 3]);
    let mut analyzer = MissingAnalyzer::new(&dataset);
    let first = analyzer.analyze();
    let second = analyzer.analyze();
    assert_eq!(first, second);
}

#[test]
fn test_pipeline_text_output() {
    let dataset = Dataset::new(vec![1, 2, 2, 3]);
    let reports = AnalysisPipeline::standard(&dataset, rng()).run();
    let text: Vec<String> = reports.iter().map(ToString::to_string).collect();

    assert_eq!(text[0], "Duplicates (value:count): 2:2");
    assert_eq!(text[1], "Missing values between 1 and 3: none");
    assert!(text[2].starts_with("Search found "));
    assert!(text[2].ends_with(" values (out of 100)"));
    assert_eq!(text[3], "Min=1, Max=3, Mean=2, Median=2, Mode=2 (count=2)");
}

#[test]
fn test_pipeline_on_empty_dataset() {
    let reports = AnalysisPipeline::standard(&Dataset::default(), rng()).run();
    let text: Vec<String> = reports.iter().map(ToString::to_string).collect();

    assert_eq!(
        text,
        vec![
            "Duplicates: none".to_string(),
            "Missing: none".to_string(),
            "Search found 0 values (out of 100)".to_string(),
            "No data".to_string(),
        ]
    );
}

#[test]
fn test_pipeline_subset() {
    let config = PipelineConfig::builder()
        .kinds(vec![AnalysisKind::Missing])
        .build()
        .unwrap();
    let mut pipeline = AnalysisPipeline::from_config(&Dataset::new(vec![1, 4]), rng(), &config);

    assert_eq!(pipeline.len(), 1);
    let reports = pipeline.run();
    match &reports[0] {
        AnalysisReport::Missing(report) => assert_eq!(report.total_missing, 2),
        other => panic!("unexpected report: {other:?}"),
    }
}

#[test]
fn test_report_json_is_tagged() {
    let dataset = Dataset::new(vec![2, 2]);
    let report = DuplicatesAnalyzer::new(&dataset).analyze();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["kind"], "duplicates");
    assert_eq!(json["values_analyzed"], 2);
    assert_eq!(json["duplicates"][0]["value"], 2);
    assert_eq!(json["duplicates"][0]["count"], 2);

    let back: AnalysisReport = serde_json::from_value(json).unwrap();
    assert_eq!(back.kind(), AnalysisKind::Duplicates);
}
