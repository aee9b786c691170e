use anyhow::Result;
use headerguard::checker::{Checker, CheckerConfig};
use headerguard::exclusions::ExclusionSet;
use headerguard::logging::{LogConfig, LogLevel, Logger, MemorySink};
use headerguard::verifier::{HeaderSpec, Rejection, VerifierOptions};
use std::sync::Arc;

mod common;
use common::{HEADER, Project, SUITABLE_SOURCE, UNSUITABLE_SOURCE};

fn checker(pattern: &str, verbose: bool) -> (Checker, Arc<MemorySink>) {
  let (logger, sink) = Logger::capture(LogConfig { verbose });
  let checker = Checker::new(CheckerConfig {
    logger,
    ..CheckerConfig::new(pattern)
  })
  .expect("valid pattern");
  (checker, sink)
}

#[test]
fn test_all_files_suitable() -> Result<()> {
  let project = Project::new()?;
  project.source("main.swift", SUITABLE_SOURCE)?;
  project.source("Views/Home.swift", SUITABLE_SOURCE)?;

  let (checker, _) = checker("swift", false);
  assert!(checker.check(&project.sources(), HEADER, 0, ""));
  Ok(())
}

#[test]
fn test_one_file_without_opening_comment_fails_the_run() -> Result<()> {
  let project = Project::new()?;
  project.source("a.swift", SUITABLE_SOURCE)?;
  project.source("b.swift", UNSUITABLE_SOURCE)?;

  let (checker, sink) = checker("swift", false);
  let summary = checker.check_detailed(&project.sources(), HEADER, 0, "");

  assert!(!summary.all_suitable());
  assert_eq!(summary.suitable_count(), 1);
  assert_eq!(summary.unsuitable_count(), 1);

  let failure = summary.failures().next().expect("one failure");
  assert_eq!(failure.path, project.crawled_path("b.swift"));
  assert_eq!(failure.rejection(), Some(&Rejection::MissingOpeningComment));

  let warnings: Vec<String> = sink
    .records()
    .into_iter()
    .filter(|r| r.level == LogLevel::Warning)
    .map(|r| r.message)
    .collect();
  assert_eq!(warnings.len(), 1);
  assert!(warnings[0].contains(&failure.path));
  Ok(())
}

#[test]
fn test_typo_is_reported_on_its_line() -> Result<()> {
  let project = Project::new()?;
  project.source("typo.swift", "// Copyright 2019 X\n// MIT licence\nimport Foundation\n")?;

  let (checker, sink) = checker("swift", false);
  let summary = checker.check_detailed(&project.sources(), HEADER, 0, "");

  let mismatch = summary.verdicts[0].mismatch().expect("mismatch");
  assert_eq!(mismatch.line_index, 1);
  assert_eq!(mismatch.expected, "MIT License");
  assert_eq!(mismatch.actual, "// MIT licence");

  let messages = sink.messages();
  assert!(messages.iter().any(|m| m == "\t - header line 2: 'MIT License'"));
  assert!(messages.iter().any(|m| m == "\t - file line 2: '// MIT licence'"));
  Ok(())
}

#[test]
fn test_ignoring_all_lines_rejects() -> Result<()> {
  let project = Project::new()?;
  project.source("short.swift", "// Copyright 2019 X\n// MIT License\n")?;

  let (checker, _) = checker("swift", false);
  let summary = checker.check_detailed(&project.sources(), HEADER, 2, "");

  assert_eq!(
    summary.verdicts[0].rejection(),
    Some(&Rejection::NotEnoughLines { total: 2, ignored: 2 })
  );
  Ok(())
}

#[test]
fn test_ignoring_the_opening_line() -> Result<()> {
  let project = Project::new()?;
  project.source(
    "Doc.swift",
    "/**\n   Copyright 2019 X\n   MIT License\n */\nimport Foundation\n",
  )?;

  let (checker, _) = checker("swift", false);
  assert!(checker.check(&project.sources(), HEADER, 1, ""));
  // without skipping '/**', line 0 of the header meets the opening line
  assert!(!checker.check(&project.sources(), HEADER, 0, ""));
  Ok(())
}

#[test]
fn test_excluded_file_is_never_judged() -> Result<()> {
  let project = Project::new()?;
  project.source("Generated.swift", UNSUITABLE_SOURCE)?;

  let (checker, sink) = checker("swift", true);
  let exclusion_list = format!("{}\n", project.crawled_path("Generated.swift"));
  let summary = checker.check_detailed(&project.sources(), HEADER, 0, &exclusion_list);

  assert!(summary.all_suitable());
  assert!(summary.verdicts.is_empty());
  assert_eq!(summary.excluded, vec![project.crawled_path("Generated.swift")]);
  assert!(sink.messages().contains(&"Will process 0 files".to_string()));
  assert!(!sink.records().iter().any(|r| r.level == LogLevel::Warning));
  Ok(())
}

#[test]
fn test_exclusions_do_not_change_the_other_verdicts() -> Result<()> {
  let project = Project::new()?;
  project.source("a.swift", SUITABLE_SOURCE)?;
  project.source("b.swift", UNSUITABLE_SOURCE)?;
  project.source("c.swift", UNSUITABLE_SOURCE)?;

  let (checker, _) = checker("swift", false);
  let header = HeaderSpec::parse(HEADER);

  let with_exclusion = checker.check_with(
    &project.sources(),
    &header,
    0,
    &ExclusionSet::from_iter([project.crawled_path("c.swift")]),
  );
  assert!(!with_exclusion.all_suitable());
  assert_eq!(with_exclusion.verdicts.len(), 2);

  let without_unsuitable = checker.check_with(
    &project.sources(),
    &header,
    0,
    &ExclusionSet::from_iter([project.crawled_path("b.swift"), project.crawled_path("c.swift")]),
  );
  assert!(without_unsuitable.all_suitable());
  Ok(())
}

#[test]
fn test_extension_pattern_selects_candidates() -> Result<()> {
  let project = Project::new()?;
  project.source("main.swift", SUITABLE_SOURCE)?;
  project.source("run.sh", UNSUITABLE_SOURCE)?;
  project.source("README.md", UNSUITABLE_SOURCE)?;

  let (swift_only, _) = checker("swift", false);
  assert!(swift_only.check(&project.sources(), HEADER, 0, ""));

  let (with_scripts, sink) = checker("swift|sh", false);
  assert!(!with_scripts.check(&project.sources(), HEADER, 0, ""));
  assert_eq!(sink.messages()[0], "Found 2 files with extension 'swift|sh'");
  Ok(())
}

#[test]
fn test_empty_folder_is_suitable() -> Result<()> {
  let project = Project::new()?;
  let (checker, sink) = checker("swift", false);

  assert!(checker.check(&project.sources(), HEADER, 0, ""));
  assert_eq!(sink.messages(), vec!["Found 0 files with extension 'swift'".to_string()]);
  Ok(())
}

#[test]
fn test_unclosed_header_advisory() -> Result<()> {
  let project = Project::new()?;
  project.source("a.swift", SUITABLE_SOURCE)?;

  let (logger, sink) = Logger::capture(LogConfig::default());
  let checker = Checker::new(CheckerConfig {
    verifier: VerifierOptions {
      warn_unclosed_header: true,
      ..VerifierOptions::default()
    },
    logger,
    ..CheckerConfig::new("swift")
  })?;

  let summary = checker.check_detailed(&project.sources(), HEADER, 0, "");
  assert!(summary.all_suitable());
  assert!(
    sink
      .messages()
      .iter()
      .any(|m| m.contains("is not followed by a closing '*/' or '//' line"))
  );
  Ok(())
}

#[test]
fn test_verdicts_follow_crawl_order() -> Result<()> {
  let project = Project::new()?;
  for name in ["c.swift", "a.swift", "b/z.swift", "b.swift"] {
    project.source(name, UNSUITABLE_SOURCE)?;
  }

  let (checker, _) = checker("swift", false);
  let summary = checker.check_detailed(&project.sources(), HEADER, 0, "");
  let paths: Vec<&str> = summary.verdicts.iter().map(|v| v.path.as_str()).collect();

  let mut sorted = paths.clone();
  sorted.sort_unstable();
  assert_eq!(paths, sorted);
  Ok(())
}
