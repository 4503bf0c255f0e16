//! Inbox cycle over a real directory tree

use std::sync::Arc;
use tempfile::tempdir;
use triage_core::{
    Agent, AgentConfig, AnalyzeAndPlanSkillOutput, AnalyzeEmailSkillOutput, EmailAnalysisResult,
    Result, RunOutcome, SentimentLevel, SkillContext, SkillExecutor, SkillName, SkillOutput,
    UrgencyLevel,
};
use triage_tools::{FsToolExecutor, ToolPaths};

/// Classifies by keyword so the report rows are predictable
struct KeywordSkills;

#[async_trait::async_trait]
impl SkillExecutor for KeywordSkills {
    async fn execute(&self, skill: SkillName, context: &SkillContext<'_>) -> Result<SkillOutput> {
        if skill == SkillName::AnalyzeAndPlan {
            return Ok(SkillOutput::AnalyzeAndPlan(AnalyzeAndPlanSkillOutput::default()));
        }
        let content = context
            .email
            .as_ref()
            .map(|e| e.content.as_str())
            .unwrap_or_default();
        let urgent = content.contains("ASAP");
        Ok(SkillOutput::AnalyzeEmail(AnalyzeEmailSkillOutput {
            main_topic: content.lines().next().unwrap_or_default().to_string(),
            business_category: "Support".to_string(),
            contact_data: String::new(),
            urgency: if urgent { UrgencyLevel::High } else { UrgencyLevel::Low },
            sentiment: SentimentLevel::Neutral,
            summary: content.to_string(),
        }))
    }
}

#[tokio::test]
async fn test_inbox_is_emptied_into_archive_and_report() {
    let dir = tempdir().unwrap();
    let paths = ToolPaths::new(
        dir.path().join("inbox"),
        dir.path().join("archive"),
        dir.path().join("out/report.jsonl"),
    );
    std::fs::create_dir_all(&paths.inbox).unwrap();
    std::fs::write(paths.inbox.join("001.txt"), "Printer broken\nFix ASAP").unwrap();
    std::fs::write(paths.inbox.join("002.txt"), "Question about invoice").unwrap();
    std::fs::write(paths.inbox.join("readme.md"), "not an email").unwrap();

    let agent = Agent::new(
        Arc::new(KeywordSkills),
        Arc::new(FsToolExecutor::new(paths.clone())),
        AgentConfig::default(),
    );
    let result = agent.run_email_cycle().await.unwrap();

    assert_eq!(result.outcome, RunOutcome::Completed);
    assert_eq!(result.processed_count(), 2);

    let mut left: Vec<_> = std::fs::read_dir(&paths.inbox)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    left.sort();
    assert_eq!(left, vec!["readme.md"]);
    assert!(paths.archive.join("001.txt").exists());
    assert!(paths.archive.join("002.txt").exists());

    let rows: Vec<EmailAnalysisResult> = std::fs::read_to_string(&paths.report)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].main_topic, "Printer broken");
    assert_eq!(rows[0].urgency, UrgencyLevel::High);
    assert_eq!(rows[1].urgency, UrgencyLevel::Low);
    assert!(rows[1].source_file.ends_with("002.txt"));
}

#[tokio::test]
async fn test_second_cycle_finds_nothing() {
    let dir = tempdir().unwrap();
    let paths = ToolPaths::new(
        dir.path().join("inbox"),
        dir.path().join("archive"),
        dir.path().join("report.jsonl"),
    );
    std::fs::create_dir_all(&paths.inbox).unwrap();
    std::fs::write(paths.inbox.join("a.txt"), "hello").unwrap();

    let agent = Agent::new(
        Arc::new(KeywordSkills),
        Arc::new(FsToolExecutor::new(paths.clone())),
        AgentConfig::default(),
    );
    assert_eq!(agent.run_email_cycle().await.unwrap().processed_count(), 1);

    let second = agent.run_email_cycle().await.unwrap();
    assert_eq!(second.outcome, RunOutcome::Completed);
    assert_eq!(second.processed_count(), 0);
    assert_eq!(second.steps_executed, 2);
}
