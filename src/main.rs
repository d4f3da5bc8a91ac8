//! `clearance-os` command line.

use std::error::Error;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::{watch, Notify};
use tracing::info;

use clearance_os::adapters::cli::render;
use clearance_os::adapters::{
    InMemoryEventBus, MockMainframe, Scenario, SimulatedVlmExtractor, TracingEventHandler,
    VLM_SYSTEM_PROMPT,
};
use clearance_os::application::{
    AntiCorruptionLayer, ForceSyncCommand, ForceSyncHandler, ProcessCaseCommand,
    ProcessCaseHandler, ProcessCaseResult,
};
use clearance_os::config::AppConfig;
use clearance_os::domain::adjudication::AdjudicationEngine;
use clearance_os::domain::foundation::{DomainError, EventEnvelope};
use clearance_os::domain::guidelines::{all_guidelines, get_guideline, search_guidelines};
use clearance_os::ports::{EventHandler, EventSubscriber};

const SYNC_COMPLETED: &str = "legacy.sync_completed.v1";
const DECISION_PUBLISHED: &str = "decision.published.v1";

#[derive(Parser)]
#[command(author, version, about = "Automated adjudication prototype", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Walk a case file through ingestion, adjudication and legacy sync
    Demo {
        /// Case file to "upload"; the name selects the scenario
        #[arg(long, default_value = "arrest_report_scanned.pdf")]
        file: String,
        /// Force the mainframe sync without waiting for ENTER
        #[arg(long)]
        no_wait: bool,
        /// Let a batch timer sync the mainframe instead of forcing it
        #[arg(long)]
        auto_sync_secs: Option<u64>,
    },
    /// Adjudicate a case file and print the decision
    Adjudicate {
        /// Case file to "upload"; the name selects the scenario
        #[arg(long, default_value = "arrest_report_scanned.pdf")]
        file: String,
        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Browse the SEAD 4 guideline excerpts
    Guidelines {
        #[command(subcommand)]
        command: GuidelineCommands,
    },
    /// Print the extraction system prompt
    Prompt,
}

#[derive(Subcommand)]
enum GuidelineCommands {
    /// Keyword lookup over the guideline table
    Search {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },
    /// Show one guideline by letter, or all of them
    Show { code: Option<String> },
}

/// Wakes the demo when the mainframe has been synced.
struct SyncNotifier(Arc<Notify>);

#[async_trait]
impl EventHandler for SyncNotifier {
    async fn handle(&self, _event: EventEnvelope) -> Result<(), DomainError> {
        self.0.notify_one();
        Ok(())
    }

    fn name(&self) -> &'static str {
        "SyncNotifier"
    }
}

/// Wired pipeline for one process run.
struct Pipeline {
    config: AppConfig,
    process_case: ProcessCaseHandler,
    force_sync: ForceSyncHandler,
    acl: Arc<AntiCorruptionLayer>,
    mainframe: Arc<MockMainframe>,
    bus: Arc<InMemoryEventBus>,
}

impl Pipeline {
    fn build(config: AppConfig) -> Self {
        let bus = Arc::new(InMemoryEventBus::new());
        bus.subscribe_all(
            &[DECISION_PUBLISHED, SYNC_COMPLETED],
            Arc::new(TracingEventHandler),
        );

        let mainframe =
            Arc::new(MockMainframe::new().with_latency(config.legacy.transmit_latency()));
        let acl = Arc::new(AntiCorruptionLayer::new(
            mainframe.clone(),
            bus.clone(),
            config.legacy.acl_settings(),
        ));
        let extractor = Arc::new(
            SimulatedVlmExtractor::new().with_stage_latency(config.extraction.stage_latency()),
        );
        let engine = AdjudicationEngine::with_rules(config.engine.rules());

        Self {
            process_case: ProcessCaseHandler::new(extractor, engine, acl.clone()),
            force_sync: ForceSyncHandler::new(acl.clone()),
            acl,
            mainframe,
            bus,
            config,
        }
    }

    async fn process(&self, file: &str) -> Result<ProcessCaseResult, Box<dyn Error>> {
        let bytes = format!("scanned image data for {}", file).into_bytes();
        Ok(self
            .process_case
            .handle(ProcessCaseCommand::new(file, bytes))
            .await?)
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let config = AppConfig::load()?;
    config.validate()?;
    config.logging.init()?;

    match cli.command {
        Commands::Demo {
            file,
            no_wait,
            auto_sync_secs,
        } => {
            let period = auto_sync_secs
                .map(Duration::from_secs)
                .or_else(|| config.legacy.auto_sync_period());
            if period == Some(Duration::ZERO) {
                return Err("--auto-sync-secs must be greater than zero".into());
            }
            run_demo(Pipeline::build(config), &file, no_wait, period).await
        }
        Commands::Adjudicate { file, json } => {
            run_adjudicate(Pipeline::build(config), &file, json).await
        }
        Commands::Guidelines { command } => run_guidelines(command),
        Commands::Prompt => {
            println!("{}", VLM_SYSTEM_PROMPT);
            Ok(())
        }
    }
}

async fn run_demo(
    pipeline: Pipeline,
    file: &str,
    no_wait: bool,
    auto_sync: Option<Duration>,
) -> Result<(), Box<dyn Error>> {
    println!("{}", render::banner("ClearanceOS Prototype v0.1 - Automated Adjudication"));
    println!("Demonstrating VLM-Driven Ingestion + SEAD 4 Adjudication");
    println!("Scenario: {}", Scenario::from_file_name(file));

    println!("{}", render::banner("PHASE 1: VLM Ingestion"));
    println!("VLM Agent processing: {}", file);
    let result = pipeline.process(file).await?;
    println!("{}", render::incident_summary(&result.incident));

    println!("{}", render::banner("PHASE 2: Adjudication & Legal Analysis"));
    println!(
        "{}",
        render::decision_summary(&result.decision, pipeline.config.engine.max_risk_score)
    );

    println!("{}", render::banner("PHASE 3: Legacy System Integration (ACL)"));
    println!("{}", render::legacy_status(&result.subject_id, &result.status));
    println!(
        "\nSync queue: {} update(s) waiting for the nightly batch ({} hour cycle)",
        pipeline.acl.sync_queue_size().await,
        pipeline.acl.settings().sync_interval_hours
    );

    match auto_sync {
        Some(period) => {
            let synced = Arc::new(Notify::new());
            pipeline
                .bus
                .subscribe(SYNC_COMPLETED, Arc::new(SyncNotifier(synced.clone())));

            let (shutdown_tx, shutdown_rx) = watch::channel(false);
            let timer = Arc::clone(&pipeline.acl).spawn_auto_sync(period, shutdown_rx);
            println!(
                "\nWaiting for the batch timer ({}s). Press Ctrl+C to abort.",
                period.as_secs()
            );

            tokio::select! {
                _ = synced.notified() => {}
                _ = tokio::signal::ctrl_c() => {
                    println!("\nDemo interrupted by user.");
                }
            }

            let _ = shutdown_tx.send(true);
            timer.await?;
        }
        None => {
            if !no_wait {
                println!("\nPress ENTER to force immediate sync (simulate emergency update)...");
                let mut lines = BufReader::new(tokio::io::stdin()).lines();
                lines.next_line().await?;
            }
            println!("Forcing legacy sync...");
            pipeline
                .force_sync
                .handle(ForceSyncCommand {
                    subject_id: result.subject_id.clone(),
                })
                .await?;
        }
    }

    if let Some(status) = pipeline.acl.get_status(&result.subject_id).await {
        println!("\n{}", render::legacy_status(&result.subject_id, &status));
    }
    if let Some(sent) = pipeline.mainframe.received().last() {
        println!("\n{}", render::envelope(sent));
    }

    println!("{}", render::banner("DEMO COMPLETE"));
    println!("Decisions logged: {}", pipeline.process_case.decision_log().await.len());
    println!("Domain events published: {}", pipeline.bus.event_count());
    info!(subject_id = %result.subject_id, "demo finished");
    Ok(())
}

async fn run_adjudicate(pipeline: Pipeline, file: &str, json: bool) -> Result<(), Box<dyn Error>> {
    let result = pipeline.process(file).await?;

    if json {
        let output = serde_json::json!({
            "subject_id": result.subject_id,
            "incident": result.incident,
            "decision": result.decision,
            "status": result.status,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", render::incident_summary(&result.incident));
    println!(
        "{}",
        render::decision_summary(&result.decision, pipeline.config.engine.max_risk_score)
    );
    println!("\n{}", render::legacy_status(&result.subject_id, &result.status));
    Ok(())
}

fn run_guidelines(command: GuidelineCommands) -> Result<(), Box<dyn Error>> {
    match command {
        GuidelineCommands::Search { query } => {
            let query = query.join(" ");
            println!("{}", render::guideline_matches(&query, &search_guidelines(&query)));
        }
        GuidelineCommands::Show { code: Some(code) } => {
            let guideline =
                get_guideline(&code).ok_or_else(|| format!("Unknown guideline code: {}", code))?;
            println!("{}", render::guideline_detail(guideline));
        }
        GuidelineCommands::Show { code: None } => {
            for guideline in all_guidelines() {
                println!("{}", render::guideline_detail(guideline));
            }
        }
    }
    Ok(())
}
