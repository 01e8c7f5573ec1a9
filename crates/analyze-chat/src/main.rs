use anyhow::{Context, Result};
use clap::Parser;
use shared::{
    aggregate_daily, extract_messages, load_records, save_aggregates, save_records, LexiconScorer,
    Normalizer, RunConfig, SentimentScorer, StopwordLanguageClassifier, StopwordSet,
};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "analyze-chat")]
#[command(about = "Score daily sentiment of an exported chat transcript")]
struct Args {
    /// Path to the exported chat JSON file
    #[arg(short, long, required_unless_present = "use_checkpoint")]
    source: Option<PathBuf>,

    /// Skip extraction and normalization, resume from the saved checkpoint
    #[arg(long)]
    use_checkpoint: bool,

    /// Directory for checkpoint and output files
    #[arg(long)]
    assets_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = RunConfig::new(args.source, args.use_checkpoint, args.assets_dir);

    fs::create_dir_all(&config.assets_dir).with_context(|| {
        format!(
            "Failed to create assets directory {}",
            config.assets_dir.display()
        )
    })?;

    let records = if config.use_checkpoint {
        println!(
            "📂 Resuming from checkpoint: {}",
            config.checkpoint_path().display()
        );
        let records = load_records(&config.checkpoint_path())
            .context("Failed to load the normalized checkpoint")?;
        println!("✓ Loaded {} records", records.len());
        records
    } else {
        let source = config
            .source_path
            .clone()
            .context("--source is required unless --use-checkpoint is set")?;

        println!("📨 Reading chat export from {}...", source.display());
        let messages = extract_messages(&source).context("Failed to read chat export")?;
        println!("✓ Found {} messages", messages.len());

        println!("\n🧹 Normalizing message text...");
        let normalizer = Normalizer::new(
            Box::new(StopwordLanguageClassifier::new()),
            StopwordSet::english(),
        );
        let records = normalizer.normalize(messages);
        println!("✓ {} messages survived normalization", records.len());

        save_records(&records, &config.checkpoint_path())
            .context("Failed to write the normalized checkpoint")?;
        println!("✓ Checkpoint saved to {}", config.checkpoint_path().display());
        records
    };

    if records.is_empty() {
        println!("\nNo messages left to score.");
        return Ok(());
    }

    println!("\n🤖 Scoring sentiment...");
    let scorer = SentimentScorer::new(Box::new(LexiconScorer::new()));
    let scored = scorer.score(records);

    let unscored = scored.iter().filter(|r| r.polarity.is_none()).count();
    println!("✓ Scored {}/{} messages", scored.len() - unscored, scored.len());
    if unscored > 0 {
        println!("⚠ {} messages could not be scored", unscored);
    }

    println!("\n📊 Aggregating daily sentiment...");
    let aggregates = aggregate_daily(&scored);
    save_aggregates(&aggregates, &config.aggregate_path())
        .context("Failed to write the daily aggregates")?;
    println!(
        "✓ {} days written to {}",
        aggregates.len(),
        config.aggregate_path().display()
    );

    println!();
    for day in &aggregates {
        println!(
            "  {}  {:>5} msgs  avg {:+.3}",
            day.date, day.num_msgs_per_day, day.avg_sentiment
        );
    }

    println!("\n✅ Done.");
    Ok(())
}
