use clap::{Parser, Subcommand};
use tracing::{error, info, warn};

use fest_results::app::{CatalogView, LeaderboardView, ProgramResultsView, StudentDetailView};
use fest_results::config::Config;
use fest_results::domain::{Category, TEAMS};
use fest_results::engine::{filter_roster, roster_counts, RosterFilter};
use fest_results::storage::{InMemoryStore, RecordStore, RestStore};
use fest_results::{demo, logging, observability, server};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "fest_results")]
#[command(about = "Results aggregation and ranking engine for arts-fest competitions")]
#[command(version = "0.1.0")]
struct Cli {
    /// Use the in-memory store seeded with a demo dataset
    #[arg(long, global = true)]
    demo: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP/GraphQL server
    Serve {
        /// Port to run the server on
        #[arg(short, long, default_value = "8080")]
        port: u16,
    },
    /// Show the team standings
    Standings,
    /// Show the top students per category
    Leaderboard,
    /// List programs from the catalog
    Programs {
        /// Category chip label to filter by
        #[arg(long)]
        category: Option<String>,
        /// Name/category substring to search for
        #[arg(long)]
        search: Option<String>,
    },
    /// Show published results for one program
    Results {
        /// Program id
        #[arg(long)]
        program: Uuid,
    },
    /// Show one student's mark sheet
    Student {
        /// Student id
        #[arg(long)]
        id: Uuid,
    },
    /// Browse the student roster
    Roster {
        /// Team tab (defaults to the first team)
        #[arg(long)]
        team: Option<String>,
        /// Name substring to search for
        #[arg(long)]
        search: Option<String>,
    },
}

async fn create_store(
    config: &Config,
    demo_requested: bool,
) -> Result<Arc<dyn RecordStore>, Box<dyn std::error::Error>> {
    if demo_requested {
        info!("Using in-memory store with demo dataset");
        let store = InMemoryStore::new();
        demo::seed(&store);
        return Ok(Arc::new(store));
    }
    if let Some(path) = &config.store.fixture {
        info!("Loading fixture from {}", path);
        return Ok(Arc::new(InMemoryStore::from_fixture(path)?));
    }
    if config.store.is_remote() {
        info!("Using remote record store");
        return Ok(Arc::new(RestStore::from_config(&config.store)?));
    }
    warn!("No remote store configured; falling back to the demo dataset");
    println!("🧠 No remote store configured, using demo data");
    let store = InMemoryStore::new();
    demo::seed(&store);
    Ok(Arc::new(store))
}

async fn show_standings(store: &dyn RecordStore) {
    let mut view = LeaderboardView::new();
    view.refresh(store).await;

    println!("🏆 Team Standings");
    for ranked in view.standings() {
        let medal = ranked.medal();
        println!(
            "   {} {:<12} {:>5} pts   {}",
            medal.icon,
            ranked.team.name,
            ranked.team.total(),
            medal.label
        );
    }
    if let Some(e) = view.last_error() {
        println!("⚠️  Standings unavailable: {}", e);
    }
}

async fn show_leaderboard(store: &dyn RecordStore) {
    let mut view = LeaderboardView::new();
    view.refresh(store).await;

    println!("🎓 Category Toppers");
    for board in view.boards() {
        println!("\n   {}", board.category.bucket_label());
        if board.entries.is_empty() {
            println!("      (no results yet)");
        }
        for entry in &board.entries {
            println!(
                "      {} {:<20} {:>4} pts   class {} / {}",
                entry.badge(),
                entry.record.student_name(),
                entry.record.total(),
                entry.record.student_class(),
                entry.record.student_team()
            );
        }
    }
    if let Some(e) = view.last_error() {
        println!("⚠️  Leaderboard unavailable: {}", e);
    }
}

async fn show_programs(store: &dyn RecordStore, category: Option<String>, search: Option<String>) {
    let mut view = CatalogView::new();
    if let Some(label) = category.as_deref() {
        match Category::parse(label) {
            Some(parsed) => view.set_category(Some(parsed)),
            None => println!("⚠️  Unknown category '{}', showing all programs", label),
        }
    }
    if let Some(s) = search {
        view.set_search(s);
    }
    view.refresh(store).await;

    let chips = view
        .chips()
        .iter()
        .map(|c| format!("{} {}", c.chip.label, c.count))
        .collect::<Vec<_>>()
        .join(" | ");
    println!("📋 Programs ({} of {})", view.visible_count(), view.total_count());
    println!("   {}", chips);
    for program in view.visible() {
        let published = if view.has_results(program) { "🏁" } else { "  " };
        println!("   {} {:<24} {}", published, program.name, program.category);
    }
    if let Some(e) = view.last_error() {
        println!("⚠️  Catalog unavailable: {}", e);
    }
}

async fn show_results(store: &dyn RecordStore, program_id: Uuid) {
    let program = match store.get_program_by_id(program_id).await {
        Ok(Some(program)) => program,
        Ok(None) => {
            println!("⚠️  No program with id {}", program_id);
            return;
        }
        Err(e) => {
            error!("Program lookup failed: {}", e);
            println!("❌ Program lookup failed: {}", e);
            return;
        }
    };

    let mut view = ProgramResultsView::new();
    view.show(store, &program).await;

    println!("🎪 {} ({})", program.name, program.category);
    if view.is_empty_ready() && view.last_error().is_none() {
        println!("   Results not published yet");
    }
    for row in view.rows() {
        println!("   {:<4} {:<24} {}", row.rank_label(), row.name, row.mark_label());
    }
    if let Some(e) = view.last_error() {
        println!("⚠️  Results unavailable: {}", e);
    }
}

async fn show_student(store: &dyn RecordStore, student_id: Uuid) {
    let mut view = StudentDetailView::new();
    view.show(store, student_id).await;

    match view.student() {
        Some(student) => {
            println!("🧑 {}   class {}   {}", student.name, student.class, student.team);
            if let Some(category) = view.category_hint() {
                println!("   Category: {}", category);
            }
            let sheet = view.mark_sheet();
            println!("   Programs entered: {}", sheet.program_count());
            for row in &sheet.rows {
                println!("   {:<24} {:<12} {:>4}", row.program, row.prize, row.mark);
            }
            let total = sheet.total_row();
            println!("   {:<24} {:<12} {:>4}", total.program, total.prize, total.mark);
        }
        None => println!("⚠️  No student with id {}", student_id),
    }
    if let Some(e) = view.last_error() {
        println!("⚠️  Mark sheet unavailable: {}", e);
    }
}

async fn show_roster(store: &dyn RecordStore, team: Option<String>, search: Option<String>) {
    let team = team
        .as_deref()
        .map(str::to_uppercase)
        .and_then(|upper| TEAMS.iter().find(|info| info.name == upper))
        .map(|info| info.name)
        .unwrap_or(TEAMS[0].name);
    let filter = RosterFilter {
        team,
        search: search.unwrap_or_default(),
    };

    match store.get_all_students().await {
        Ok(students) => {
            let tabs = roster_counts(&students)
                .iter()
                .map(|c| format!("{} {}", c.team.name, c.count))
                .collect::<Vec<_>>()
                .join(" | ");
            println!("👥 Roster: {}", tabs);
            for student in filter_roster(&students, &filter) {
                println!("   {:<24} class {}", student.name, student.class);
            }
        }
        Err(e) => {
            error!("Roster fetch failed: {}", e);
            println!("❌ Roster fetch failed: {}", e);
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    logging::init_logging();

    observability::init().unwrap_or_else(|e| {
        eprintln!("Warning: Failed to initialize metrics: {}", e);
    });

    let cli = Cli::parse();
    let config = Config::load()?;
    let store = create_store(&config, cli.demo).await?;

    match cli.command {
        Commands::Serve { port } => {
            println!("🚀 Starting results server on port {}...", port);
            server::start_server(store, port).await?;
        }
        Commands::Standings => show_standings(store.as_ref()).await,
        Commands::Leaderboard => show_leaderboard(store.as_ref()).await,
        Commands::Programs { category, search } => {
            show_programs(store.as_ref(), category, search).await
        }
        Commands::Results { program } => show_results(store.as_ref(), program).await,
        Commands::Student { id } => show_student(store.as_ref(), id).await,
        Commands::Roster { team, search } => show_roster(store.as_ref(), team, search).await,
    }
    Ok(())
}
