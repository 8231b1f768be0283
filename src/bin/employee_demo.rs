use clap::{Parser, ValueEnum};
use employee_store::prelude::*;
use tracing::Level;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Replay the employee CRUD walkthrough against SQLite")]
struct Args {
    /// `:memory:` or a database file path
    #[arg(long, default_value = ":memory:")]
    db: String,
    /// Reuse an existing table instead of failing when it is already there
    #[arg(long)]
    if_missing: bool,
    #[arg(long)]
    wal: bool,
    /// Print result rows as JSON
    #[arg(long)]
    json: bool,
    #[arg(long, value_enum, default_value = "warn")]
    log_level: LogLevel,
}

fn print_rows(rows: &[Employee], json: bool) {
    if json {
        let out = serde_json::to_string(rows).unwrap_or_else(|_| "[]".to_string());
        println!("{out}");
    } else {
        let triples: Vec<(&str, &str, i64)> = rows
            .iter()
            .map(|e| (e.first.as_str(), e.last.as_str(), e.pay))
            .collect();
        println!("{triples:?}");
    }
}

fn run(args: &Args) -> Result<(), StoreError> {
    let mut builder = StoreOptionsBuilder::parse(&args.db)?.wal(args.wal);
    if args.if_missing {
        builder = builder.if_missing();
    }
    let opts = builder.finish();
    let opts_json = serde_json::to_string(&opts).unwrap_or_else(|_| "{}".to_string());
    tracing::info!("config: {}", opts_json);

    let mut store = EmployeeStore::open(opts)?;

    let emp_1 = Employee::new("John", "Doe", 80_000);
    let emp_2 = Employee::new("Jane", "Doe", 90_000);

    store.insert(&emp_1)?;
    store.insert(&emp_2)?;
    print_rows(&store.query_by_last_name("Doe")?, args.json);

    store.update_pay(&emp_2, 95_000)?;
    store.remove(&emp_1)?;
    print_rows(&store.query_by_last_name("Doe")?, args.json);

    store.close()
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_max_level(Level::from(args.log_level))
        .init();

    if let Err(err) = run(&args) {
        eprintln!("employee_demo: {err}");
        std::process::exit(1);
    }
}
