use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use log::info;
use rustyline::Editor;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;

use sqlfront::catalog::{DEFAULT_SCHEMA_FILE, Schema, SchemaLoader, SchemaSource};
use sqlfront::query::parser::tokenize;
use sqlfront::{ParseResult, Statement, parse_sql};

const HISTORY_FILE: &str = ".sqlfront_history";

#[derive(Parser)]
#[command(author, version, about = "sqlfront - parse and validate SQL statements against a schema")]
struct Cli {
    /// Schema file (JSON) describing tables and columns
    #[arg(short, long, default_value = DEFAULT_SCHEMA_FILE)]
    schema: PathBuf,

    /// Print statements as JSON instead of SQL
    #[arg(long)]
    json: bool,

    /// Command to execute
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive shell
    Shell,

    /// Parse and validate a single statement
    Query {
        /// SQL statement to parse
        sql: String,
    },

    /// Print the token stream of a statement (no schema checks)
    Tokens {
        /// SQL statement to tokenize
        sql: String,
    },

    /// List the tables and columns of the loaded schema
    Tables,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Tokens { sql } => {
            // Tokenizing needs no schema
            let tokens = tokenize(&sql)?;
            for token in tokens {
                println!("{}", token);
            }
        }
        Commands::Query { sql } => {
            let schema = load_schema(&cli.schema)?;
            match parse_sql(&sql, &schema) {
                Ok(stmt) => print_statement(&stmt, cli.json)?,
                Err(err) => bail!("{} (stage: {})", err, err.stage()),
            }
        }
        Commands::Tables => {
            let schema = load_schema(&cli.schema)?;
            print_tables(&schema);
        }
        Commands::Shell => {
            let schema = load_schema(&cli.schema)?;
            run_shell(&schema, cli.json)?;
        }
    }

    Ok(())
}

fn load_schema(path: &Path) -> Result<Schema> {
    let schema = SchemaLoader::from_path(path)
        .with_context(|| format!("Failed to load schema from {}", path.display()))?;
    info!("schema ready: {} table(s)", schema.len());
    Ok(schema)
}

fn print_statement(stmt: &Statement, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(stmt)?);
    } else {
        println!("{}", stmt);
    }
    Ok(())
}

fn print_tables(schema: &Schema) {
    if schema.is_empty() {
        println!("(no tables)");
        return;
    }
    for table in schema.tables() {
        let columns: Vec<String> = table
            .columns()
            .iter()
            .map(|c| match schema.column_data_type(table.name(), c.name()) {
                Some(data_type) => format!("{} {}", c.name(), data_type),
                None => c.name().to_string(),
            })
            .collect();
        println!("{} ({})", table.name(), columns.join(", "));
    }
}

fn run_shell(schema: &Schema, json: bool) -> Result<()> {
    println!("sqlfront shell. Type 'help' for assistance or 'exit' to quit.");

    let mut rl = Editor::<(), DefaultHistory>::new()?;
    if let Err(err) = rl.load_history(HISTORY_FILE) {
        if !err.to_string().contains("No such file or directory") {
            println!("Error loading history: {}", err);
        }
    }

    loop {
        let readline = rl.readline("sqlfront> ");
        match readline {
            Ok(line) => {
                let _ = rl.add_history_entry(&line);

                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                match line.to_lowercase().as_str() {
                    "exit" | "quit" => {
                        println!("Goodbye!");
                        break;
                    }
                    "help" => print_help(),
                    "tables" => print_tables(schema),
                    _ => report(parse_sql(line, schema), json),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(err) => {
                println!("Error: {}", err);
                break;
            }
        }
    }

    if let Err(err) = rl.save_history(HISTORY_FILE) {
        println!("Error saving history: {}", err);
    }
    Ok(())
}

fn report(result: ParseResult<Statement>, json: bool) {
    match result {
        Ok(stmt) => {
            if let Err(err) = print_statement(&stmt, json) {
                println!("Error: {}", err);
            }
        }
        Err(err) => println!("Error ({}): {}", err.stage(), err),
    }
}

fn print_help() {
    println!("Supported statements:");
    println!("  SELECT <cols>|* FROM <table> [WHERE <cond> [AND|OR <cond>]...]");
    println!("  INSERT INTO <table> (<cols>) VALUES (<values>)");
    println!("  UPDATE <table> SET <col> = <value>[, ...] [WHERE ...]");
    println!("  DELETE FROM <table> WHERE ...");
    println!("  DROP TABLE <table> | DROP INDEX <index>");
    println!("  CREATE TABLE <table> (<cols>)");
    println!("  CREATE INDEX <index> ON <table> (<cols>)");
    println!();
    println!("A WHERE clause uses one connective throughout: all AND or all OR.");
    println!("Operators: = != < > <= >=");
    println!();
    println!("Other commands:");
    println!("  tables                        - List tables in the schema");
    println!("  help                          - Display this help message");
    println!("  exit                          - Exit the shell");
}
