use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::audit;
use crate::db::initialize::init_db;
use crate::errors::AppResult;
use rusqlite::Connection;

/// First-run setup.
///
/// Sets up, in order:
///  - the configuration directory
///  - the YAML configuration file (skipped with --test)
///  - the SQLite database file
///  - any pending schema migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    //
    // 1️⃣ Configuration (directory + YAML file + DB path resolution)
    //
    // init_all returns the resolved DB path; in test mode no config file is
    // written, so a later Config::load() would not see the --db override.
    //
    let db_path = Config::init_all(cli.db.clone(), cli.test)?
        .to_string_lossy()
        .to_string();

    let path = Config::config_file();

    println!("⚙️  Initializing uphtrack…");
    println!("📄 Config file : {}", path.display());
    println!("🗄️  Database   : {}", &db_path);

    //
    // 2️⃣ Open the database and run migrations
    //
    let conn = Connection::open(&db_path)?;
    let fresh = init_db(&conn)?;

    if fresh {
        println!("✅ Database initialized at {}", &db_path);
    } else {
        println!("✅ Existing database verified at {}", &db_path);
    }

    //
    // 3️⃣ Audit row (non-blocking)
    //
    if let Err(e) = audit::record_system(
        &conn,
        "init",
        &format!("Database initialized at {}", &db_path),
    ) {
        eprintln!("⚠️ Failed to write audit row: {}", e);
    }

    println!("🎉 uphtrack initialization completed!");
    Ok(())
}
