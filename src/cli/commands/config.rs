use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use std::path::Path;
use std::process::Command;

/// `config --print` dumps the YAML, `config --edit` opens it in an editor.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            println!("📄 Current configuration:\n");
            println!("{}", serde_yaml::to_string(&cfg).unwrap_or_default());
        }

        if *edit_config {
            edit_with_fallback(editor.clone(), &path);
        }
    }

    Ok(())
}

/// Platform default when neither --editor nor $EDITOR/$VISUAL is set.
fn default_editor() -> String {
    std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}

fn try_editor(editor: &str, path: &Path) -> bool {
    matches!(Command::new(editor).arg(path).status(), Ok(s) if s.success())
}

fn edit_with_fallback(requested: Option<String>, path: &Path) {
    let fallback = default_editor();
    let editor = requested.unwrap_or_else(|| fallback.clone());

    if try_editor(&editor, path) {
        println!("✅ Configuration file edited with '{}'", editor);
        return;
    }

    if editor == fallback {
        eprintln!("❌ Could not edit the configuration file with '{}'", editor);
        return;
    }

    eprintln!(
        "⚠️  Editor '{}' failed to start, trying '{}' instead",
        editor, fallback
    );

    if try_editor(&fallback, path) {
        println!("✅ Configuration file edited with fallback '{}'", fallback);
    } else {
        eprintln!(
            "❌ Could not edit the configuration file with fallback '{}'",
            fallback
        );
    }
}
