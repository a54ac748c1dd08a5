//! StudyDesk executable.
//!
//! # Responsibility
//! - Parse flags (with `STUDYDESK_*` environment fallbacks) into a
//!   `ServerConfig` and run the HTTP server.
//! - Keep the `ping` probe for checking core crate linkage.

use clap::{Args, Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;
use studydesk_api::ServerConfig;
use studydesk_core::{default_log_level, init_logging, LoggingConfig, OllamaConfig};

#[derive(Debug, Parser)]
#[command(name = "studydesk", version, about = "Personal study assistant backend")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the HTTP server.
    Serve(ServeArgs),
    /// Print core crate linkage info.
    Ping,
}

#[derive(Debug, Args)]
struct ServeArgs {
    #[arg(long, env = "STUDYDESK_BIND", default_value = "0.0.0.0:8000")]
    bind: SocketAddr,

    #[arg(long, env = "STUDYDESK_UPLOAD_DIR", default_value = "uploaded_documents")]
    upload_dir: PathBuf,

    /// Static frontend served for unmatched paths.
    #[arg(long, env = "STUDYDESK_FRONTEND_DIR")]
    frontend_dir: Option<PathBuf>,

    #[arg(long, env = "STUDYDESK_DATABASE", default_value = "app.db")]
    database: PathBuf,

    #[arg(long, env = "STUDYDESK_OLLAMA_URL", default_value = "http://localhost:11434")]
    ollama_url: String,

    #[arg(long, env = "STUDYDESK_MODEL", default_value = "llama3.2")]
    model: String,

    /// Generation request timeout; 0 waits indefinitely.
    #[arg(long, env = "STUDYDESK_AI_TIMEOUT_SECS", default_value_t = 300)]
    ai_timeout_secs: u64,

    #[arg(long, env = "STUDYDESK_LOG_LEVEL")]
    log_level: Option<String>,

    #[arg(long, env = "STUDYDESK_LOG_DIR", default_value = "logs")]
    log_dir: PathBuf,
}

impl ServeArgs {
    fn server_config(&self) -> ServerConfig {
        ServerConfig {
            bind_addr: self.bind,
            upload_dir: self.upload_dir.clone(),
            frontend_dir: self.frontend_dir.clone(),
            database_path: self.database.clone(),
            generation: OllamaConfig {
                base_url: self.ollama_url.clone(),
                model: self.model.clone(),
                timeout_secs: self.ai_timeout_secs,
            },
        }
    }

    fn logging_config(&self) -> std::io::Result<LoggingConfig> {
        let log_dir = if self.log_dir.is_absolute() {
            self.log_dir.clone()
        } else {
            std::env::current_dir()?.join(&self.log_dir)
        };
        Ok(LoggingConfig {
            level: self
                .log_level
                .clone()
                .unwrap_or_else(|| default_log_level().to_string()),
            log_dir,
            echo_to_stderr: true,
        })
    }
}

fn main() -> ExitCode {
    // A missing .env file is normal.
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match cli.command {
        Command::Ping => {
            println!("studydesk_core ping={}", studydesk_core::ping());
            println!("studydesk_core version={}", studydesk_core::core_version());
            ExitCode::SUCCESS
        }
        Command::Serve(args) => run_server(&args),
    }
}

fn run_server(args: &ServeArgs) -> ExitCode {
    let logging = match args.logging_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("studydesk: cannot resolve log directory: {err}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(err) = init_logging(&logging) {
        eprintln!("studydesk: {err}");
        return ExitCode::FAILURE;
    }

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            log::error!("event=runtime_init module=cli status=error error={err}");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(studydesk_api::serve(args.server_config())) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("event=server_exit module=cli status=error error={err}");
            eprintln!("studydesk: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command, ServeArgs};
    use clap::Parser;
    use std::sync::Mutex;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Parses `serve` flags with every `STUDYDESK_*` fallback cleared.
    fn parse_serve(args: &[&str]) -> ServeArgs {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let inherited: Vec<String> = std::env::vars()
            .map(|(key, _)| key)
            .filter(|key| key.starts_with("STUDYDESK_"))
            .collect();
        for key in inherited {
            std::env::remove_var(key);
        }

        let argv = ["studydesk", "serve"].iter().chain(args.iter()).copied();
        match Cli::try_parse_from(argv).unwrap().command {
            Command::Serve(serve) => serve,
            Command::Ping => panic!("expected serve"),
        }
    }

    #[test]
    fn serve_defaults_match_server_config() {
        let config = parse_serve(&[]).server_config();
        assert_eq!(config, studydesk_api::ServerConfig::default());
    }

    #[test]
    fn serve_flags_override_defaults() {
        let config = parse_serve(&[
            "--bind",
            "127.0.0.1:9000",
            "--model",
            "mistral",
            "--ai-timeout-secs",
            "0",
        ])
        .server_config();
        assert_eq!(config.bind_addr.port(), 9000);
        assert_eq!(config.generation.model, "mistral");
        assert_eq!(config.generation.timeout_secs, 0);
    }

    #[test]
    fn environment_fallback_is_ignored_by_parse_helper() {
        {
            let _guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            std::env::set_var("STUDYDESK_MODEL", "from-env");
        }
        let config = parse_serve(&[]).server_config();
        assert_eq!(config.generation.model, "llama3.2");
    }

    #[test]
    fn relative_log_dir_is_made_absolute() {
        let logging = parse_serve(&["--log-dir", "var/logs"])
            .logging_config()
            .unwrap();
        assert!(logging.log_dir.is_absolute());
        assert!(logging.log_dir.ends_with("var/logs"));
    }

    #[test]
    fn ping_subcommand_parses() {
        let cli = Cli::try_parse_from(["studydesk", "ping"]).unwrap();
        assert!(matches!(cli.command, Command::Ping));
    }
}
