use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::model::{LanguageCode, LanguageError, LanguageSettings};
use services::{HttpApiConfig, HttpSessionApi, SessionApi};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const DEFAULT_LANGUAGES: &str = "en:English,fr:Français,ru:Русский";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidApiUrl { raw: String },
    InvalidLanguages(LanguageError),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidApiUrl { raw } => write!(f, "invalid --api value: {raw}"),
            ArgsError::InvalidLanguages(err) => write!(f, "invalid language settings: {err}"),
        }
    }
}

impl std::error::Error for ArgsError {}

impl From<LanguageError> for ArgsError {
    fn from(err: LanguageError) -> Self {
        ArgsError::InvalidLanguages(err)
    }
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
}

fn env_flag(key: &str) -> bool {
    env_value(key).is_some_and(|value| matches!(value.trim(), "1" | "true" | "yes" | "on"))
}

struct DesktopApp {
    session_api: Arc<dyn SessionApi>,
    languages: LanguageSettings,
}

impl UiApp for DesktopApp {
    fn session_api(&self) -> Arc<dyn SessionApi> {
        Arc::clone(&self.session_api)
    }

    fn language_settings(&self) -> LanguageSettings {
        self.languages.clone()
    }
}

#[derive(Debug)]
struct Args {
    api_url: String,
    languages: String,
    default_language: Option<String>,
    prefix_default_language: bool,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!(
        "  cargo run -p app -- [--api <url>] [--languages <code:Name,...>] [--default-language <code>] [--prefix-default-language]"
    );
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --api {}", services::DEFAULT_API_URL);
    eprintln!("  --languages {DEFAULT_LANGUAGES}");
    eprintln!("  --default-language <first listed>");
    eprintln!();
    eprintln!("Environment:");
    eprintln!(
        "  QUIZ_API_URL, QUIZ_LANGUAGES, QUIZ_DEFAULT_LANGUAGE, QUIZ_PREFIX_DEFAULT_LANGUAGE"
    );
    eprintln!("  QUIZ_LOG (falls back to RUST_LOG, then info)");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut parsed = Self {
            api_url: HttpApiConfig::from_env().base_url,
            languages: env_value("QUIZ_LANGUAGES").unwrap_or_else(|| DEFAULT_LANGUAGES.into()),
            default_language: env_value("QUIZ_DEFAULT_LANGUAGE"),
            prefix_default_language: env_flag("QUIZ_PREFIX_DEFAULT_LANGUAGE"),
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--api" => {
                    let value = require_value(args, "--api")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidApiUrl { raw: value });
                    }
                    parsed.api_url = value;
                }
                "--languages" => parsed.languages = require_value(args, "--languages")?,
                "--default-language" => {
                    parsed.default_language = Some(require_value(args, "--default-language")?);
                }
                "--prefix-default-language" => parsed.prefix_default_language = true,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(parsed)
    }

    fn language_settings(&self) -> Result<LanguageSettings, ArgsError> {
        let languages = LanguageSettings::parse_list(&self.languages)?;
        let default = match &self.default_language {
            Some(code) => LanguageCode::new(code)?,
            None => languages
                .first()
                .map(|language| language.code.clone())
                .ok_or(LanguageError::Empty)?,
        };
        Ok(LanguageSettings::new(
            languages,
            default,
            self.prefix_default_language,
        )?)
    }
}

fn init_tracing() {
    let filter = env_value("QUIZ_LOG")
        .or_else(|| env_value("RUST_LOG"))
        .unwrap_or_else(|| "info".to_owned());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    init_tracing();

    let languages = parsed.language_settings()?;
    let session_api = HttpSessionApi::new(&HttpApiConfig {
        base_url: parsed.api_url.clone(),
    })
    .map_err(|err| {
        tracing::error!(url = %parsed.api_url, error = %err, "invalid quiz router url");
        err
    })?;
    tracing::info!(
        api = %parsed.api_url,
        languages = languages.languages().len(),
        default_language = %languages.default_code(),
        "starting quiz client"
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        session_api: Arc::new(session_api),
        languages,
    });
    let context = build_app_context(&app);

    // Some dev setups default to an always-on-top window.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Trivia")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // Binary glue: print once and exit.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
