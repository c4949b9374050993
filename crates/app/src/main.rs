use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{ClassifierConfig, Clock, HuggingFaceClassifier, QuestionnaireService};
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidModel { raw: String },
    InvalidApiUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidModel { raw } => write!(f, "invalid --model value: {raw:?}"),
            ArgsError::InvalidApiUrl { raw } => write!(f, "invalid --api-url value: {raw:?}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    questionnaires: Arc<QuestionnaireService>,
    model_name: String,
}

impl UiApp for DesktopApp {
    fn questionnaires(&self) -> Arc<QuestionnaireService> {
        Arc::clone(&self.questionnaires)
    }

    fn model_name(&self) -> String {
        self.model_name.clone()
    }
}

fn write_usage(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Usage:")?;
    writeln!(
        out,
        "  cargo run -p app -- [--model <hf_model_id>] [--api-url <url>] [--debug]"
    )?;
    writeln!(out)?;
    writeln!(out, "Defaults:")?;
    writeln!(out, "  --model   {}", ClassifierConfig::DEFAULT_MODEL)?;
    writeln!(out, "  --api-url {}", ClassifierConfig::DEFAULT_BASE_URL)?;
    writeln!(out)?;
    writeln!(out, "Environment:")?;
    writeln!(out, "  HUMEUR_HF_TOKEN, HUMEUR_HF_MODEL, HUMEUR_HF_BASE_URL, RUST_LOG")
}

/// Writes a rejected command line's error followed by the usage text.
fn report_args_error(out: &mut impl Write, err: &ArgsError) -> io::Result<()> {
    writeln!(out, "{err}")?;
    writeln!(out)?;
    write_usage(out)
}

struct Args {
    classifier: ClassifierConfig,
    debug: bool,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Option<Self>, ArgsError> {
        let mut classifier = ClassifierConfig::from_env();
        let mut debug = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--model" => {
                    let value = require_value(args, "--model")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidModel { raw: value });
                    }
                    classifier.model = value;
                }
                "--api-url" => {
                    let value = require_value(args, "--api-url")?;
                    if !(value.starts_with("http://") || value.starts_with("https://")) {
                        return Err(ArgsError::InvalidApiUrl { raw: value });
                    }
                    classifier.base_url = value;
                }
                "--debug" => debug = true,
                "--help" | "-h" => return Ok(None),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Some(Self { classifier, debug }))
    }
}

fn init_tracing(debug: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if debug {
            EnvFilter::new("debug,reqwest=info,hyper=info,hyper_util=info,rustls=info")
        } else {
            EnvFilter::new("info,reqwest=warn,hyper=warn,hyper_util=warn,rustls=warn")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

async fn run() -> Result<(), ArgsError> {
    let mut argv = std::env::args().skip(1);
    let Some(parsed) = Args::parse(&mut argv)? else {
        let _ = write_usage(&mut io::stderr().lock());
        return Ok(());
    };

    init_tracing(parsed.debug);

    // The classifier client is built once and shared by every window.
    let model_name = parsed.classifier.model.clone();
    info!(
        model = %model_name,
        endpoint = %parsed.classifier.endpoint(),
        authenticated = parsed.classifier.api_token.is_some(),
        "starting sentiment questionnaire"
    );
    let classifier = Arc::new(HuggingFaceClassifier::new(parsed.classifier));
    let questionnaires = Arc::new(QuestionnaireService::new(Clock::system(), classifier));

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        questionnaires,
        model_name,
    });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Analyse de Sentiment")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        let _ = report_args_error(&mut io::stderr().lock(), &err);
        std::process::exit(2);
    }
}
