//! Line-oriented REPL for the RC beam design assistant.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rc_beam_chat::adapters::bundle::FileBundleLoader;
use rc_beam_chat::adapters::summary::TemplateSummarizer;
use rc_beam_chat::application::{
    LoadBundleCommand, LoadBundleHandler, PredictionSession, ProcessTurnCommand, ProcessTurnHandler,
};
use rc_beam_chat::config::{AppConfig, LoggingConfig};
use rc_beam_chat::domain::extraction::ParameterExtractor;
use rc_beam_chat::domain::foundation::Language;
use rc_beam_chat::domain::wizard::SlotFillingWizard;

/// One parsed input line.
#[derive(Debug, PartialEq)]
enum ReplCommand<'a> {
    Empty,
    Quit,
    Help,
    New,
    Cancel,
    Status,
    Bundle(Option<PathBuf>),
    Turn(&'a str),
}

impl<'a> ReplCommand<'a> {
    fn parse(line: &'a str) -> Self {
        let trimmed = line.trim();
        let (head, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (trimmed, ""),
        };
        match head.to_ascii_lowercase().as_str() {
            "" => ReplCommand::Empty,
            "/q" | "/quit" | "/exit" => ReplCommand::Quit,
            "/help" => ReplCommand::Help,
            "/new" => ReplCommand::New,
            "/cancel" if rest.is_empty() => ReplCommand::Cancel,
            "/status" => ReplCommand::Status,
            "/bundle" if rest.is_empty() => ReplCommand::Bundle(None),
            "/bundle" => ReplCommand::Bundle(Some(PathBuf::from(rest))),
            _ => ReplCommand::Turn(trimmed),
        }
    }
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| logging.filter.clone()),
    );
    let json = logging.json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(io::stderr)
    });
    let text = (!logging.json).then(|| {
        tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_writer(io::stderr)
    });
    tracing_subscriber::registry()
        .with(filter)
        .with(json)
        .with(text)
        .init();
}

fn help_text(language: Language) -> &'static str {
    match language {
        Language::Ko => "\
명령어:
  /predict key=value ...   예측 요청 (예: /predict fck=27 fy=400 width=300 height=500 phi_mn=120)
  /predict {\"fck\": 27}     JSON 형식 입력
  /bundle <경로>           모델 번들(.json/.yaml) 로드
  /status                  현재 세션 상태
  /cancel                  입력 수집 취소
  /new                     새 대화 시작
  /help                    도움말
  /q, /quit, /exit         종료",
        Language::En => "\
Commands:
  /predict key=value ...   request a prediction (e.g. /predict fck=27 fy=400 width=300 height=500 phi_mn=120)
  /predict {\"fck\": 27}     JSON payload
  /bundle <path>           load a model bundle (.json/.yaml)
  /status                  show session state
  /cancel                  cancel input collection
  /new                     start a new conversation
  /help                    show this help
  /q, /quit, /exit         quit",
    }
}

fn chat_passthrough(language: Language) -> &'static str {
    match language {
        Language::Ko => "(일반 대화는 외부 대화 엔진으로 전달됩니다.)",
        Language::En => "(Handed to the external chat engine.)",
    }
}

fn nothing_to_cancel(language: Language) -> &'static str {
    match language {
        Language::Ko => "취소할 입력 수집이 없습니다.",
        Language::En => "There is no input collection to cancel.",
    }
}

fn load_bundle(
    handler: &LoadBundleHandler,
    session: &mut PredictionSession,
    path: &Path,
    out: &mut impl Write,
) -> io::Result<()> {
    let cmd = LoadBundleCommand {
        path: path.to_path_buf(),
    };
    match handler.handle(session, cmd) {
        Ok(result) => writeln!(
            out,
            "bundle loaded: {} (targets: {})",
            path.display(),
            result.bundle.targets().join(", ")
        ),
        Err(e) => writeln!(out, "bundle load failed: {}", e),
    }
}

/// Skips lines that are not valid UTF-8; other read errors end the loop.
fn readable_line(line: io::Result<String>) -> io::Result<Option<String>> {
    match line {
        Ok(line) => Ok(Some(line)),
        Err(e) if e.kind() == io::ErrorKind::InvalidData => {
            tracing::warn!(error = %e, "skipping unreadable input line");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.logging);

    let language = config.chat.language;
    let wizard = Arc::new(SlotFillingWizard::new(
        ParameterExtractor::default(),
        config.chat.classifier(),
        config.inference.engine()?,
    ));
    let turns = ProcessTurnHandler::new(wizard, Arc::new(TemplateSummarizer::new(language)));
    let bundles = LoadBundleHandler::new(Arc::new(FileBundleLoader::new()));

    let mut session = PredictionSession::new(language);
    info!(
        session_id = %session.id(),
        rounds = config.inference.rounds,
        "rc-beam-chat v{} started",
        env!("CARGO_PKG_VERSION")
    );

    let stdin = io::stdin();
    let mut out = io::stdout().lock();

    if let Some(path) = &config.bundle.path {
        load_bundle(&bundles, &mut session, path, &mut out)?;
    }
    writeln!(out, "{}", help_text(language))?;

    for line in stdin.lock().lines() {
        let Some(line) = readable_line(line)? else {
            continue;
        };
        match ReplCommand::parse(&line) {
            ReplCommand::Empty => {}
            ReplCommand::Quit => break,
            ReplCommand::Help => writeln!(out, "{}", help_text(language))?,
            ReplCommand::New => {
                let bundle = session.bundle().cloned();
                session = PredictionSession::new(language);
                if let Some(bundle) = bundle {
                    session.install_bundle(bundle);
                }
                info!(session_id = %session.id(), "new session");
                writeln!(out, "new session: {}", session.id())?;
            }
            ReplCommand::Cancel if !session.wizard().is_active() => {
                writeln!(out, "{}", nothing_to_cancel(language))?;
            }
            ReplCommand::Cancel => {
                let result = turns.handle(&mut session, ProcessTurnCommand::new("/cancel"));
                writeln!(out, "{}", result.reply.unwrap_or_default())?;
            }
            ReplCommand::Status => match serde_json::to_string_pretty(&session.status()) {
                Ok(status) => writeln!(out, "{}", status)?,
                Err(e) => writeln!(out, "status unavailable: {}", e)?,
            },
            ReplCommand::Bundle(None) => writeln!(out, "usage: /bundle <path>")?,
            ReplCommand::Bundle(Some(path)) => load_bundle(&bundles, &mut session, &path, &mut out)?,
            ReplCommand::Turn(text) => {
                let result = turns.handle(&mut session, ProcessTurnCommand::new(text));
                match result.reply {
                    Some(reply) => writeln!(out, "{}", reply)?,
                    None => writeln!(out, "{}", chat_passthrough(language))?,
                }
            }
        }
        out.flush()?;
    }

    Ok(())
}
