//! Headless front end: derives and prints a cut plan from command-line
//! trim/clip values, using the same session the GUI drives.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use engine::{Bound, Command, Event, Session, SpanKind};

const USAGE: &str = "\
usage: cut-plan --duration SECONDS [options]

options:
  --trim-start RAW      trim start field text
  --trim-end RAW        trim end field text
  --clip START,END      removal clip (repeatable)
  --save PATH           write the session to a JSON file
";

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = env::args().skip(1).collect();
    match run(&args) {
        Ok(code) => code,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::from(1)
        }
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt::try_init();
}

#[derive(Debug, Clone, Default, PartialEq)]
struct Options {
    duration: f64,
    trim_start: Option<String>,
    trim_end: Option<String>,
    clips: Vec<(String, String)>,
    save: Option<PathBuf>,
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut options = Options::default();
    let mut duration = None;
    let mut iter = args.iter();

    while let Some(flag) = iter.next() {
        let mut value = |name: &str| {
            iter.next()
                .cloned()
                .ok_or_else(|| format!("{name} requires a value"))
        };
        match flag.as_str() {
            "--duration" => {
                let raw = value("--duration")?;
                duration = Some(
                    raw.parse::<f64>()
                        .map_err(|_| format!("--duration must be a number, got {raw:?}"))?,
                );
            }
            "--trim-start" => options.trim_start = Some(value("--trim-start")?),
            "--trim-end" => options.trim_end = Some(value("--trim-end")?),
            "--clip" => {
                let raw = value("--clip")?;
                let Some((start, end)) = raw.split_once(',') else {
                    return Err(format!("--clip expects START,END, got {raw:?}"));
                };
                options
                    .clips
                    .push((start.trim().to_string(), end.trim().to_string()));
            }
            "--save" => options.save = Some(PathBuf::from(value("--save")?)),
            "--help" | "-h" => return Err(USAGE.to_string()),
            other => return Err(format!("unknown argument {other:?}\n\n{USAGE}")),
        }
    }

    let Some(duration) = duration else {
        return Err(format!("--duration is required\n\n{USAGE}"));
    };
    options.duration = duration;
    Ok(options)
}

fn run(args: &[String]) -> Result<ExitCode, String> {
    let options = parse_args(args)?;
    let mut session = Session::new();

    let mut apply = |command: Command| {
        session
            .handle_command(command)
            .map_err(|error| error.to_string())
    };

    apply(Command::LoadMedia {
        duration: options.duration,
        frame_rate: None,
    })?;
    if let Some(raw) = options.trim_start {
        apply(Command::SetTrimStart { raw })?;
    }
    if let Some(raw) = options.trim_end {
        apply(Command::SetTrimEnd { raw })?;
    }
    for (start, end) in options.clips {
        let events = apply(Command::AddClip)?;
        let Some(Event::ClipAdded { index }) = events.first().cloned() else {
            return Err("add clip did not report an index".to_string());
        };
        apply(Command::SetClipBound {
            index,
            bound: Bound::Start,
            raw: start,
        })?;
        apply(Command::SetClipBound {
            index,
            bound: Bound::End,
            raw: end,
        })?;
    }
    if let Some(path) = options.save {
        apply(Command::SaveSession { path })?;
    }

    let events = apply(Command::Submit)?;
    match events.first() {
        Some(Event::Submitted(plan)) => {
            println!("cut plan ({} segments):", plan.segments.len());
            for segment in &plan.segments {
                println!("  keep {:>10.3}s .. {:>10.3}s", segment.start, segment.end);
            }
            println!("kept duration: {:.3}s", plan.kept_duration());
            print_spans(&session);
            Ok(ExitCode::SUCCESS)
        }
        Some(Event::ValidationFailed(report)) => {
            eprintln!("input is not ready to cut:");
            for violation in &report.violations {
                eprintln!("  - {violation}");
            }
            Ok(ExitCode::from(2))
        }
        _ => Err("submit emitted no outcome".to_string()),
    }
}

fn print_spans(session: &Session) {
    println!("indicator spans:");
    for span in session.spans() {
        let label = match span.kind {
            SpanKind::LeadingTrim => "trim head".to_string(),
            SpanKind::TrailingTrim => "trim tail".to_string(),
            SpanKind::Clip { index } => format!("clip {}", index + 1),
        };
        println!(
            "  {label:<10} left {:>7.3}%  width {:>7.3}%",
            span.left_percent, span.width_percent
        );
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::{Options, parse_args};

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|arg| arg.to_string()).collect()
    }

    #[test]
    fn parses_trim_clips_and_save_path() {
        let options = parse_args(&args(&[
            "--duration",
            "120",
            "--trim-start",
            "5",
            "--trim-end",
            "110",
            "--clip",
            "20,30",
            "--clip",
            "40, 45",
            "--save",
            "session.json",
        ]))
        .expect("args should parse");

        assert_eq!(
            options,
            Options {
                duration: 120.0,
                trim_start: Some("5".to_string()),
                trim_end: Some("110".to_string()),
                clips: vec![
                    ("20".to_string(), "30".to_string()),
                    ("40".to_string(), "45".to_string()),
                ],
                save: Some(PathBuf::from("session.json")),
            }
        );
    }

    #[test]
    fn duration_is_required() {
        let result = parse_args(&args(&["--trim-start", "5"]));
        assert!(result.is_err());
    }

    #[test]
    fn malformed_clip_argument_is_rejected() {
        let result = parse_args(&args(&["--duration", "10", "--clip", "20"]));
        assert!(result.is_err());
    }
}
