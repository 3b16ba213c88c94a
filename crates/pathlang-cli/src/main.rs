use pathlang::{AngleUnit, EmitOptions, NumericMode, ParseOptions, PathDocument};
use serde::Serialize;
use std::io::Read;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Path(pathlang::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Path(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<pathlang::Error> for CliError {
    fn from(value: pathlang::Error) -> Self {
        Self::Path(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Parse,
    Elements,
    Trace,
    Svg,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    pretty: bool,
    lenient: bool,
    radians: bool,
    svg_element: bool,
}

impl Args {
    fn parse_options(&self) -> ParseOptions {
        let mut options = ParseOptions::strict();
        if self.lenient {
            options = options.with_numeric(NumericMode::Lenient);
        }
        if self.radians {
            options = options.with_angle_unit(AngleUnit::Radians);
        }
        options
    }
}

fn usage() -> &'static str {
    "pathlang-cli\n\
\n\
USAGE:\n\
  pathlang-cli [parse] [--pretty] [--lenient] [--radians] [<path>|-]\n\
  pathlang-cli elements [--pretty] [--lenient] [--radians] [<path>|-]\n\
  pathlang-cli trace [--lenient] [--radians] [<path>|-]\n\
  pathlang-cli svg [--element] [--lenient] [--radians] [<path>|-]\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', input is read from stdin.\n\
  - parse prints the emitted geometry as JSON; elements prints the parsed element list.\n\
  - trace prints one drawing call per line.\n\
  - svg prints plain SVG path data; --element wraps it in a <path> element with its fill rule.\n\
  - Numbers that do not fit their field are errors unless --lenient is given.\n\
  - Arc rotation is read in degrees unless --radians is given.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "parse" => args.command = Command::Parse,
            "elements" => args.command = Command::Elements,
            "trace" => args.command = Command::Trace,
            "svg" => args.command = Command::Svg,
            "--pretty" => args.pretty = true,
            "--lenient" => args.lenient = true,
            "--radians" => args.radians = true,
            "--element" => args.svg_element = true,
            "--" => {
                if let Some(rest) = it.next() {
                    if args.input.is_some() {
                        return Err(CliError::Usage(usage()));
                    }
                    args.input = Some(rest.clone());
                }
                if it.next().is_some() {
                    return Err(CliError::Usage(usage()));
                }
            }
            other if other.starts_with('-') && other != "-" => {
                return Err(CliError::Usage(usage()));
            }
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    Ok(args)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(std::io::stdout().lock(), value)?;
    } else {
        serde_json::to_writer(std::io::stdout().lock(), value)?;
    }
    println!();
    Ok(())
}

fn run(args: Args) -> Result<(), CliError> {
    let text = read_input(args.input.as_deref())?;
    // Path strings are often stored one per line; a trailing newline is not part of the path.
    let text = text.trim_end_matches(['\r', '\n']);
    let doc = PathDocument::parse_with_options(text, args.parse_options())?;

    match args.command {
        Command::Parse => write_json(&doc.emit(), args.pretty),
        Command::Elements => write_json(&doc.elements(), args.pretty),
        Command::Trace => {
            let emitted = doc.emit_with_options(EmitOptions::default().with_trace(true));
            print!("{}", emitted.trace.unwrap_or_default());
            Ok(())
        }
        Command::Svg => {
            let geometry = doc.emit();
            if args.svg_element {
                println!("{}", pathlang::to_svg_path_element(&geometry));
            } else {
                println!("{}", geometry.to_svg_path_data());
            }
            Ok(())
        }
    }
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = run(args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
